/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “SkyWatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the owned registry of runners and telescopes, with an explicit lifecycle
//! (new / start_all / stop_all) instead of ambient global collections. Entries
//! are fixed after construction and indexed in creation order.

use chrono::Utc;
use rand::{Rng,SeedableRng,rngs::StdRng};
use rand_distr::StandardNormal;
use serde::{Deserialize,Serialize};
use tracing::debug;
use skywatch_common::{geo::GeoPosition,sqrt};

use crate::{SatelliteReading,make_instance_id};
use crate::config::{SimConfig,VisibilityConfig};
use crate::errors::{OrbitalSimError,Result,config_error};
use crate::kepler::{OrbitalElements,OrientationFrame};
use crate::runner::{OrbitRunner,RunnerConfig,RunnerStatus};
use crate::visibility::observe;

/// immutable observer: id plus fixed geographic position
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Telescope {
    pub id: String,
    pub position: GeoPosition,
}

/// result of one visibility query: the readings visible from one telescope,
/// in satellite creation order, stamped with the query time
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TelescopeReadings {
    pub time: f64, // unix epoch seconds
    pub telescope: Telescope,
    pub satellites: Vec<SatelliteReading>,
}

pub struct Fleet {
    runners: Vec<OrbitRunner>,
    telescopes: Vec<Telescope>,
    visibility: VisibilityConfig,
    runner_config: RunnerConfig,
}

impl Fleet {

    /// build N satellites and M telescopes from the configured generation
    /// ranges. A fixed seed makes construction fully deterministic
    pub fn new (config: &SimConfig)->Result<Fleet> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64( seed),
            None => StdRng::from_os_rng(),
        };

        let phys = &config.physical;
        let r#gen = &config.satellite_gen;
        let mu = phys.gravitational_constant * phys.central_mass;

        let mut runners: Vec<OrbitRunner> = Vec::with_capacity( config.n_satellites);
        for _ in 0..config.n_satellites {
            // the Gaussian ranges can produce non-physical negative draws - resample
            // rather than failing fleet construction on them
            let mass = positive_draw( &mut rng, "satellite mass",
                |rng| r#gen.mass_mean * (1.0 + r#gen.mass_rel_stddev * normal(rng)))?;
            let r_min = positive_draw( &mut rng, "periapsis radius",
                |rng| phys.central_radius * (r#gen.periapsis_radii_mean + r#gen.periapsis_radii_stddev * normal(rng)))?;
            let w_max = positive_draw( &mut rng, "periapsis angular velocity",
                |rng| sqrt( mu / (r_min * r_min * r_min)) * (1.0 + r#gen.omega_rel_stddev * normal(rng)))?;
            let theta_0 = rng.random::<f64>() * r#gen.initial_anomaly_max;

            let elements = OrbitalElements::new( mass, r_min, w_max, phys)?;
            let frame = OrientationFrame::sample( &mut rng)?;
            let id = make_instance_id( "sat", &mut rng);

            runners.push( OrbitRunner::new( id, elements, frame, theta_0, phys.central_radius));
        }

        let tgen = &config.telescope_gen;
        let mut telescopes: Vec<Telescope> = Vec::with_capacity( config.n_telescopes);
        for _ in 0..config.n_telescopes {
            let latitude = tgen.latitude_mean + tgen.latitude_stddev * normal( &mut rng);
            let longitude = rng.random::<f64>() * 360.0 - 180.0;
            telescopes.push( Telescope {
                id: make_instance_id( "tel", &mut rng),
                position: GeoPosition::from_degrees( latitude, longitude),
            });
        }

        Ok( Fleet { runners, telescopes, visibility: config.visibility.clone(), runner_config: config.make_runner_config() })
    }

    /// assemble a fleet from explicitly constructed parts (deterministic setups, tests)
    pub fn from_parts (runners: Vec<OrbitRunner>, telescopes: Vec<Telescope>,
                       visibility: VisibilityConfig, runner_config: RunnerConfig)->Fleet {
        Fleet { runners, telescopes, visibility, runner_config }
    }

    pub fn start_all (&mut self)->Result<()> {
        let config = self.runner_config.clone();
        for runner in self.runners.iter_mut() {
            runner.start( &config)?;
        }
        Ok(())
    }

    pub async fn stop_all (&mut self)->Result<()> {
        for runner in self.runners.iter_mut() {
            runner.stop().await?;
        }
        Ok(())
    }

    pub fn satellite_count (&self)->usize {
        self.runners.len()
    }

    pub fn telescope_count (&self)->usize {
        self.telescopes.len()
    }

    /// number of runners currently Running
    pub fn alive_count (&self)->usize {
        self.runners.iter().filter( |r| r.is_alive()).count()
    }

    pub fn satellite (&self, index: usize)->Result<&OrbitRunner> {
        self.runners.get( index)
            .ok_or( OrbitalSimError::LookupError { what: "satellite", index, len: self.runners.len() })
    }

    pub fn telescope (&self, index: usize)->Result<&Telescope> {
        self.telescopes.get( index)
            .ok_or( OrbitalSimError::LookupError { what: "telescope", index, len: self.telescopes.len() })
    }

    /// readings of all non-dead satellites visible from the given telescope,
    /// in creation order. Readings are eventually-consistent snapshots of
    /// independently paced runners - there is no fleet-wide time slice
    pub fn visible_satellites (&self, telescope_idx: usize)->Result<TelescopeReadings> {
        let telescope = self.telescope( telescope_idx)?.clone();
        let mut rng = rand::rng();

        let mut n_alive = 0;
        let mut satellites: Vec<SatelliteReading> = Vec::new();
        for runner in self.runners.iter() {
            if runner.status() == RunnerStatus::Dead { continue }
            n_alive += 1;

            let reading = runner.current_reading();
            if let Some(observed) = observe( &telescope.position, &reading,
                                             &self.visibility.metric, self.visibility.noise_stddev, &mut rng) {
                satellites.push( observed);
            }
        }
        debug!("telescope {}: {} satellites alive, {} visible", telescope.id, n_alive, satellites.len());

        Ok( TelescopeReadings {
            time: Utc::now().timestamp_millis() as f64 / 1000.0,
            telescope,
            satellites,
        })
    }
}

fn normal (rng: &mut StdRng)->f64 {
    rng.sample(StandardNormal)
}

const MAX_DRAW_ATTEMPTS: usize = 64;

fn positive_draw<F> (rng: &mut StdRng, what: &str, mut draw: F)->Result<f64> where F: FnMut(&mut StdRng)->f64 {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let v = draw( rng);
        if v > 0.0 && v.is_finite() { return Ok(v) }
    }
    Err( config_error!("generation range for {} cannot produce positive values", what))
}
