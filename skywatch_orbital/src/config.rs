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

//! RON-deserializable simulation configuration.
//! Defaults reproduce the standard deployment: Earth constants, 0.5% relative noise,
//! a combined 20 degree visibility threshold and a 10% forced de-orbit probability.

use std::{fs,path::Path,time::Duration};
use serde::{Deserialize,Serialize};

use crate::errors::Result;
use crate::runner::{HyperbolicPolicy,RunnerConfig};
use crate::visibility::DistanceMetric;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64, // m^3 / (kg s^2)
    pub central_mass: f64,           // kg
    pub central_radius: f64,         // m, reference surface radius
}

impl Default for PhysicalConstants {
    fn default ()->Self {
        PhysicalConstants {
            gravitational_constant: 6.67430e-11,
            central_mass: 5.972e24,
            central_radius: 6.371e6,
        }
    }
}

/// randomized generation ranges for satellite creation.
/// mass = mass_mean * (1 + mass_rel_stddev * N(0,1))
/// r_min = central_radius * (periapsis_radii_mean + periapsis_radii_stddev * N(0,1))
/// w_max = sqrt(G*M / r_min^3) * (1 + omega_rel_stddev * N(0,1))
/// theta_0 uniform in [0, initial_anomaly_max)
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct SatelliteGenRanges {
    pub mass_mean: f64,              // kg
    pub mass_rel_stddev: f64,
    pub periapsis_radii_mean: f64,   // in central radii
    pub periapsis_radii_stddev: f64,
    pub omega_rel_stddev: f64,
    pub initial_anomaly_max: f64,    // radians
}

impl Default for SatelliteGenRanges {
    fn default ()->Self {
        SatelliteGenRanges {
            mass_mean: 100.0,
            mass_rel_stddev: 2.0,
            periapsis_radii_mean: 3.0,
            periapsis_radii_stddev: 1.0,
            omega_rel_stddev: 0.1,
            initial_anomaly_max: skywatch_common::TWO_PI,
        }
    }
}

/// randomized placement ranges for telescope creation.
/// latitude = latitude_mean + latitude_stddev * N(0,1) (degrees, normalized),
/// longitude uniform in (-180,180]
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct TelescopeGenRanges {
    pub latitude_mean: f64,   // deg
    pub latitude_stddev: f64, // deg
}

impl Default for TelescopeGenRanges {
    fn default ()->Self {
        TelescopeGenRanges { latitude_mean: 0.0, latitude_stddev: 15.0 }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct VisibilityConfig {
    pub metric: DistanceMetric,

    /// relative stddev of the multiplicative observation noise, 0 disables
    pub noise_stddev: f64,
}

impl Default for VisibilityConfig {
    fn default ()->Self {
        VisibilityConfig { metric: DistanceMetric::Euclidean { max_deg: 20.0 }, noise_stddev: 0.005 }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct SimConfig {
    pub n_satellites: usize,
    pub n_telescopes: usize,

    pub physical: PhysicalConstants,
    pub satellite_gen: SatelliteGenRanges,
    pub telescope_gen: TelescopeGenRanges,
    pub visibility: VisibilityConfig,

    /// simulated seconds per physics step
    pub step_seconds: f64,

    /// simulated steps advanced per loop iteration - independent of the wall-clock pacing
    pub step_scale: f64,

    /// wall-clock sleep between loop iterations
    pub pacing: Duration,

    /// per-iteration probability of a forced de-orbit, 0 disables
    pub deorbit_probability: f64,

    pub hyperbolic_policy: HyperbolicPolicy,

    /// fixed seed for deterministic fleet construction
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default ()->Self {
        SimConfig {
            n_satellites: 5000,
            n_telescopes: 20,
            physical: PhysicalConstants::default(),
            satellite_gen: SatelliteGenRanges::default(),
            telescope_gen: TelescopeGenRanges::default(),
            visibility: VisibilityConfig::default(),
            step_seconds: 5.0,
            step_scale: 5.0,
            pacing: Duration::from_secs(5),
            deorbit_probability: 0.1,
            hyperbolic_policy: HyperbolicPolicy::RejectOnStart,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn make_runner_config (&self)->RunnerConfig {
        RunnerConfig {
            step_seconds: self.step_seconds,
            step_scale: self.step_scale,
            pacing: self.pacing,
            deorbit_probability: self.deorbit_probability,
            hyperbolic_policy: self.hyperbolic_policy,
            central_radius: self.physical.central_radius,
        }
    }
}

pub fn load_config<C,P> (path: P)->Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read_to_string( path.as_ref())?;
    Ok( ron::from_str( &data)? )
}
