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

//! one background task per satellite. The task is the sole writer of the live
//! orbit state; readers get cloned snapshots and never block the step loop for
//! longer than the lock hold. There is no coordination across runners - each
//! paces itself on its own wall clock.

use std::sync::{Arc, RwLock, atomic::{AtomicBool,Ordering}};
use std::time::Duration;
use rand::{Rng,SeedableRng,rngs::StdRng};
use serde::{Deserialize,Serialize};
use tokio::{sync::Notify, task::JoinHandle, time::sleep};
use tracing::{debug,info,warn};

use crate::SatelliteReading;
use crate::errors::{OrbitalSimError,Result,op_failed};
use crate::kepler::{self,GroundTrack,OrbitState,OrbitalElements,OrientationFrame};

/// height a forced de-orbit clamps to - just below the death threshold
const FORCED_DEORBIT_HEIGHT: f64 = -11_000.0;

/// what to do with a satellite whose eccentricity exceeds 1 (escape trajectory).
/// The policy is fleet-wide configuration; the two variants are never mixed
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum HyperbolicPolicy {
    /// never run the satellite - it is marked Dead at start()
    RejectOnStart,
    /// integrate anyway, producing an unbounded radius; only a forced de-orbit
    /// or a non-finite projection terminates the loop
    RunUntilEscape,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum RunnerStatus {
    Created,
    Running,
    Dead,
    Stopped,
}

/// per-runner knobs, derived from the fleet-level [`crate::config::SimConfig`]
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct RunnerConfig {
    pub step_seconds: f64,
    pub step_scale: f64,
    pub pacing: Duration,
    pub deorbit_probability: f64,
    pub hyperbolic_policy: HyperbolicPolicy,
    pub central_radius: f64,
}

/// the single shared-mutable cell per satellite. All fields of one iteration are
/// published under one write lock so readers never observe a torn update
#[derive(Debug,Clone)]
pub struct LiveOrbitState {
    pub orbit: OrbitState,
    pub track: GroundTrack,
    pub status: RunnerStatus,
}

/// owns one satellite's evolving state and drives its step loop on an
/// independent tokio task. Lifecycle: Created -> Running -> { Dead, Stopped }
pub struct OrbitRunner {
    id: String,
    elements: OrbitalElements,
    frame: OrientationFrame,
    state: Arc<RwLock<LiveOrbitState>>,
    stop_requested: Arc<AtomicBool>,
    stop_notify: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl OrbitRunner {
    pub fn new (id: String, elements: OrbitalElements, frame: OrientationFrame, theta_0: f64, central_radius: f64)->Self {
        let orbit = OrbitState::initial( &elements, theta_0);
        let track = kepler::project( &orbit, &frame, central_radius);
        let state = Arc::new( RwLock::new( LiveOrbitState { orbit, track, status: RunnerStatus::Created }));

        OrbitRunner {
            id, elements, frame, state,
            stop_requested: Arc::new( AtomicBool::new(false)),
            stop_notify: Arc::new( Notify::new()),
            task: None
        }
    }

    pub fn id (&self)->&str {
        &self.id
    }

    pub fn elements (&self)->&OrbitalElements {
        &self.elements
    }

    pub fn status (&self)->RunnerStatus {
        self.state.read().unwrap().status
    }

    pub fn is_alive (&self)->bool {
        self.status() == RunnerStatus::Running
    }

    /// immutable snapshot of the last published state. Safe to call from any
    /// number of reader threads while the step loop is running
    pub fn current_reading (&self)->SatelliteReading {
        let state = self.state.read().unwrap();
        SatelliteReading {
            id: self.id.clone(),
            height: state.track.height,
            latitude: state.track.latitude,
            longitude: state.track.longitude,
        }
    }

    /// transition to Running and spawn the step loop. Under RejectOnStart an
    /// escape-trajectory satellite is marked Dead instead and never runs -
    /// this is an advisory condition, not an error
    pub fn start (&mut self, config: &RunnerConfig)->Result<()> {
        {
            let state = self.state.read().unwrap();
            if state.status != RunnerStatus::Created {
                return Err( op_failed!("satellite {} started twice (status {:?})", self.id, state.status));
            }
        }

        if self.elements.is_escape_trajectory() {
            warn!("satellite {} has escape velocity (epsilon = {:.4})", self.id, self.elements.epsilon);
            if config.hyperbolic_policy == HyperbolicPolicy::RejectOnStart {
                self.state.write().unwrap().status = RunnerStatus::Dead;
                return Ok(())
            }
        }

        self.state.write().unwrap().status = RunnerStatus::Running;

        let id = self.id.clone();
        let elements = self.elements.clone();
        let frame = self.frame.clone();
        let state = self.state.clone();
        let stop = self.stop_requested.clone();
        let stop_notify = self.stop_notify.clone();
        let config = config.clone();

        self.task = Some( tokio::spawn( async move {
            run_orbit( id, elements, frame, state, stop, stop_notify, config).await
        }));

        Ok(())
    }

    /// cooperative halt: flag the loop and join it before returning.
    /// Idempotent - calling after Dead or a previous stop is a no-op
    pub async fn stop (&mut self)->Result<()> {
        self.stop_requested.store( true, Ordering::Relaxed);
        self.stop_notify.notify_one(); // permit wakes the loop even mid-pacing-sleep

        if let Some(task) = self.task.take() {
            task.await.map_err( |e| op_failed!("satellite {} task join failed: {}", self.id, e))?;
        }

        let mut state = self.state.write().unwrap();
        if state.status == RunnerStatus::Running {
            state.status = RunnerStatus::Stopped;
            debug!("satellite {} stopped", self.id);
        }
        Ok(())
    }
}

/// the step loop. Each iteration advances the simulated clock by
/// step_seconds * step_scale but sleeps only the configured pacing interval -
/// the two are deliberately independent knobs
async fn run_orbit (id: String, elements: OrbitalElements, frame: OrientationFrame,
                    state: Arc<RwLock<LiveOrbitState>>, stop: Arc<AtomicBool>, stop_notify: Arc<Notify>,
                    config: RunnerConfig) {
    debug!("starting satellite {}", id);

    let mut rng = StdRng::from_os_rng();
    let sim_dt = config.step_seconds * config.step_scale;
    let mut t = 0.0;

    while !stop.load( Ordering::Relaxed) {
        let mut orbit = state.read().unwrap().orbit;
        orbit.step( &elements, sim_dt);
        let mut track = kepler::project( &orbit, &frame, config.central_radius);

        // randomized forced de-orbit, for exercising downstream death handling
        if config.deorbit_probability > 0.0 && rng.random::<f64>() < config.deorbit_probability {
            track.height = FORCED_DEORBIT_HEIGHT;
        }

        // a non-finite projection (escape trajectory blow-up) is terminal too -
        // the loop must never exit without recording a terminal state
        let dead = !track.height.is_finite() || track.height < 0.0;

        {
            let mut state = state.write().unwrap();
            state.orbit = orbit;
            state.track = track;
            if dead { state.status = RunnerStatus::Dead; }
        }

        if dead {
            info!("satellite {} died at t={} ({:.4}, {:.4})", id, t, track.latitude, track.longitude);
            return;
        }

        t += sim_dt;
        tokio::select! {
            _ = sleep( config.pacing) => {}
            _ = stop_notify.notified() => {} // stop request cuts the pacing sleep short
        }
    }
}
