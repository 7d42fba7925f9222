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

//! closed-form two-body satellite simulation engine.
//!
//! Each satellite follows an exact Keplerian conic whose plane is randomized at creation.
//! A per-satellite background task advances true anomaly in discrete, wall-clock paced
//! steps and publishes geographic snapshots that any number of concurrent observers
//! (telescopes) can read without coordination.
//!
//! See Thornton, Marion: Classical Dynamics, Fifth Edition, Ch. 8.7 for the derivation
//! of the orbital equations used in [`kepler`].

use rand::Rng;
use serde::{Deserialize,Serialize};

pub mod errors;

pub mod config;
pub mod kepler;
pub mod runner;
pub mod visibility;
pub mod fleet;

/// instantaneous geographic state of one satellite, as seen by observers.
/// this is a fixed-shape snapshot - fields are captured together under one lock
/// by the owning runner, never assembled ad hoc
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SatelliteReading {
    pub id: String,

    /// meters above the reference surface
    #[serde(rename = "altitude")]
    pub height: f64,

    /// degrees
    pub latitude: f64,

    /// degrees, range restricted per [`kepler::project`]
    pub longitude: f64,
}

/// mint a `<prefix>_<12 hex digits>` instance id from the provided rng
pub fn make_instance_id (prefix: &str, rng: &mut impl Rng)->String {
    format!("{}_{:012x}", prefix, rng.random::<u64>() & 0xffff_ffff_ffff)
}
