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

//! observation model: distance-policy visibility plus multiplicative Gaussian
//! observation noise. [`observe`] is a total function with no shared state -
//! its only effect beyond the return value is drawing from the provided rng.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize,Serialize};
use skywatch_common::geo::GeoPosition;

use crate::SatelliteReading;

/// distance policy between an observer and a satellite ground position, in
/// degree space. Both deployed variants are supported as configuration -
/// neither is canonical
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub enum DistanceMetric {
    /// combined sqrt(dlat^2 + dlon^2) against a single threshold
    Euclidean { max_deg: f64 },
    /// independent absolute thresholds per axis
    PerAxis { max_lat_deg: f64, max_lon_deg: f64 },
}

impl DistanceMetric {
    /// visible iff the distance does not strictly exceed the threshold(s)
    pub fn is_within (&self, observer: &GeoPosition, target: &GeoPosition)->bool {
        match self {
            DistanceMetric::Euclidean { max_deg } => {
                observer.euclidean_degrees( target) <= *max_deg
            }
            DistanceMetric::PerAxis { max_lat_deg, max_lon_deg } => {
                let (dlat,dlon) = observer.axis_deltas( target);
                dlat <= *max_lat_deg && dlon <= *max_lon_deg
            }
        }
    }
}

/// test visibility of a satellite reading from an observer position and, if
/// visible, perturb each numeric field by v' = v + v * noise_stddev * N(0,1).
/// noise_stddev == 0 passes the reading through exactly
pub fn observe (observer: &GeoPosition, reading: &SatelliteReading, metric: &DistanceMetric,
                noise_stddev: f64, rng: &mut impl Rng)->Option<SatelliteReading> {
    let target = GeoPosition::new( reading.latitude, reading.longitude);
    if !metric.is_within( observer, &target) {
        return None
    }

    if noise_stddev == 0.0 {
        return Some( reading.clone())
    }

    Some( SatelliteReading {
        id: reading.id.clone(),
        height: noisy( reading.height, noise_stddev, rng),
        latitude: noisy( reading.latitude, noise_stddev, rng),
        longitude: noisy( reading.longitude, noise_stddev, rng),
    })
}

fn noisy (value: f64, stddev: f64, rng: &mut impl Rng)->f64 {
    let n: f64 = rng.sample(StandardNormal);
    value + value * stddev * n
}
