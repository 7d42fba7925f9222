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

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::angle::{normalize_90,normalize_180};
use crate::{pow2,sqrt};

/// geodetic position in degrees. latitude ∈ [-90,90], longitude ∈ (-180,180]
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64
}

impl GeoPosition {
    pub fn new (latitude: f64, longitude: f64)->Self {
        GeoPosition { latitude, longitude }
    }

    pub fn from_degrees (lat: f64, lon: f64)->Self {
        GeoPosition { latitude: normalize_90(lat), longitude: normalize_180(lon) }
    }

    /// combined distance in degree space - note this deliberately treats
    /// latitude and longitude as an un-projected euclidean plane
    pub fn euclidean_degrees (&self, other: &GeoPosition)->f64 {
        sqrt( pow2( self.latitude - other.latitude) + pow2( self.longitude - other.longitude))
    }

    /// per-axis absolute differences in degrees (delta_lat, delta_lon)
    pub fn axis_deltas (&self, other: &GeoPosition)->(f64,f64) {
        ( (self.latitude - other.latitude).abs(), (self.longitude - other.longitude).abs() )
    }
}

impl fmt::Display for GeoPosition {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_degrees () {
        let p1 = GeoPosition::new( 0.0, 0.0);
        let p2 = GeoPosition::new( 3.0, 4.0);
        assert_eq!( p1.euclidean_degrees( &p2), 5.0);
    }

    #[test]
    fn test_from_degrees_normalizes () {
        let p = GeoPosition::from_degrees( 91.0, 181.0);
        assert_eq!( p.latitude, 89.0);
        assert_eq!( p.longitude, -179.0);
    }
}
