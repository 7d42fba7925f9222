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
#![allow(unused)]

//! angle normalization helpers for geodetic degrees

#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_90 () {
        assert_eq!( normalize_90( 91.0), 89.0);
        assert_eq!( normalize_90( -91.0), -89.0);
        assert_eq!( normalize_90( 45.0), 45.0);
    }

    #[test]
    fn test_normalize_180 () {
        assert_eq!( normalize_180( 181.0), -179.0);
        assert_eq!( normalize_180( -181.0), 179.0);
        assert_eq!( normalize_180( 90.0), 90.0);
    }

    #[test]
    fn test_normalize_360 () {
        assert_eq!( normalize_360( -10.0), 350.0);
        assert_eq!( normalize_360( 370.0), 10.0);
    }
}
