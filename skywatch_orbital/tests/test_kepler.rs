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

use rand::{SeedableRng,rngs::StdRng};
use skywatch_common::TWO_PI;
use skywatch_orbital::config::PhysicalConstants;
use skywatch_orbital::errors::OrbitalSimError;
use skywatch_orbital::kepler::{project,OrbitState,OrbitalElements,OrientationFrame};

fn earth ()->PhysicalConstants {
    PhysicalConstants::default()
}

fn circular_omega (phys: &PhysicalConstants, r: f64)->f64 {
    (phys.gravitational_constant * phys.central_mass / (r*r*r)).sqrt()
}

/// elements for w_max = beta * circular velocity at r_min = 3 earth radii.
/// analytically epsilon = |beta^2 - 1| for this parameterization
fn test_elements (beta: f64)->(OrbitalElements,f64) {
    let phys = earth();
    let r_min = 3.0 * phys.central_radius;
    let w_max = beta * circular_omega( &phys, r_min);
    (OrbitalElements::new( 100.0, r_min, w_max, &phys).unwrap(), r_min)
}

#[test]
fn test_rejects_invalid_parameters () {
    let phys = earth();
    let r = 3.0 * phys.central_radius;
    let w = circular_omega( &phys, r);

    assert!( matches!( OrbitalElements::new( 0.0, r, w, &phys), Err(OrbitalSimError::ConfigError(_))));
    assert!( matches!( OrbitalElements::new( -10.0, r, w, &phys), Err(OrbitalSimError::ConfigError(_))));
    assert!( matches!( OrbitalElements::new( 100.0, 0.0, w, &phys), Err(OrbitalSimError::ConfigError(_))));
    assert!( matches!( OrbitalElements::new( 100.0, r, 0.0, &phys), Err(OrbitalSimError::ConfigError(_))));
    assert!( matches!( OrbitalElements::new( f64::NAN, r, w, &phys), Err(OrbitalSimError::ConfigError(_))));
}

#[test]
fn test_circular_orbit_eccentricity () {
    let (elements,r_min) = test_elements( 1.0);
    assert!( elements.epsilon < 1e-6, "circular orbit epsilon was {}", elements.epsilon);
    assert!( (elements.periapsis() - r_min).abs() / r_min < 1e-6);
    assert!( !elements.is_escape_trajectory());
}

#[test]
fn test_eccentricity_matches_analytic_value () {
    let (elements,_) = test_elements( 1.2);
    let expected = 1.2f64 * 1.2 - 1.0; // |beta^2 - 1|
    assert!( (elements.epsilon - expected).abs() < 1e-9, "epsilon {} expected {}", elements.epsilon, expected);
}

#[test]
fn test_escape_velocity_is_hyperbolic () {
    // fractional deviations beyond sqrt(2) of circular velocity escape
    let (elements,_) = test_elements( 2.0);
    assert!( elements.epsilon > 1.0);
    assert!( elements.is_escape_trajectory());
    assert_eq!( elements.apoapsis(), None);
}

#[test]
fn test_radius_stays_within_conic_bounds () {
    let (elements,_) = test_elements( 1.2); // epsilon 0.44
    let periapsis = elements.periapsis();
    let apoapsis = elements.apoapsis().unwrap();

    let mut state = OrbitState::initial( &elements, 0.0);
    assert!( (state.r - periapsis).abs() / periapsis < 1e-9);

    // semi-major axis from the conic, then one full period by Kepler's third law
    let phys = earth();
    let mu = phys.gravitational_constant * phys.central_mass;
    let a = elements.alpha / (1.0 - elements.epsilon * elements.epsilon);
    let period = TWO_PI * (a*a*a / mu).sqrt();
    let dt = period / 20_000.0;

    let lo = periapsis * (1.0 - 1e-6);
    let hi = apoapsis * (1.0 + 1e-6);
    let mut steps = 0;
    while state.theta < TWO_PI && steps < 200_000 {
        state.step( &elements, dt);
        assert!( state.r >= lo && state.r <= hi, "r {} out of [{},{}] at theta {}", state.r, lo, hi, state.theta);
        steps += 1;
    }
    assert!( state.theta >= TWO_PI, "did not complete a full revolution in {} steps", steps);
}

#[test]
fn test_project_is_deterministic () {
    let (elements,_) = test_elements( 1.1);
    let mut rng = StdRng::seed_from_u64( 7);
    let frame = OrientationFrame::sample( &mut rng).unwrap();
    let state = OrbitState::initial( &elements, 1.3);
    let radius = earth().central_radius;

    let t1 = project( &state, &frame, radius);
    let t2 = project( &state, &frame, radius);
    assert_eq!( t1, t2);
}

#[test]
fn test_projected_ranges () {
    // latitude must stay in [-90,90]; longitude is confined to [-90,90] by the
    // single-argument arctangent projection
    let (elements,_) = test_elements( 1.15);
    let radius = earth().central_radius;
    let mut rng = StdRng::seed_from_u64( 12345);

    for _ in 0..50 {
        let frame = OrientationFrame::sample( &mut rng).unwrap();
        let mut state = OrbitState::initial( &elements, 0.0);
        for _ in 0..500 {
            state.step( &elements, 60.0);
            let track = project( &state, &frame, radius);
            assert!( track.latitude >= -90.0 && track.latitude <= 90.0, "latitude {}", track.latitude);
            assert!( track.longitude >= -90.0 && track.longitude <= 90.0, "longitude {}", track.longitude);
        }
    }
}

#[test]
fn test_near_polar_projection () {
    // a quarter-turn around y maps the periapsis direction to the pole
    let (elements,r_min) = test_elements( 1.0);
    let frame = OrientationFrame::from_euler( 0.0, std::f64::consts::FRAC_PI_2, 0.0).unwrap();
    let state = OrbitState::initial( &elements, 0.0);

    let track = project( &state, &frame, earth().central_radius);
    assert!( track.latitude > 89.9, "latitude {}", track.latitude);
    assert!( track.height > 0.0);
    assert!( (track.height - (r_min - earth().central_radius)).abs() < 1.0);
}

#[test]
fn test_identity_frame_longitude_follows_anomaly () {
    let (elements,_) = test_elements( 1.0);
    let frame = OrientationFrame::identity();
    let state = OrbitState::initial( &elements, 0.5);

    let track = project( &state, &frame, earth().central_radius);
    assert!( (track.latitude).abs() < 1e-9);
    assert!( (track.longitude - 0.5f64.to_degrees()).abs() < 1e-6);
}

#[test]
fn test_degenerate_rotation_rejected () {
    assert!( matches!( OrientationFrame::from_euler( f64::NAN, 0.0, 0.0), Err(OrbitalSimError::ConfigError(_))));
}
