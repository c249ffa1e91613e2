//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::ellipsoid::{Ellipsoid, ProjectionParams, NATIONAL_GRID};
use crate::point::{EllipsoidalPoint, ProjectedPoint};
use crate::projection::{footpoint_latitude, forward_project, inverse_project, meridional_arc};
use approx::assert_relative_eq;

fn dms(d: f64, m: f64, s: f64) -> f64 {
    d + m / 60.0 + s / 3600.0
}

#[test]
fn test_true_origin() {
    let origin = EllipsoidalPoint::from_degrees(49.0, -2.0);
    assert_relative_eq!(meridional_arc(&NATIONAL_GRID, origin.phi), 0.0);
    assert_eq!(
        forward_project(&origin, &NATIONAL_GRID),
        ProjectedPoint {
            easting: 400000.0,
            northing: -100000.0,
        }
    );
}

#[test]
fn test_forward_caister() {
    // Caister Water Tower, Ordnance Survey worked example
    let point = EllipsoidalPoint::from_degrees(dms(52.0, 39.0, 27.2531), dms(1.0, 43.0, 4.5177));
    assert_eq!(
        forward_project(&point, &NATIONAL_GRID),
        ProjectedPoint {
            easting: 651410.0,
            northing: 313177.0,
        }
    );
}

#[test]
fn test_inverse_caister() {
    let point = inverse_project(&ProjectedPoint::new(651409.903, 313177.270), &NATIONAL_GRID);
    let latlon = point.to_degrees();
    assert_relative_eq!(latlon.lat, dms(52.0, 39.0, 27.2531), epsilon = 1e-7);
    assert_relative_eq!(latlon.lon, dms(1.0, 43.0, 4.5177), epsilon = 1e-7);
}

#[test]
fn test_footpoint_latitude() {
    assert_relative_eq!(
        footpoint_latitude(-100000.0, &NATIONAL_GRID),
        NATIONAL_GRID.phi0,
        epsilon = 1e-12
    );
    for northing in &[0.0, 313177.27, 650000.0, 1300000.0] {
        let phi = footpoint_latitude(*northing, &NATIONAL_GRID);
        let arc = meridional_arc(&NATIONAL_GRID, phi);
        assert!((northing - NATIONAL_GRID.n0 - arc).abs() < 0.00001);
    }
}

#[test]
fn test_footpoint_iteration_limit() {
    // Semi-minor axis three times the semi-major one: each correction overshoots
    let params = ProjectionParams {
        ellipsoid: Ellipsoid {
            a: 1000.0,
            b: 3000.0,
            e2: 0.0,
        },
        f0: 1.0,
        e0: 0.0,
        n0: 0.0,
        phi0: 0.0,
        lam0: 0.0,
    };
    let phi = footpoint_latitude(500.0, &params);
    assert!(phi.is_finite());
    // Estimate after 20 corrections is returned unchanged
    assert_relative_eq!(phi, 2.6088495896356125, max_relative = 1e-6);
    assert!((500.0 - meridional_arc(&params, phi)).abs() > 1000.0);
}

#[test]
fn test_round_trip() {
    for easting in (0..=700_000).step_by(50_000) {
        for northing in (0..=1_300_000).step_by(100_000) {
            let point = ProjectedPoint::new(easting as f64, northing as f64);
            let back = forward_project(&inverse_project(&point, &NATIONAL_GRID), &NATIONAL_GRID);
            assert!(
                (back.easting - point.easting).abs() <= 1.0
                    && (back.northing - point.northing).abs() <= 1.0,
                "{:?} -> {:?}",
                point,
                back
            );
        }
    }
}

#[test]
fn test_forward_rounds_to_metres() {
    let point = EllipsoidalPoint::from_degrees(54.123456, -3.987654);
    let projected = forward_project(&point, &NATIONAL_GRID);
    assert_eq!(projected.easting.fract(), 0.0);
    assert_eq!(projected.northing.fract(), 0.0);
}
