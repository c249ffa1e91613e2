//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Transverse Mercator projection (Redfearn series)

use crate::ellipsoid::ProjectionParams;
use crate::point::{EllipsoidalPoint, ProjectedPoint};

/// Footpoint latitude iteration limit
const MAX_FOOTPOINT_ITERATIONS: u32 = 20;
/// Footpoint latitude tolerance (metres of meridional arc)
const FOOTPOINT_TOLERANCE: f64 = 0.00001;

/// Meridional arc from the true origin latitude `phi0` to `phi`, scaled by `F0`
pub(crate) fn meridional_arc(params: &ProjectionParams, phi: f64) -> f64 {
    let n = params.ellipsoid.n();
    let n2 = n * n;
    let n3 = n2 * n;
    let dphi = phi - params.phi0;
    let sphi = phi + params.phi0;

    params.bf0()
        * ((1.0 + n + 5.0 / 4.0 * n2 + 5.0 / 4.0 * n3) * dphi
            - (3.0 * n + 3.0 * n2 + 21.0 / 8.0 * n3) * dphi.sin() * sphi.cos()
            + (15.0 / 8.0 * n2 + 15.0 / 8.0 * n3) * (2.0 * dphi).sin() * (2.0 * sphi).cos()
            - 35.0 / 24.0 * n3 * (3.0 * dphi).sin() * (3.0 * sphi).cos())
}

/// Radii of curvature (nu, rho) and eta² at latitude `phi`
fn curvature(params: &ProjectionParams, phi: f64) -> (f64, f64, f64) {
    let e2 = params.ellipsoid.e2;
    let sin2 = phi.sin() * phi.sin();
    let nu = params.ellipsoid.nu(phi, params.f0);
    let rho = nu * (1.0 - e2) / (1.0 - e2 * sin2);
    let eta2 = nu / rho - 1.0;
    (nu, rho, eta2)
}

/// Project an ellipsoidal point to easting/northing, rounded to whole metres
pub(crate) fn forward_project(point: &EllipsoidalPoint, params: &ProjectionParams) -> ProjectedPoint {
    let phi = point.phi;
    let (nu, rho, eta2) = curvature(params, phi);
    let (sin_phi, cos_phi) = phi.sin_cos();
    let cos3 = cos_phi.powi(3);
    let cos5 = cos_phi.powi(5);
    let tan2 = phi.tan().powi(2);
    let tan4 = tan2 * tan2;
    let p = point.lam - params.lam0;

    let iv = nu * cos_phi;
    let v = nu / 6.0 * cos3 * (nu / rho - tan2);
    let vi = nu / 120.0 * cos5 * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * tan2 * eta2);
    let easting = params.e0 + p * iv + p.powi(3) * v + p.powi(5) * vi;

    let i = meridional_arc(params, phi) + params.n0;
    let ii = nu / 2.0 * sin_phi * cos_phi;
    let iii = nu / 24.0 * sin_phi * cos3 * (5.0 - tan2 + 9.0 * eta2);
    let iiia = nu / 720.0 * sin_phi * cos5 * (61.0 - 58.0 * tan2 + tan4);
    let northing = i + p.powi(2) * ii + p.powi(4) * iii + p.powi(6) * iiia;

    ProjectedPoint {
        easting: easting.round(),
        northing: northing.round(),
    }
}

/// Latitude of the point on the central meridian with the given northing
pub(crate) fn footpoint_latitude(northing: f64, params: &ProjectionParams) -> f64 {
    let af0 = params.af0();
    let mut phi = (northing - params.n0) / af0 + params.phi0;
    let mut residual = northing - params.n0 - meridional_arc(params, phi);
    let mut iterations = 0;
    while residual.abs() >= FOOTPOINT_TOLERANCE && iterations < MAX_FOOTPOINT_ITERATIONS {
        phi += residual / af0;
        residual = northing - params.n0 - meridional_arc(params, phi);
        iterations += 1;
    }
    if residual.abs() >= FOOTPOINT_TOLERANCE {
        debug!(
            "Footpoint latitude for northing {} stopped after {} iterations (residual {})",
            northing, iterations, residual
        );
    }
    phi
}

/// Unproject easting/northing to an ellipsoidal point
pub(crate) fn inverse_project(point: &ProjectedPoint, params: &ProjectionParams) -> EllipsoidalPoint {
    let phid = footpoint_latitude(point.northing, params);
    let (nu, rho, eta2) = curvature(params, phid);
    let tan_phi = phid.tan();
    let tan2 = tan_phi * tan_phi;
    let tan4 = tan2 * tan2;
    let tan6 = tan4 * tan2;
    let sec_phi = 1.0 / phid.cos();
    let et = point.easting - params.e0;

    let vii = tan_phi / (2.0 * rho * nu);
    let viii = tan_phi / (24.0 * rho * nu.powi(3)) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * eta2 * tan2);
    let ix = tan_phi / (720.0 * rho * nu.powi(5)) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
    let phi = phid - et.powi(2) * vii + et.powi(4) * viii - et.powi(6) * ix;

    let x = sec_phi / nu;
    let xi = sec_phi / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan2);
    let xii = sec_phi / (120.0 * nu.powi(5)) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
    let xiia = sec_phi / (5040.0 * nu.powi(7)) * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);
    let lam = params.lam0 + et * x - et.powi(3) * xi + et.powi(5) * xii - et.powi(7) * xiia;

    EllipsoidalPoint { phi, lam }
}
