//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Datum shift between OSGB36 and WGS84
//!
//! Points are lifted to geocentric cartesian coordinates on the source
//! ellipsoid, moved with a 7-parameter Helmert transformation and brought
//! back to latitude/longitude on the target ellipsoid.

use crate::ellipsoid::{Ellipsoid, AIRY_1830, WGS84};
use crate::error::GridError;
use crate::point::{EllipsoidalPoint, GeographicPoint};

/// Assumed height above the ellipsoid (metres)
pub const DEFAULT_HEIGHT: f64 = 24.7;
/// Iteration cap of the latitude refinement
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
/// Latitude refinement tolerance (radians)
const LATITUDE_TOLERANCE: f64 = 0.001;

/// Helmert transformation parameters
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HelmertParams {
    /// Translations (metres)
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// Rotations (arc-seconds)
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Scale change (ppm)
    pub s: f64,
}

impl HelmertParams {
    /// Parameters of the opposite direction (small-angle approximation)
    pub fn inverse(&self) -> HelmertParams {
        HelmertParams {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            s: -self.s,
        }
    }

    fn apply(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = xyz;
        let sf = self.s * 1e-6;
        let rx = arcsec_to_rad(self.rx);
        let ry = arcsec_to_rad(self.ry);
        let rz = arcsec_to_rad(self.rz);
        [
            x + x * sf - y * rz + z * ry + self.tx,
            x * rz + y + y * sf - z * rx + self.ty,
            -x * ry + y * rx + z + z * sf + self.tz,
        ]
    }
}

fn arcsec_to_rad(seconds: f64) -> f64 {
    (seconds / 3600.0).to_radians()
}

/// OSGB36 to WGS84 (approximate, a few metres)
pub const OSGB36_TO_WGS84: HelmertParams = HelmertParams {
    tx: 446.448,
    ty: -125.157,
    tz: 542.060,
    rx: 0.1502,
    ry: 0.2470,
    rz: 0.8421,
    s: -20.4894,
};

/// Datum shift from one ellipsoid to another
#[derive(PartialEq, Clone, Debug)]
pub struct DatumShift {
    pub from: Ellipsoid,
    pub to: Ellipsoid,
    pub helmert: HelmertParams,
    /// Height above `from` assumed for every point
    pub height: f64,
    pub max_iterations: u32,
}

impl DatumShift {
    pub fn osgb36_to_wgs84() -> DatumShift {
        DatumShift {
            from: AIRY_1830,
            to: WGS84,
            helmert: OSGB36_TO_WGS84,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
    pub fn wgs84_to_osgb36() -> DatumShift {
        DatumShift::osgb36_to_wgs84().reversed()
    }
    /// Shift in the opposite direction with the same height and iteration cap
    pub fn reversed(&self) -> DatumShift {
        DatumShift {
            from: self.to,
            to: self.from,
            helmert: self.helmert.inverse(),
            height: self.height,
            max_iterations: self.max_iterations,
        }
    }
    pub fn with_height(mut self, height: f64) -> DatumShift {
        self.height = height;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: u32) -> DatumShift {
        self.max_iterations = max_iterations;
        self
    }

    pub(crate) fn transform(&self, point: &EllipsoidalPoint) -> Result<EllipsoidalPoint, GridError> {
        let xyz = to_cartesian(point, &self.from, self.height);
        let shifted = self.helmert.apply(xyz);
        to_ellipsoidal(shifted, &self.to, self.max_iterations)
    }
}

/// Geocentric cartesian coordinates of a point at height `h`
fn to_cartesian(point: &EllipsoidalPoint, ellipsoid: &Ellipsoid, h: f64) -> [f64; 3] {
    let nu = ellipsoid.nu(point.phi, 1.0);
    let (sin_phi, cos_phi) = point.phi.sin_cos();
    let (sin_lam, cos_lam) = point.lam.sin_cos();
    [
        (nu + h) * cos_phi * cos_lam,
        (nu + h) * cos_phi * sin_lam,
        ((1.0 - ellipsoid.e2) * nu + h) * sin_phi,
    ]
}

/// Latitude/longitude of geocentric cartesian coordinates
fn to_ellipsoidal(
    xyz: [f64; 3],
    ellipsoid: &Ellipsoid,
    max_iterations: u32,
) -> Result<EllipsoidalPoint, GridError> {
    let [x, y, z] = xyz;
    let e2 = ellipsoid.e2;
    let lam = y.atan2(x);
    let p = (x * x + y * y).sqrt();
    let mut phi = (z / (p * (1.0 - e2))).atan();
    for _ in 0..max_iterations {
        let nu = ellipsoid.nu(phi, 1.0);
        let next = ((z + e2 * nu * phi.sin()) / p).atan();
        let delta = (next - phi).abs();
        phi = next;
        if delta < LATITUDE_TOLERANCE {
            return Ok(EllipsoidalPoint { phi, lam });
        }
    }
    Err(GridError::NotConverged {
        iterations: max_iterations,
    })
}

/// Convert an OSGB36 point to WGS84 degrees with the default shift
pub(crate) fn to_wgs84(point: &EllipsoidalPoint) -> Result<GeographicPoint, GridError> {
    DatumShift::osgb36_to_wgs84()
        .transform(point)
        .map(|p| p.to_degrees())
}

/// Convert a WGS84 point to OSGB36 with the default shift
pub(crate) fn from_wgs84(point: &GeographicPoint) -> Result<EllipsoidalPoint, GridError> {
    DatumShift::wgs84_to_osgb36().transform(&EllipsoidalPoint::from(point))
}
