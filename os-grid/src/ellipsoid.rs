//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Reference ellipsoids and National Grid projection constants

/// Reference ellipsoid
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Semi-minor axis (metres)
    pub b: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    /// Third flattening (a-b)/(a+b)
    pub fn n(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }
    /// Prime vertical radius of curvature at latitude `phi` (radians), scaled by `k`
    pub(crate) fn nu(&self, phi: f64, k: f64) -> f64 {
        let sin_phi = phi.sin();
        self.a * k / (1.0 - self.e2 * sin_phi * sin_phi).sqrt()
    }
}

/// Airy 1830, the ellipsoid of the OSGB36 datum
pub const AIRY_1830: Ellipsoid = Ellipsoid {
    a: 6_377_563.396,
    b: 6_356_256.910,
    e2: 0.006_670_539_761_6,
};

pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6_378_137.0,
    b: 6_356_752.314_245,
    e2: 0.006_694_380_379_284_58,
};

/// Transverse Mercator parameters of a national grid
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ProjectionParams {
    pub ellipsoid: Ellipsoid,
    /// Scale factor on the central meridian
    pub f0: f64,
    /// Easting of the true origin (metres)
    pub e0: f64,
    /// Northing of the true origin (metres)
    pub n0: f64,
    /// Latitude of the true origin (radians)
    pub phi0: f64,
    /// Longitude of the true origin (radians)
    pub lam0: f64,
}

impl ProjectionParams {
    /// Semi-major axis times central meridian scale
    pub fn af0(&self) -> f64 {
        self.ellipsoid.a * self.f0
    }
    /// Semi-minor axis times central meridian scale
    pub fn bf0(&self) -> f64 {
        self.ellipsoid.b * self.f0
    }
}

/// Ordnance Survey National Grid (OSGB36, Airy 1830)
pub const NATIONAL_GRID: ProjectionParams = ProjectionParams {
    ellipsoid: AIRY_1830,
    f0: 0.999_601_271_7,
    e0: 400_000.0,
    n0: -100_000.0,
    phi0: 0.855_211_333_477_221_45, // 49°N
    lam0: -0.034_906_585_039_886_59, // 2°W
};

/// Easting limit of the National Grid coverage
pub const GRID_MAX_EASTING: i64 = 700_000;
/// Northing limit of the National Grid coverage
pub const GRID_MAX_NORTHING: i64 = 1_300_000;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_true_origin() {
        assert_relative_eq!(NATIONAL_GRID.phi0, 49.0_f64.to_radians(), epsilon = 1e-15);
        assert_relative_eq!(NATIONAL_GRID.lam0, (-2.0_f64).to_radians(), epsilon = 1e-15);
    }

    #[test]
    fn test_airy_eccentricity() {
        // e² derived from the axes agrees with the published constant
        let e2 = 1.0 - (AIRY_1830.b * AIRY_1830.b) / (AIRY_1830.a * AIRY_1830.a);
        assert_relative_eq!(e2, AIRY_1830.e2, epsilon = 1e-9);
        assert_relative_eq!(AIRY_1830.n(), 0.001_673_220_4, epsilon = 1e-9);
    }
}
