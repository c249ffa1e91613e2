//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Point types

use crate::error::GridError;
use std::str::FromStr;

/// WGS84 latitude/longitude in decimal degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeographicPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicPoint {
    pub fn new(lat: f64, lon: f64) -> GeographicPoint {
        GeographicPoint { lat, lon }
    }
}

/// OSGB36 National Grid easting/northing in metres
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> ProjectedPoint {
        ProjectedPoint { easting, northing }
    }
}

/// Parse `easting,northing` in metres
impl FromStr for ProjectedPoint {
    type Err = GridError;

    fn from_str(s: &str) -> Result<ProjectedPoint, GridError> {
        let mut parts = s.split(',').map(|p| p.trim().parse::<f64>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(easting)), Some(Ok(northing)), None)
                if easting.is_finite() && northing.is_finite() =>
            {
                Ok(ProjectedPoint::new(easting, northing))
            }
            _ => Err(GridError::InvalidGridRef(s.to_string())),
        }
    }
}

/// Latitude/longitude in radians on some reference ellipsoid.
/// Only used between the stages of a conversion.
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) struct EllipsoidalPoint {
    pub phi: f64,
    pub lam: f64,
}

impl EllipsoidalPoint {
    pub fn from_degrees(lat: f64, lon: f64) -> EllipsoidalPoint {
        EllipsoidalPoint {
            phi: lat.to_radians(),
            lam: lon.to_radians(),
        }
    }
    pub fn to_degrees(&self) -> GeographicPoint {
        GeographicPoint {
            lat: self.phi.to_degrees(),
            lon: self.lam.to_degrees(),
        }
    }
}

impl From<&GeographicPoint> for EllipsoidalPoint {
    fn from(point: &GeographicPoint) -> EllipsoidalPoint {
        EllipsoidalPoint::from_degrees(point.lat, point.lon)
    }
}

#[test]
fn test_parse_projected_point() {
    assert_eq!(
        "651409.903, 313177.270".parse::<ProjectedPoint>(),
        Ok(ProjectedPoint::new(651409.903, 313177.270))
    );
    // Grid extent is not a restriction for plain coordinates
    assert_eq!(
        "700000,1300000".parse::<ProjectedPoint>(),
        Ok(ProjectedPoint::new(700000.0, 1300000.0))
    );
    assert!("651409".parse::<ProjectedPoint>().is_err());
    assert!("1,2,3".parse::<ProjectedPoint>().is_err());
    assert!("1,NaN".parse::<ProjectedPoint>().is_err());
    assert!("TG 51409 13177".parse::<ProjectedPoint>().is_err());
}
