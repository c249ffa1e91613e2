//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! National Grid conversions and graticule generation

use crate::datum::DatumShift;
use crate::ellipsoid::{ProjectionParams, GRID_MAX_EASTING, GRID_MAX_NORTHING, NATIONAL_GRID};
use crate::error::GridError;
use crate::graticule_iterator::{graticule_len, GraticuleIterator};
use crate::point::{EllipsoidalPoint, GeographicPoint, ProjectedPoint};
use crate::projection::{forward_project, inverse_project};

/// Largest number of points a single graticule may have
pub const MAX_GRATICULE_POINTS: usize = 1_000_000;

/// WGS84 viewport in decimal degrees
#[derive(PartialEq, Clone, Debug)]
pub struct Viewport {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Viewport {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Viewport {
        Viewport {
            south,
            west,
            north,
            east,
        }
    }
    pub fn southwest(&self) -> GeographicPoint {
        GeographicPoint::new(self.south, self.west)
    }
    pub fn northeast(&self) -> GeographicPoint {
        GeographicPoint::new(self.north, self.east)
    }
    fn validate(&self) -> Result<(), GridError> {
        let coords = [self.south, self.west, self.north, self.east];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(GridError::InvalidViewport(format!("{:?}", self)));
        }
        if self.south > self.north || self.west > self.east {
            return Err(GridError::InvalidViewport(format!(
                "south {} north {} west {} east {}",
                self.south, self.north, self.west, self.east
            )));
        }
        Ok(())
    }
}

/// How viewport corners are brought into the grid
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BoundsMode {
    /// WGS84 angles go straight into the OSGB36 projection.
    /// The east side gets an extra step of padding to cover the offset.
    Approximate,
    /// Corners are shifted to OSGB36 before projecting.
    DatumCorrect,
}

impl Default for BoundsMode {
    fn default() -> BoundsMode {
        BoundsMode::Approximate
    }
}

/// Step aligned grid extent in metres
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GridBounds {
    pub west: i64,
    pub south: i64,
    pub east: i64,
    pub north: i64,
}

impl GridBounds {
    /// Number of grid cells west to east
    pub fn side_steps(&self, step: u32) -> u32 {
        ((self.east - self.west) / step as i64) as u32
    }
    /// Number of grid cells south to north
    pub fn length_steps(&self, step: u32) -> u32 {
        ((self.north - self.south) / step as i64) as u32
    }
    /// Grid line intersection at `(side, length)`
    pub fn intersection(&self, side: u32, length: u32, step: u32) -> ProjectedPoint {
        ProjectedPoint::new(
            (self.west + side as i64 * step as i64) as f64,
            (self.south + length as i64 * step as i64) as f64,
        )
    }
    fn is_valid(&self) -> bool {
        self.west <= self.east && self.south <= self.north
    }
}

/// Generated graticule
#[derive(PartialEq, Clone, Debug)]
pub struct Graticule {
    /// Grid spacing in metres
    pub step: u32,
    /// None if the viewport did not touch the grid
    pub bounds: Option<GridBounds>,
    /// One connected polyline in WGS84
    pub points: Vec<GeographicPoint>,
}

impl Graticule {
    pub fn empty(step: u32) -> Graticule {
        Graticule {
            step,
            bounds: None,
            points: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn floor_to(value: i64, step: i64) -> i64 {
    value.div_euclid(step) * step
}

fn ceil_to(value: i64, step: i64) -> i64 {
    -(-value).div_euclid(step) * step
}

/// OSGB36 National Grid
#[derive(Clone, Debug)]
pub struct OsGrid {
    pub params: ProjectionParams,
    /// OSGB36 to WGS84
    pub shift: DatumShift,
    pub bounds_mode: BoundsMode,
}

impl Default for OsGrid {
    fn default() -> OsGrid {
        OsGrid::national()
    }
}

impl OsGrid {
    /// Ordnance Survey National Grid with the standard datum shift
    pub fn national() -> OsGrid {
        OsGrid::new(
            NATIONAL_GRID,
            DatumShift::osgb36_to_wgs84(),
            BoundsMode::Approximate,
        )
    }

    pub fn new(params: ProjectionParams, shift: DatumShift, bounds_mode: BoundsMode) -> OsGrid {
        OsGrid {
            params,
            shift,
            bounds_mode,
        }
    }

    /// Grid position of a WGS84 point, according to `bounds_mode`
    pub fn to_grid(&self, point: &GeographicPoint) -> Result<ProjectedPoint, GridError> {
        let ellipsoidal = match self.bounds_mode {
            BoundsMode::Approximate => EllipsoidalPoint::from(point),
            BoundsMode::DatumCorrect => self
                .shift
                .reversed()
                .transform(&EllipsoidalPoint::from(point))?,
        };
        Ok(forward_project(&ellipsoidal, &self.params))
    }

    /// WGS84 position of a grid point
    pub fn to_wgs84(&self, point: &ProjectedPoint) -> Result<GeographicPoint, GridError> {
        let osgb36 = inverse_project(point, &self.params);
        let wgs84 = self.shift.transform(&osgb36)?;
        Ok(wgs84.to_degrees())
    }

    /// Step aligned, padded and clamped grid extent covering `viewport`
    pub fn grid_bounds(&self, viewport: &Viewport, step: u32) -> Result<GridBounds, GridError> {
        if step == 0 {
            return Err(GridError::InvalidStep(step));
        }
        viewport.validate()?;
        let sw = self.to_grid(&viewport.southwest())?;
        let ne = self.to_grid(&viewport.northeast())?;
        let corners = [sw.easting, sw.northing, ne.easting, ne.northing];
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(GridError::OutsideGrid);
        }

        let step = step as i64;
        let east_padding = match self.bounds_mode {
            BoundsMode::Approximate => 2 * step,
            BoundsMode::DatumCorrect => step,
        };
        let bounds = GridBounds {
            west: (floor_to(sw.easting as i64, step) - step).max(0),
            south: (floor_to(sw.northing as i64, step) - step).max(0),
            east: (ceil_to(ne.easting as i64, step) + east_padding)
                .min(floor_to(GRID_MAX_EASTING, step)),
            north: (ceil_to(ne.northing as i64, step) + step)
                .min(floor_to(GRID_MAX_NORTHING, step)),
        };
        if !bounds.is_valid() {
            debug!("Viewport {:?} gives empty grid bounds {:?}", viewport, bounds);
            return Err(GridError::OutsideGrid);
        }
        Ok(bounds)
    }

    /// Single path along every grid line inside `bounds`
    pub fn graticule_path(
        &self,
        bounds: &GridBounds,
        step: u32,
    ) -> Result<Vec<GeographicPoint>, GridError> {
        if step == 0 {
            return Err(GridError::InvalidStep(step));
        }
        if !bounds.is_valid() {
            return Err(GridError::OutsideGrid);
        }
        let side_steps = bounds.side_steps(step);
        let length_steps = bounds.length_steps(step);
        let len = graticule_len(side_steps, length_steps);
        if len > MAX_GRATICULE_POINTS {
            return Err(GridError::TooManyPoints {
                points: len,
                max: MAX_GRATICULE_POINTS,
            });
        }
        let mut points = Vec::with_capacity(len);
        for (side, length) in GraticuleIterator::new(side_steps, length_steps) {
            points.push(self.to_wgs84(&bounds.intersection(side, length, step))?);
        }
        Ok(points)
    }

    /// Graticule covering `viewport` with lines every `step` metres
    pub fn graticule(&self, viewport: &Viewport, step: u32) -> Result<Graticule, GridError> {
        let bounds = self.grid_bounds(viewport, step)?;
        let points = self.graticule_path(&bounds, step)?;
        Ok(Graticule {
            step,
            bounds: Some(bounds),
            points,
        })
    }
}

/// Grid bounds of `viewport` on the National Grid (approximate corners)
pub fn compute_grid_bounds(viewport: &Viewport, step: u32) -> Result<GridBounds, GridError> {
    OsGrid::national().grid_bounds(viewport, step)
}

/// Graticule path through `bounds` on the National Grid
pub fn generate_path(bounds: &GridBounds, step: u32) -> Result<Vec<GeographicPoint>, GridError> {
    OsGrid::national().graticule_path(bounds, step)
}

/// WGS84 position of a National Grid point
pub fn grid_to_wgs84(point: &ProjectedPoint) -> Result<GeographicPoint, GridError> {
    let osgb36 = inverse_project(point, &NATIONAL_GRID);
    crate::datum::to_wgs84(&osgb36)
}

/// National Grid position of a WGS84 point
pub fn wgs84_to_grid(point: &GeographicPoint, mode: BoundsMode) -> Result<ProjectedPoint, GridError> {
    let osgb36 = match mode {
        BoundsMode::Approximate => EllipsoidalPoint::from(point),
        BoundsMode::DatumCorrect => crate::datum::from_wgs84(point)?,
    };
    Ok(forward_project(&osgb36, &NATIONAL_GRID))
}
