//! A library for OSGB36 National Grid calculations
//!
//! ## Grid conversions
//!
//! ```rust
//! use os_grid::{grid_to_wgs84, ProjectedPoint};
//!
//! // Caister Water Tower
//! let wgs84 = grid_to_wgs84(&ProjectedPoint::new(651409.903, 313177.270)).unwrap();
//! assert!((wgs84.lat - 52.658).abs() < 0.001);
//! assert!((wgs84.lon - 1.716).abs() < 0.001);
//! ```
//!
//! ## Graticules
//!
//! ```rust
//! use os_grid::{OsGrid, Viewport};
//!
//! let grid = OsGrid::national();
//! let viewport = Viewport::new(51.45, -0.2, 51.55, -0.05);
//! let graticule = grid.graticule(&viewport, 2000).unwrap();
//! let bounds = graticule.bounds.unwrap();
//! assert_eq!(bounds.west % 2000, 0);
//! assert_eq!(
//!     graticule.len(),
//!     os_grid::graticule_len(bounds.side_steps(2000), bounds.length_steps(2000))
//! );
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use os_grid::GraticuleIterator;
//!
//! for (side, length) in GraticuleIterator::new(2, 2) {
//!     println!("Intersection {}/{}", side, length);
//! }
//! ```
//!
//! ## Grid references
//!
//! ```rust
//! use os_grid::{GridRef, ProjectedPoint};
//!
//! let gridref = GridRef::from_point(&ProjectedPoint::new(651409.0, 313177.0)).unwrap();
//! assert_eq!(gridref.to_string(), "TG 51409 13177");
//! assert_eq!("TG 51409 13177".parse::<GridRef>().unwrap(), gridref);
//! ```

#[macro_use]
extern crate log;

mod datum;
mod ellipsoid;
mod error;
mod graticule_iterator;
mod grid;
mod gridref;
mod point;
mod projection;

#[cfg(test)]
mod grid_test;
#[cfg(test)]
mod projection_test;

pub use datum::{DatumShift, HelmertParams, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, OSGB36_TO_WGS84};
pub use ellipsoid::{
    Ellipsoid, ProjectionParams, AIRY_1830, GRID_MAX_EASTING, GRID_MAX_NORTHING, NATIONAL_GRID,
    WGS84,
};
pub use error::GridError;
pub use graticule_iterator::{graticule_len, GraticuleIterator};
pub use grid::{
    compute_grid_bounds, generate_path, grid_to_wgs84, wgs84_to_grid, BoundsMode, Graticule,
    GridBounds, OsGrid, Viewport, MAX_GRATICULE_POINTS,
};
pub use gridref::GridRef;
pub use point::{GeographicPoint, ProjectedPoint};
