//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::graticule_iterator::graticule_len;
use crate::grid::{
    compute_grid_bounds, generate_path, grid_to_wgs84, wgs84_to_grid, BoundsMode, GridBounds,
    OsGrid, Viewport, MAX_GRATICULE_POINTS,
};
use crate::point::{GeographicPoint, ProjectedPoint};

// Roughly 20 x 20 km around central London
fn london() -> Viewport {
    Viewport::new(51.45, -0.2, 51.63, 0.09)
}

#[test]
fn test_grid_bounds() {
    let bounds = compute_grid_bounds(&london(), 2000).unwrap();
    // corners project to (525063, 173926) and (544638, 194475)
    assert_eq!(
        bounds,
        GridBounds {
            west: 522000,
            south: 170000,
            east: 550000,
            north: 198000,
        }
    );
    assert_eq!(bounds.side_steps(2000), 14);
    assert_eq!(bounds.length_steps(2000), 14);
}

#[test]
fn test_grid_alignment_and_padding() {
    let viewports = vec![
        london(),
        Viewport::new(55.9, -3.3, 56.0, -3.1),
        Viewport::new(50.0, -5.8, 51.0, -4.0),
        Viewport::new(57.1, -2.2, 57.2, -2.0),
    ];
    for viewport in &viewports {
        let sw = wgs84_to_grid(&viewport.southwest(), BoundsMode::Approximate).unwrap();
        let ne = wgs84_to_grid(&viewport.northeast(), BoundsMode::Approximate).unwrap();
        for &step in &[100000, 10000, 2000, 1000, 100, 3000] {
            let bounds = compute_grid_bounds(viewport, step).unwrap();
            let step = step as i64;
            for coord in &[bounds.west, bounds.south, bounds.east, bounds.north] {
                assert_eq!(coord % step, 0, "{:?} not aligned to {}", bounds, step);
            }
            assert!(bounds.west == 0 || sw.easting as i64 - bounds.west >= step);
            assert!(bounds.south == 0 || sw.northing as i64 - bounds.south >= step);
            assert!(bounds.east >= 699_000 || bounds.east - ne.easting as i64 >= 2 * step);
            assert!(bounds.north >= 1_299_000 || bounds.north - ne.northing as i64 >= step);
        }
    }
}

#[test]
fn test_clamping() {
    // All of Great Britain and then some
    let viewport = Viewport::new(49.0, -10.0, 62.0, 4.0);
    let bounds = compute_grid_bounds(&viewport, 100000).unwrap();
    assert_eq!(
        bounds,
        GridBounds {
            west: 0,
            south: 0,
            east: 700000,
            north: 1300000,
        }
    );
    // Clamp limits stay on the grid
    let bounds = compute_grid_bounds(&viewport, 3000).unwrap();
    assert_eq!(bounds.east, 699000);
    assert_eq!(bounds.north, 1299000);
}

#[test]
fn test_outside_grid() {
    // Central France is south of the false origin
    let france = Viewport::new(45.0, 2.0, 46.0, 3.0);
    assert_eq!(compute_grid_bounds(&france, 10000), Err(GridError::OutsideGrid));
    // Northern Germany is east of the grid
    let germany = Viewport::new(52.0, 10.0, 53.0, 11.0);
    assert_eq!(compute_grid_bounds(&germany, 10000), Err(GridError::OutsideGrid));
    assert_eq!(
        OsGrid::national().graticule(&germany, 10000),
        Err(GridError::OutsideGrid)
    );
}

#[test]
fn test_invalid_parameters() {
    assert_eq!(
        compute_grid_bounds(&london(), 0),
        Err(GridError::InvalidStep(0))
    );
    let flipped = Viewport::new(51.63, -0.2, 51.45, 0.09);
    assert!(matches!(
        compute_grid_bounds(&flipped, 1000),
        Err(GridError::InvalidViewport(_))
    ));
    let nan = Viewport::new(std::f64::NAN, -0.2, 51.45, 0.09);
    assert!(matches!(
        compute_grid_bounds(&nan, 1000),
        Err(GridError::InvalidViewport(_))
    ));
    let inverted = GridBounds {
        west: 10000,
        south: 0,
        east: 0,
        north: 10000,
    };
    assert_eq!(generate_path(&inverted, 1000), Err(GridError::OutsideGrid));
}

#[test]
fn test_point_limit() {
    let full = GridBounds {
        west: 0,
        south: 0,
        east: 700000,
        north: 1300000,
    };
    assert_eq!(
        generate_path(&full, 100),
        Err(GridError::TooManyPoints {
            points: 182_040_002,
            max: MAX_GRATICULE_POINTS,
        })
    );
    assert_eq!(generate_path(&full, 100000).map(|path| path.len()), Ok(graticule_len(7, 13)));

    // 1 m lines over a 20 km viewport
    assert!(matches!(
        OsGrid::national().graticule(&london(), 1),
        Err(GridError::TooManyPoints { .. })
    ));
}

#[test]
fn test_datum_correct_bounds() {
    let grid = OsGrid::new(
        crate::ellipsoid::NATIONAL_GRID,
        crate::datum::DatumShift::osgb36_to_wgs84(),
        BoundsMode::DatumCorrect,
    );
    let bounds = grid.grid_bounds(&london(), 2000).unwrap();
    // corners project to (525175, 173871) and (544753, 194422)
    assert_eq!(
        bounds,
        GridBounds {
            west: 522000,
            south: 170000,
            east: 548000,
            north: 198000,
        }
    );
}

#[test]
fn test_scenario_zoom_12() {
    let step = 2000;
    let graticule = OsGrid::national().graticule(&london(), step).unwrap();
    let bounds = graticule.bounds.unwrap();
    assert_eq!((bounds.east - bounds.west) % step as i64, 0);
    assert_eq!((bounds.north - bounds.south) % step as i64, 0);
    assert_eq!(graticule.len(), graticule_len(14, 14));
    assert_eq!(graticule.len(), 450);
    // path starts in the south west corner
    let first = graticule.points[0];
    let expected = grid_to_wgs84(&ProjectedPoint::new(522000.0, 170000.0)).unwrap();
    assert_eq!(first, expected);
}

#[test]
fn test_path_connectivity() {
    let step = 1000;
    let bounds = GridBounds {
        west: 300000,
        south: 600000,
        east: 305000,
        north: 604000,
    };
    let points = generate_path(&bounds, step).unwrap();
    assert_eq!(points.len(), graticule_len(5, 4));

    // back to grid cell indices
    let cells: Vec<(i64, i64)> = points
        .iter()
        .map(|p| {
            let grid = wgs84_to_grid(p, BoundsMode::DatumCorrect).unwrap();
            let side = (grid.easting - bounds.west as f64) / step as f64;
            let length = (grid.northing - bounds.south as f64) / step as f64;
            assert!((side - side.round()).abs() < 0.005, "{:?}", grid);
            assert!((length - length.round()).abs() < 0.005, "{:?}", grid);
            (side.round() as i64, length.round() as i64)
        })
        .collect();
    for pair in cells.windows(2) {
        let jump = (pair[0].0 - pair[1].0).abs() + (pair[0].1 - pair[1].1).abs();
        assert!(jump <= 1, "{:?} -> {:?}", pair[0], pair[1]);
    }
    assert!(cells.iter().all(|&(s, l)| (0..=5).contains(&s) && (0..=4).contains(&l)));
}

#[test]
fn test_to_grid_modes() {
    let point = GeographicPoint::new(52.658007833, 1.716073972);
    let approximate = wgs84_to_grid(&point, BoundsMode::Approximate).unwrap();
    let correct = wgs84_to_grid(&point, BoundsMode::DatumCorrect).unwrap();
    // Caister Water Tower is at 651409.903, 313177.270
    assert!((correct.easting - 651410.0).abs() <= 5.0);
    assert!((correct.northing - 313177.0).abs() <= 5.0);
    // WGS84 angles on the OSGB36 projection are off by up to ~120 m
    assert!((approximate.easting - correct.easting).abs() > 50.0);
}
