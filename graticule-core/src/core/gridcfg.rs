//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GraticuleCfg;
use crate::core::Config;
use os_grid::{BoundsMode, DatumShift, OsGrid, NATIONAL_GRID};

pub fn bounds_mode_from_config(name: &str) -> Result<BoundsMode, String> {
    match &name.to_lowercase() as &str {
        "approximate" => Ok(BoundsMode::Approximate),
        "datum_correct" => Ok(BoundsMode::DatumCorrect),
        _ => Err(format!("Unexpected enum value '{}'", name)),
    }
}

impl<'a> Config<'a, GraticuleCfg> for OsGrid {
    fn from_config(graticule_cfg: &GraticuleCfg) -> Result<Self, String> {
        let bounds_mode = match graticule_cfg.bounds {
            Some(ref name) => bounds_mode_from_config(name)?,
            None => BoundsMode::default(),
        };
        let mut shift = DatumShift::osgb36_to_wgs84();
        if let Some(height) = graticule_cfg.height {
            if !height.is_finite() {
                return Err(format!("Invalid height {}", height));
            }
            shift = shift.with_height(height);
        }
        if let Some(max_iterations) = graticule_cfg.max_iterations {
            if max_iterations == 0 {
                return Err("max_iterations must be at least 1".to_string());
            }
            shift = shift.with_max_iterations(max_iterations);
        }
        Ok(OsGrid::new(NATIONAL_GRID, shift, bounds_mode))
    }
    fn gen_config() -> String {
        let toml = r#"
[graticule]
bounds = "approximate"
height = 24.7
max_iterations = 100
"#;
        toml.to_string()
    }
}
