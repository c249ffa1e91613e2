//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid spacing per zoom level

use crate::core::config::{GraticuleCfg, ZoomStepCfg};
use crate::core::Config;

/// Coarsest grid spacing (metres)
pub const GRID_STEP: u32 = 100_000;

/// Zoom level to grid step lookup
#[derive(PartialEq, Clone, Debug)]
pub struct StepTable {
    /// (minzoom, step) ordered by minzoom, first minzoom is 0
    levels: Vec<(u8, u32)>,
}

impl Default for StepTable {
    fn default() -> StepTable {
        // GRID_STEP divided by the granularity of each zoom range
        StepTable {
            levels: vec![
                (0, GRID_STEP),
                (9, GRID_STEP / 10),
                (11, GRID_STEP / 50),
                (13, GRID_STEP / 100),
                (15, GRID_STEP / 1000),
            ],
        }
    }
}

impl StepTable {
    pub fn new(levels: Vec<(u8, u32)>) -> Result<StepTable, String> {
        match levels.first() {
            None => return Err("Empty zoom step table".to_string()),
            Some(&(minzoom, _)) if minzoom != 0 => {
                return Err(format!(
                    "Zoom step table must start at minzoom 0, not {}",
                    minzoom
                ))
            }
            _ => {}
        }
        if let Some(&(minzoom, _)) = levels.iter().find(|(_, step)| *step == 0) {
            return Err(format!("Invalid step 0 for minzoom {}", minzoom));
        }
        if let Some(pair) = levels.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
            return Err(format!(
                "Zoom step table not ordered: minzoom {} followed by {}",
                pair[0].0, pair[1].0
            ));
        }
        Ok(StepTable { levels })
    }

    /// Grid step in metres for `zoom`
    pub fn step(&self, zoom: u8) -> u32 {
        self.levels
            .iter()
            .rev()
            .find(|(minzoom, _)| zoom >= *minzoom)
            .map(|(_, step)| *step)
            .unwrap_or(GRID_STEP)
    }

    pub fn levels(&self) -> &[(u8, u32)] {
        &self.levels
    }
}

impl<'a> Config<'a, GraticuleCfg> for StepTable {
    fn from_config(graticule_cfg: &GraticuleCfg) -> Result<Self, String> {
        if graticule_cfg.zoom_steps.is_empty() {
            Ok(StepTable::default())
        } else {
            let levels = graticule_cfg
                .zoom_steps
                .iter()
                .map(|cfg: &ZoomStepCfg| (cfg.minzoom, cfg.step))
                .collect();
            StepTable::new(levels)
        }
    }
    fn gen_config() -> String {
        let mut toml = String::new();
        for (minzoom, step) in StepTable::default().levels() {
            toml.push_str(&format!(
                "\n[[graticule.zoom]]\nminzoom = {}\nstep = {}\n",
                minzoom, step
            ));
        }
        toml
    }
}

#[test]
fn test_default_steps() {
    let steps = StepTable::default();
    assert_eq!(steps.step(0), 100000);
    assert_eq!(steps.step(8), 100000);
    assert_eq!(steps.step(9), 10000);
    assert_eq!(steps.step(10), 10000);
    assert_eq!(steps.step(11), 2000);
    assert_eq!(steps.step(12), 2000);
    assert_eq!(steps.step(13), 1000);
    assert_eq!(steps.step(14), 1000);
    assert_eq!(steps.step(15), 100);
    assert_eq!(steps.step(22), 100);
    assert_eq!(steps.step(255), 100);
}

#[test]
fn test_invalid_tables() {
    assert!(StepTable::new(vec![]).is_err());
    assert!(StepTable::new(vec![(2, 1000)]).is_err());
    assert!(StepTable::new(vec![(0, 1000), (5, 0)]).is_err());
    assert!(StepTable::new(vec![(0, 1000), (5, 100), (5, 10)]).is_err());
    assert!(StepTable::new(vec![(0, 1000), (5, 100)]).is_ok());
}
