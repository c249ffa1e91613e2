//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use crate::core::{Config, StepTable};
use crate::service::output::OutputFormat;
use os_grid::{Graticule, GridError, OsGrid, Viewport};

/// Graticule requests for a map client
pub struct GraticuleService {
    pub grid: OsGrid,
    pub steps: StepTable,
    pub format: OutputFormat,
}

impl GraticuleService {
    /// Grid step for `zoom`
    pub fn step(&self, zoom: u8) -> u32 {
        self.steps.step(zoom)
    }

    /// Graticule for a viewport at a zoom level
    pub fn graticule(&self, viewport: &Viewport, zoom: u8) -> Result<Graticule, GridError> {
        let step = self.step(zoom);
        debug!("Zoom level {} uses grid step {}m", zoom, step);
        self.graticule_with_step(viewport, step)
    }

    /// Graticule with an explicit grid step.
    /// A viewport outside the grid yields an empty graticule.
    pub fn graticule_with_step(
        &self,
        viewport: &Viewport,
        step: u32,
    ) -> Result<Graticule, GridError> {
        match self.grid.graticule(viewport, step) {
            Ok(graticule) => {
                if let Some(bounds) = graticule.bounds {
                    debug!(
                        "Grid bounds {},{} - {},{} ({}x{} cells)",
                        bounds.west,
                        bounds.south,
                        bounds.east,
                        bounds.north,
                        bounds.side_steps(step),
                        bounds.length_steps(step)
                    );
                }
                info!("Generated graticule with {} points", graticule.len());
                Ok(graticule)
            }
            Err(GridError::OutsideGrid) => {
                warn!("Viewport {:?} is outside the National Grid", viewport);
                Ok(Graticule::empty(step))
            }
            Err(e) => {
                error!("Graticule generation failed: {}", e);
                Err(e)
            }
        }
    }

    /// Encode a graticule in the configured output format
    pub fn encode(&self, graticule: &Graticule) -> String {
        self.format.encode(graticule)
    }
}

impl Default for GraticuleService {
    fn default() -> GraticuleService {
        GraticuleService {
            grid: OsGrid::national(),
            steps: StepTable::default(),
            format: OutputFormat::GeoJson,
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for GraticuleService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let grid = OsGrid::from_config(&config.graticule)?;
        let steps = StepTable::from_config(&config.graticule)?;
        let format = match config.output.format {
            Some(ref name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::GeoJson,
        };
        Ok(GraticuleService {
            grid,
            steps,
            format,
        })
    }
    fn gen_config() -> String {
        DEFAULT_CONFIG.to_string()
    }
}
