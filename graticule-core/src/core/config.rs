//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub graticule: GraticuleCfg,
    #[serde(default)]
    pub output: OutputCfg,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct GraticuleCfg {
    /// Viewport corner conversion ("approximate" or "datum_correct")
    pub bounds: Option<String>,
    /// Height above the OSGB36 ellipsoid assumed for the datum shift
    pub height: Option<f64>,
    /// Iteration cap of the datum shift latitude refinement
    pub max_iterations: Option<u32>,
    /// Grid spacing per zoom level
    #[serde(rename = "zoom", default)]
    pub zoom_steps: Vec<ZoomStepCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ZoomStepCfg {
    /// Lowest zoom level using this step
    pub minzoom: u8,
    /// Grid spacing in metres
    pub step: u32,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OutputCfg {
    /// Output format ("geojson" or "csv")
    pub format: Option<String>,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[graticule]
bounds = "approximate" # or "datum_correct"
height = 24.7
max_iterations = 100

[[graticule.zoom]]
minzoom = 0
step = 100000

[[graticule.zoom]]
minzoom = 9
step = 10000

[[graticule.zoom]]
minzoom = 11
step = 2000

[[graticule.zoom]]
minzoom = 13
step = 1000

[[graticule.zoom]]
minzoom = 15
step = 100

[output]
format = "geojson" # or "csv"
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
