//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg, DEFAULT_CONFIG};
use crate::core::parse_config;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.graticule.bounds, Some("datum_correct".to_string()));
    assert_eq!(config.graticule.height, Some(50.0));
    assert_eq!(config.graticule.max_iterations, None);
    assert_eq!(config.graticule.zoom_steps.len(), 2);
    assert_eq!(config.graticule.zoom_steps[1].minzoom, 10);
    assert_eq!(config.graticule.zoom_steps[1].step, 5000);
    assert_eq!(config.output.format, Some("csv".to_string()));
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.graticule.bounds, Some("approximate".to_string()));
    assert_eq!(config.graticule.zoom_steps.len(), 5);
    assert_eq!(config.output.format, Some("geojson".to_string()));

    let config: ApplicationCfg = parse_config("".to_string(), "").unwrap();
    assert!(config.graticule.zoom_steps.is_empty());
    assert_eq!(config.output.format, None);
}

#[test]
fn test_env_template() {
    std::env::set_var("GRATICULE_TEST_FORMAT", "csv");
    let toml = r#"
        [output]
        format = "{{ env.GRATICULE_TEST_FORMAT }}"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.output.format, Some("csv".to_string()));

    let toml = r#"
        [output]
        format = "${GRATICULE_TEST_FORMAT}"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`",
        config.err().unwrap()
    );
}

#[test]
fn test_type_error() {
    let toml = r#"
        [graticule]
        height = "high"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "cfg.toml");
    assert!(config.err().unwrap().starts_with("cfg.toml - invalid type"));
}
