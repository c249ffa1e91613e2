//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use graticule_core::core::config::ApplicationCfg;
use graticule_core::core::gridcfg::bounds_mode_from_config;
use graticule_core::core::{read_config, Config};
use graticule_core::service::GraticuleService;
use log::Record;
use os_grid::{GeographicPoint, GridError, GridRef, ProjectedPoint, Viewport};
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn service_from_args(args: &ArgMatches<'_>) -> Result<GraticuleService, String> {
    let mut service = match args.value_of("config") {
        Some(path) => {
            info!("Reading configuration from '{}'", path);
            let config: ApplicationCfg = read_config(path)?;
            GraticuleService::from_config(&config)?
        }
        None => GraticuleService::default(),
    };
    if let Some(format) = args.value_of("format") {
        service.format = format.parse()?;
    }
    if let Some(bounds) = args.value_of("bounds") {
        service.grid.bounds_mode = bounds_mode_from_config(bounds)?;
    }
    Ok(service)
}

fn parse_numbers(numlist: &str, name: &str, count: usize) -> Result<Vec<f64>, String> {
    let numbers = numlist
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| format!("Error parsing '{}' as list of float values", name))?;
    if numbers.len() != count {
        return Err(format!(
            "Expected {} values for '{}', got {}",
            count,
            name,
            numbers.len()
        ));
    }
    Ok(numbers)
}

fn generate(args: &ArgMatches<'_>) -> Result<(), String> {
    let service = service_from_args(args)?;
    let bbox = args
        .value_of("bbox")
        .ok_or_else(|| "Missing 'bbox'".to_string())?;
    let bbox = parse_numbers(bbox, "bbox", 4)?;
    let viewport = Viewport::new(bbox[0], bbox[1], bbox[2], bbox[3]);
    let graticule = match (args.value_of("step"), args.value_of("zoom")) {
        (Some(step), _) => {
            let step = step
                .parse::<u32>()
                .map_err(|_| "Error parsing 'step' as integer value".to_string())?;
            service.graticule_with_step(&viewport, step)
        }
        (None, Some(zoom)) => {
            let zoom = zoom
                .parse::<u8>()
                .map_err(|_| "Error parsing 'zoom' as integer value".to_string())?;
            service.graticule(&viewport, zoom)
        }
        (None, None) => return Err("Either 'zoom' or 'step' is required".to_string()),
    }
    .map_err(|e| e.to_string())?;
    println!("{}", service.encode(&graticule).trim_end());
    Ok(())
}

fn print_wgs84(service: &GraticuleService, point: &ProjectedPoint) -> Result<(), String> {
    let point = service.grid.to_wgs84(point).map_err(|e| e.to_string())?;
    println!("{:.7},{:.7}", point.lat, point.lon);
    Ok(())
}

fn convert(args: &ArgMatches<'_>) -> Result<(), String> {
    let service = service_from_args(args)?;
    let digits = match args.value_of("digits") {
        Some(digits) => digits
            .parse::<u8>()
            .map_err(|_| "Error parsing 'digits' as integer value".to_string())?,
        None => 10,
    };
    if let Some(latlon) = args.value_of("latlon") {
        let latlon = parse_numbers(latlon, "latlon", 2)?;
        let point = GeographicPoint::new(latlon[0], latlon[1]);
        let projected = service.grid.to_grid(&point).map_err(|e| e.to_string())?;
        println!("{},{}", projected.easting, projected.northing);
        match GridRef::from_point(&projected).and_then(|gridref| gridref.format(digits)) {
            Ok(gridref) => println!("{}", gridref),
            Err(e) => warn!("{}", e),
        }
    } else if let Some(grid) = args.value_of("grid") {
        let point = grid
            .parse::<ProjectedPoint>()
            .map_err(|e: GridError| e.to_string())?;
        print_wgs84(&service, &point)?;
    } else if let Some(gridref) = args.value_of("gridref") {
        let gridref = gridref
            .parse::<GridRef>()
            .map_err(|e: GridError| e.to_string())?;
        print_wgs84(&service, &gridref.to_point())?;
    } else {
        return Err("One of 'latlon', 'grid' or 'gridref' is required".to_string());
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("graticule")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("OSGB36 National Grid lines for WGS84 map viewports")
        .subcommand(SubCommand::with_name("generate")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--bbox=<south,west,north,east> 'WGS84 viewport'
                                              --zoom=[LEVEL] 'Map zoom level'
                                              --step=[METRES] 'Grid step (overrides zoom level)'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --format=[geojson|csv] 'Output format'
                                              --bounds=[approximate|datum_correct] 'Viewport corner conversion'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate graticule polyline"))
        .subcommand(SubCommand::with_name("convert")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--latlon=[lat,lon] 'WGS84 point'
                                              --grid=[easting,northing] 'National Grid point'
                                              --gridref=[GRIDREF] 'Grid reference (e.g. TG 51409 13177)'
                                              --digits=[2|4|6|8|10] 'Grid reference digits (Default: 10)'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --bounds=[approximate|datum_correct] 'WGS84 to grid conversion'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Convert between WGS84 and National Grid"))
        .subcommand(SubCommand::with_name("genconfig")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            let result = match matches.subcommand() {
                ("generate", Some(sub_m)) => {
                    init_logger(sub_m);
                    generate(sub_m)
                }
                ("convert", Some(sub_m)) => {
                    init_logger(sub_m);
                    convert(sub_m)
                }
                ("genconfig", Some(_)) => {
                    println!("{}", <GraticuleService as Config<ApplicationCfg>>::gen_config());
                    Ok(())
                }
                _ => {
                    let _ = app.print_help();
                    println!("");
                    Ok(())
                }
            };
            if let Err(e) = result {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
