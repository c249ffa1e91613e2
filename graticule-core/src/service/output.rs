//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Graticule encoders

use os_grid::Graticule;
use std::str::FromStr;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum OutputFormat {
    GeoJson,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match &s.to_lowercase() as &str {
            "geojson" | "json" => Ok(OutputFormat::GeoJson),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unexpected enum value '{}'", s)),
        }
    }
}

impl OutputFormat {
    pub fn encode(&self, graticule: &Graticule) -> String {
        match self {
            OutputFormat::GeoJson => geojson(graticule),
            OutputFormat::Csv => csv(graticule),
        }
    }
}

/// GeoJSON LineString feature, coordinates in lon/lat order
pub fn geojson(graticule: &Graticule) -> String {
    let coordinates: Vec<[f64; 2]> = graticule.points.iter().map(|p| [p.lon, p.lat]).collect();
    let feature = json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "step": graticule.step,
            "points": graticule.len()
        }
    });
    feature.to_string()
}

/// One `lat,lon` line per point
pub fn csv(graticule: &Graticule) -> String {
    let mut out = String::from("lat,lon\n");
    for point in &graticule.points {
        out.push_str(&format!("{},{}\n", point.lat, point.lon));
    }
    out
}
