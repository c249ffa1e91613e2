//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Lettered National Grid references like `TG 51409 13177`

use crate::ellipsoid::{GRID_MAX_EASTING, GRID_MAX_NORTHING};
use crate::error::GridError;
use crate::point::ProjectedPoint;
use std::fmt;
use std::str::FromStr;

const SQUARE_SIZE: u32 = 100_000;

/// Grid reference with metre resolution.
/// Only constructed through `from_point` or parsing, so it always lies on the grid.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GridRef {
    easting: u32,
    northing: u32,
}

/// Letter for index 0..25, 'I' is not used
fn letter(index: u32) -> char {
    let index = if index > 7 { index + 1 } else { index };
    (b'A' + index as u8) as char
}

fn letter_index(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    if !c.is_ascii_uppercase() || c == 'I' {
        return None;
    }
    let index = c as u32 - 'A' as u32;
    Some(if index > 7 { index - 1 } else { index })
}

impl GridRef {
    pub fn from_point(point: &ProjectedPoint) -> Result<GridRef, GridError> {
        let easting = point.easting.floor();
        let northing = point.northing.floor();
        if !(0.0..GRID_MAX_EASTING as f64).contains(&easting)
            || !(0.0..GRID_MAX_NORTHING as f64).contains(&northing)
        {
            return Err(GridError::InvalidGridRef(format!(
                "{},{} is outside the grid",
                point.easting, point.northing
            )));
        }
        Ok(GridRef {
            easting: easting as u32,
            northing: northing as u32,
        })
    }

    pub fn easting(&self) -> u32 {
        self.easting
    }

    pub fn northing(&self) -> u32 {
        self.northing
    }

    pub fn to_point(&self) -> ProjectedPoint {
        ProjectedPoint::new(self.easting as f64, self.northing as f64)
    }

    /// 100 km square letters
    pub fn square(&self) -> String {
        let e100k = self.easting / SQUARE_SIZE;
        let n100k = self.northing / SQUARE_SIZE;
        // 500 km square, then 100 km square within it
        let l1 = (19 - n100k) - (19 - n100k) % 5 + (e100k + 10) / 5;
        let l2 = (19 - n100k) * 5 % 25 + e100k % 5;
        format!("{}{}", letter(l1), letter(l2))
    }

    /// Format with `digits` numeric digits in total (2, 4, 6, 8 or 10)
    pub fn format(&self, digits: u8) -> Result<String, GridError> {
        if digits == 0 || digits > 10 || digits % 2 != 0 {
            return Err(GridError::InvalidGridRef(format!(
                "{} digits requested",
                digits
            )));
        }
        let half = (digits / 2) as u32;
        let divisor = 10u32.pow(5 - half);
        let e = self.easting % SQUARE_SIZE / divisor;
        let n = self.northing % SQUARE_SIZE / divisor;
        Ok(format!(
            "{} {:0width$} {:0width$}",
            self.square(),
            e,
            n,
            width = half as usize
        ))
    }

    fn parse_lettered(s: &str) -> Result<GridRef, GridError> {
        let invalid = || GridError::InvalidGridRef(s.to_string());
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut chars = compact.chars();
        let l1 = chars.next().and_then(letter_index).ok_or_else(invalid)? as i64;
        let l2 = chars.next().and_then(letter_index).ok_or_else(invalid)? as i64;
        let e100k = (l1 - 2).rem_euclid(5) * 5 + l2 % 5;
        let n100k = (19 - (l1 / 5) * 5) - l2 / 5;
        if !(0..7).contains(&e100k) || !(0..13).contains(&n100k) {
            return Err(invalid());
        }

        let digits: String = chars.collect();
        if digits.len() > 10 || digits.len() % 2 != 0 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let (e, n) = digits.split_at(digits.len() / 2);
        // "514" means 51400
        let pad = |part: &str| -> Result<i64, GridError> {
            if part.is_empty() {
                return Ok(0);
            }
            let value: i64 = part.parse().map_err(|_| invalid())?;
            Ok(value * 10i64.pow(5 - part.len() as u32))
        };
        Ok(GridRef {
            easting: (e100k * SQUARE_SIZE as i64 + pad(e)?) as u32,
            northing: (n100k * SQUARE_SIZE as i64 + pad(n)?) as u32,
        })
    }

    fn parse_numeric(s: &str) -> Result<GridRef, GridError> {
        GridRef::from_point(&s.parse::<ProjectedPoint>()?)
    }
}

impl FromStr for GridRef {
    type Err = GridError;

    fn from_str(s: &str) -> Result<GridRef, GridError> {
        let s = s.trim();
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            GridRef::parse_numeric(s)
        } else {
            GridRef::parse_lettered(s)
        }
    }
}

impl fmt::Display for GridRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.easting % SQUARE_SIZE;
        let n = self.northing % SQUARE_SIZE;
        write!(f, "{} {:05} {:05}", self.square(), e, n)
    }
}
