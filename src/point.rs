use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Label written in front of every generated pair.
pub const DEFAULT_LABEL: &str = "TODO";

// name, then "(x, y)" anywhere in the line
static POINT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\((\d+),\s*(\d+)\)").expect("point pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Coord) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, the form used for coordinates on the command line.
impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
        let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
        let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
        Ok(Coord::new(x, y))
    }
}

/// A labelled point read back from a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPoint {
    pub name: String,
    pub position: Coord,
}

impl NamedPoint {
    pub fn new(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            name: name.into(),
            position: Coord::new(x, y),
        }
    }

    pub fn distance(&self, other: &Coord) -> f64 {
        self.position.distance(other)
    }
}

impl fmt::Display for NamedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.position)
    }
}

/// Finds the first `NAME (x, y)` in `line`.
///
/// Lines without a match yield `Ok(None)` and are meant to be skipped. A match
/// whose numbers do not fit in an `i64` is an error.
pub fn parse_line(line: &str) -> Result<Option<NamedPoint>> {
    let Some(caps) = POINT_LINE.captures(line) else {
        return Ok(None);
    };

    let coordinate = |i: usize| -> Result<i64> {
        caps[i].parse().map_err(|_| Error::Coordinate {
            line: line.to_string(),
        })
    };

    Ok(Some(NamedPoint::new(&caps[1], coordinate(2)?, coordinate(3)?)))
}
