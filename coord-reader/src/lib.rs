#![warn(clippy::all, rust_2018_idioms)]

//! Reader for two-column delimited coordinate files (x in the first column,
//! y in the second). Further columns are ignored.

use std::path::Path;

use app_core::string_error::ErrorStringExt;
use serde::{Deserialize, Serialize};

/// How a coordinate file is split into rows and fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReaderSettings {
    /// Field separator. A space splits on any run of whitespace.
    pub delimiter: char,
    /// Number of leading lines dropped before parsing.
    pub skip_header: usize,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: 1,
        }
    }
}

/// Parsed x/y columns; both always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Coordinates {
    pub fn from_path(path: &Path, settings: &ReaderSettings) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .err_to_string(&format!("could not read coordinate file {:?}", path))?;
        let coords = Self::parse(&raw, settings)
            .map_err(|err| format!("could not parse {:?}: {}", path, err))?;
        log::debug!("read {} points from {:?}", coords.len(), path);
        Ok(coords)
    }

    pub fn parse(raw: &str, settings: &ReaderSettings) -> Result<Self, String> {
        let mut coords = Coordinates::default();
        for (line_no, line) in raw.lines().enumerate().skip(settings.skip_header) {
            let line = line.trim();
            // Blank lines and lines starting with "#" carry no data.
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = split_fields(line, settings.delimiter);
            let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
                return Err(format!(
                    "line {} has fewer than two columns: '{}'",
                    line_no + 1,
                    line
                ));
            };
            coords.x.push(parse_field(x, line_no));
            coords.y.push(parse_field(y, line_no));
        }
        Ok(coords)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

fn split_fields(line: &str, delimiter: char) -> Box<dyn Iterator<Item = &str> + '_> {
    if delimiter == ' ' {
        Box::new(line.split_whitespace())
    } else {
        Box::new(line.split(delimiter).map(str::trim))
    }
}

// Missing or malformed values become NaN, so one bad cell does not discard
// the whole file.
fn parse_field(field: &str, line_no: usize) -> f64 {
    field.parse::<f64>().unwrap_or_else(|_| {
        log::debug!("line {}: '{}' is not a number, using NaN", line_no + 1, field);
        f64::NAN
    })
}
