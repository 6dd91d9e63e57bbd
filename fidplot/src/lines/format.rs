use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Colors handed out to lines plotted without an explicit color.
const COLOR_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub fn cycle_color(n: usize) -> &'static str {
    COLOR_CYCLE[n % COLOR_CYCLE.len()]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    #[serde(rename = "-")]
    Solid,
    #[serde(rename = "--")]
    Dashed,
    #[serde(rename = "-.")]
    DashDot,
    #[serde(rename = ":")]
    Dotted,
    #[serde(rename = "None")]
    Hidden,
}

impl LineStyle {
    pub fn token(&self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
            LineStyle::DashDot => "-.",
            LineStyle::Dotted => ":",
            LineStyle::Hidden => "None",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LineStyle {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "None" | "none" | " " => Ok(LineStyle::Hidden),
            _ => Err(GraphError::InvalidLineStyle(s.to_owned())),
        }
    }
}

/// Turn a color into lowercase `#rrggbb`. Accepts the single letter colors
/// `b g r c m y k w`, `#rgb`, `#rrggbb` and `#rrggbbaa` (alpha is dropped).
pub fn normalize_color(color: &str) -> Result<String, GraphError> {
    let invalid = || GraphError::InvalidColor(color.to_owned());
    if let Some(hex) = letter_color(color) {
        return Ok(hex.to_owned());
    }
    let digits = color.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|chr| chr.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let digits = digits.to_ascii_lowercase();
    match digits.len() {
        3 => Ok(digits.chars().fold(String::from("#"), |mut hex, chr| {
            hex.push(chr);
            hex.push(chr);
            hex
        })),
        6 | 8 => Ok(format!("#{}", &digits[..6])),
        _ => Err(invalid()),
    }
}

fn letter_color(color: &str) -> Option<&'static str> {
    let hex = match color {
        "b" => "#0000ff",
        "g" => "#008000",
        "r" => "#ff0000",
        "c" => "#00bfbf",
        "m" => "#bf00bf",
        "y" => "#bfbf00",
        "k" => "#000000",
        "w" => "#ffffff",
        _ => return None,
    };
    Some(hex)
}

/// Shorthand format like `"b"`, `"r--"` or `":"`: an optional single letter
/// color plus an optional line style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineFormat {
    pub color: Option<String>,
    pub line_style: Option<LineStyle>,
}

impl LineFormat {
    pub fn parse(format: &str) -> Result<Self, GraphError> {
        let mut color = None;
        let mut rest = String::with_capacity(format.len());
        for chr in format.chars() {
            match letter_color(chr.encode_utf8(&mut [0; 4])) {
                Some(hex) if color.is_none() => color = Some(hex.to_owned()),
                Some(_) => return Err(GraphError::InvalidLineStyle(format.to_owned())),
                None => rest.push(chr),
            }
        }
        let line_style = if rest.is_empty() {
            None
        } else {
            Some(
                rest.parse::<LineStyle>()
                    .map_err(|_| GraphError::InvalidLineStyle(format.to_owned()))?,
            )
        };
        Ok(Self { color, line_style })
    }
}

impl FromStr for LineFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
