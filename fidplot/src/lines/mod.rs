mod format;
mod logic;

pub use format::{cycle_color, normalize_color, LineFormat, LineStyle};

use serde::{Deserialize, Serialize};

use crate::names::NameRegistry;

/// Matches the default draw order of plotted lines.
pub const DEFAULT_Z_ORDER: i32 = 2;

/// One plotted series. The record is the only owner of its attributes; a
/// renderer only reads from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotLine {
    real_name: String,
    label: String,
    color: String,
    line_style: LineStyle,
    alpha: Option<f64>,
    visible: bool,
    z_order: i32,
    #[serde(with = "crate::nan_as_null::points")]
    points: Vec<[f64; 2]>,
}

impl PlotLine {
    pub fn real_name(&self) -> &str {
        &self.real_name
    }

    /// Always equal to the display name registered for `real_name`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn z_order(&self) -> i32 {
        self.z_order
    }
}

/// Attributes of one line as shown in the line manipulation widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineInfo {
    pub alpha: Option<f64>,
    pub color: String,
    pub line_style: LineStyle,
    pub visible: bool,
    pub z_order: i32,
    pub label: String,
}

/// Partial update of a line. `None` fields and empty strings leave the
/// attribute unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineUpdate {
    pub alpha: Option<f64>,
    pub color: Option<String>,
    pub line_style: Option<String>,
    pub visible: Option<bool>,
    pub z_order: Option<i32>,
    pub label: Option<String>,
}

impl LineUpdate {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_owned());
        self
    }

    pub fn with_line_style(mut self, line_style: &str) -> Self {
        self.line_style = Some(line_style.to_owned());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = Some(z_order);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// The new label, if one was given and it is not empty.
    pub fn new_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub line_style: LineStyle,
    pub alpha: Option<f64>,
}

/// Legend of the visible lines, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

/// Data limits of the visible lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Ordered lines of one plot, indexed by draw-order position. Owns the name
/// registry of its lines; nothing else mutates it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(into = "Vec<PlotLine>", try_from = "Vec<PlotLine>")]
pub struct PlotLineCollection {
    lines: Vec<PlotLine>,
    names: NameRegistry,
    legend: Option<Legend>,
    bounds: Option<Bounds>,
    colors_used: usize,
}
