mod logic;

use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    lines::{LineFormat, PlotLineCollection},
    roles::{Anchor, LineFamily},
};

pub const DEFAULT_DATA_SET_FORMAT: &str = "b";

/// One set of coordinates kept next to a line, e.g. the data set and its
/// backup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(with = "crate::nan_as_null::values")]
    pub x: Vec<f64>,
    #[serde(with = "crate::nan_as_null::values")]
    pub y: Vec<f64>,
}

impl Signal {
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }
}

impl From<coord_reader::Coordinates> for Signal {
    fn from(coords: coord_reader::Coordinates) -> Self {
        Self {
            x: coords.x,
            y: coords.y,
        }
    }
}

/// The plot: its lines plus the data behind the anchor lines, the data set
/// backup and the axis labels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "StoredGraph")]
pub struct Graph {
    lines: PlotLineCollection,
    title: String,
    x_label: String,
    y_label: String,
    data_set_format: String,
    data: Option<Signal>,
    backup: Option<Signal>,
    best_fit: Option<Signal>,
    initial_fit: Option<Signal>,
    residuals: Option<Signal>,
}

/// A `Graph` as read from storage, before its anchor data is checked against
/// its lines.
#[derive(Deserialize)]
struct StoredGraph {
    lines: PlotLineCollection,
    title: String,
    x_label: String,
    y_label: String,
    data_set_format: String,
    data: Option<Signal>,
    backup: Option<Signal>,
    best_fit: Option<Signal>,
    initial_fit: Option<Signal>,
    residuals: Option<Signal>,
}

// Anchor data without its line is dropped, so `anchor_data` only reports
// what is plotted.
impl TryFrom<StoredGraph> for Graph {
    type Error = GraphError;

    fn try_from(stored: StoredGraph) -> Result<Self, Self::Error> {
        LineFormat::parse(&stored.data_set_format)?;
        let mut graph = Graph {
            lines: stored.lines,
            title: stored.title,
            x_label: stored.x_label,
            y_label: stored.y_label,
            data_set_format: stored.data_set_format,
            data: stored.data,
            backup: stored.backup,
            best_fit: stored.best_fit,
            initial_fit: stored.initial_fit,
            residuals: stored.residuals,
        };
        for anchor in Anchor::ALL {
            graph.drop_data_without_line(anchor);
        }
        Ok(graph)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            lines: PlotLineCollection::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            data_set_format: DEFAULT_DATA_SET_FORMAT.to_owned(),
            data: None,
            backup: None,
            best_fit: None,
            initial_fit: None,
            residuals: None,
        }
    }
}

/// What happened when lines were removed by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemovalReport {
    /// Real names of the removed lines.
    pub removed: Vec<String>,
    /// Anchors whose data was dropped along with their line.
    pub cleared: Vec<Anchor>,
    /// One `GraphError::UnimplementedGroupCleanup` per removed family line.
    pub pending_cleanup: Vec<GraphError>,
}

impl RemovalReport {
    pub fn families_pending(&self) -> Vec<LineFamily> {
        let mut families = Vec::new();
        for warning in self.pending_cleanup.iter() {
            if let GraphError::UnimplementedGroupCleanup { family, .. } = warning {
                if !families.contains(family) {
                    families.push(*family);
                }
            }
        }
        families
    }
}
