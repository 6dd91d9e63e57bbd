use std::fmt;

use crate::roles::LineFamily;

/// Which side of the name mapping a lookup or collision concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Real,
    Display,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Real => f.write_str("real name"),
            NameKind::Display => f.write_str("display name"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("no entry with {kind} '{name}'")]
    NotFound { kind: NameKind, name: String },
    #[error("{kind} '{name}' already exists")]
    DuplicateKey { kind: NameKind, name: String },
    #[error("line index {index} out of range for {len} lines")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("removed {family} line '{real_name}', its {family} data was not removed")]
    UnimplementedGroupCleanup {
        family: LineFamily,
        real_name: String,
    },
    #[error("x and y data differ in length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("alpha {0} is outside of [0, 1]")]
    InvalidAlpha(f64),
    #[error("'{0}' is not a valid color")]
    InvalidColor(String),
    #[error("'{0}' is not a valid line style")]
    InvalidLineStyle(String),
    #[error("no data set is plotted")]
    NoDataSet,
}

impl GraphError {
    pub(crate) fn not_found(kind: NameKind, name: &str) -> Self {
        GraphError::NotFound {
            kind,
            name: name.to_owned(),
        }
    }

    pub(crate) fn duplicate(kind: NameKind, name: &str) -> Self {
        GraphError::DuplicateKey {
            kind,
            name: name.to_owned(),
        }
    }
}
