//! Real names with domain meaning. Anchors are single lines the graph keeps a
//! dedicated reference for; families are groups of lines sharing a real-name
//! prefix.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    DataSet,
    BestFit,
    InitialFit,
    Residuals,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::DataSet,
        Anchor::BestFit,
        Anchor::InitialFit,
        Anchor::Residuals,
    ];

    pub fn real_name(&self) -> &'static str {
        match self {
            Anchor::DataSet => "Data Set",
            Anchor::BestFit => "Best Fit",
            Anchor::InitialFit => "Initial Fit",
            Anchor::Residuals => "Residuals",
        }
    }

    pub fn of(real_name: &str) -> Option<Anchor> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.real_name() == real_name)
    }
}

/// Groups of lines whose real names share a prefix. Removing one of their
/// lines leaves associated non-line state behind that the graph does not
/// know how to purge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineFamily {
    DeconPeak,
    GuessPeak,
    InputSpectra,
    Mapping,
}

impl LineFamily {
    pub const ALL: [LineFamily; 4] = [
        LineFamily::DeconPeak,
        LineFamily::GuessPeak,
        LineFamily::InputSpectra,
        LineFamily::Mapping,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            LineFamily::DeconPeak => "DeconPeak_",
            LineFamily::GuessPeak => "GuessPeak_",
            LineFamily::InputSpectra => "InputSpectra_",
            LineFamily::Mapping => "Mapping_",
        }
    }

    pub fn of(real_name: &str) -> Option<LineFamily> {
        Self::ALL
            .into_iter()
            .find(|family| real_name.starts_with(family.prefix()))
    }

    pub fn member_name(&self, n: usize) -> String {
        format!("{}{}", self.prefix(), n)
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineFamily::DeconPeak => "deconvolved peak",
            LineFamily::GuessPeak => "guess peak",
            LineFamily::InputSpectra => "input spectra",
            LineFamily::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Anchor(Anchor),
    Family(LineFamily),
    Plain,
}

impl LineRole {
    pub fn classify(real_name: &str) -> Self {
        if let Some(anchor) = Anchor::of(real_name) {
            LineRole::Anchor(anchor)
        } else if let Some(family) = LineFamily::of(real_name) {
            LineRole::Family(family)
        } else {
            LineRole::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            LineRole::classify("Data Set"),
            LineRole::Anchor(Anchor::DataSet)
        );
        assert_eq!(
            LineRole::classify("DeconPeak_3"),
            LineRole::Family(LineFamily::DeconPeak)
        );
        assert_eq!(LineRole::classify("Signal"), LineRole::Plain);
        // the prefix has to match from the start
        assert_eq!(LineRole::classify("My Mapping_1"), LineRole::Plain);
    }

    #[test]
    fn test_member_name() {
        assert_eq!(LineFamily::GuessPeak.member_name(2), "GuessPeak_2");
    }
}
