//! Editing driven by the lines selected in a list widget.

use crate::{
    error::GraphError,
    graph::Graph,
    lines::{LineInfo, LineUpdate},
};

/// What the line manipulation widgets should show for a selection.
#[derive(Clone, Debug, PartialEq)]
pub enum LineSelection {
    /// Nothing selected, widgets disabled.
    None,
    /// Exactly one line, widgets show its attributes.
    Single { index: usize, info: LineInfo },
    /// Several lines, widgets in their default state for a bulk edit.
    Multiple(usize),
}

impl Graph {
    pub fn selection_view(&self, indexes: &[usize]) -> Result<LineSelection, GraphError> {
        match indexes {
            [] => Ok(LineSelection::None),
            [index] => Ok(LineSelection::Single {
                index: *index,
                info: self.line_info(*index)?,
            }),
            _ => Ok(LineSelection::Multiple(indexes.len())),
        }
    }

    /// Apply `update` to every selected line and return how many lines were
    /// changed. With several lines selected and a new label given, the i-th
    /// selected line is labelled `"<label> <i>"`, since labels are unique.
    /// Stops at the first failing line.
    pub fn change_selected_line_attributes(
        &mut self,
        indexes: &[usize],
        update: &LineUpdate,
    ) -> Result<usize, GraphError> {
        match (indexes.len(), update.new_label()) {
            (0, _) => Ok(0),
            (1, _) | (_, None) => {
                for index in indexes {
                    self.change_line_attributes(*index, update)?;
                }
                Ok(indexes.len())
            }
            (_, Some(label)) => {
                for (i, index) in indexes.iter().enumerate() {
                    let numbered = LineUpdate {
                        label: Some(format!("{label} {i}")),
                        ..update.clone()
                    };
                    self.change_line_attributes(*index, &numbered)?;
                }
                Ok(indexes.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_lines(n: usize) -> Graph {
        let mut graph = Graph::new();
        graph.plot_new_dataset(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        for _ in 1..n {
            graph
                .plot_family_member(crate::roles::LineFamily::InputSpectra, &[0.0], &[0.0])
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_selection_view() {
        let graph = graph_with_lines(3);
        assert_eq!(graph.selection_view(&[]).unwrap(), LineSelection::None);
        match graph.selection_view(&[0]).unwrap() {
            LineSelection::Single { index, info } => {
                assert_eq!(index, 0);
                assert_eq!(info.label, "Data Set");
            }
            other => panic!("expected single selection, got {other:?}"),
        }
        assert_eq!(
            graph.selection_view(&[2, 0]).unwrap(),
            LineSelection::Multiple(2)
        );
        assert!(graph.selection_view(&[7]).is_err());
    }

    #[test]
    fn test_single_selection_rename() {
        let mut graph = graph_with_lines(2);
        let update = LineUpdate::default().with_label("Sample");
        assert_eq!(graph.change_selected_line_attributes(&[0], &update), Ok(1));
        assert_eq!(graph.legend_list(), vec!["Sample", "InputSpectra_0"]);
    }

    #[test]
    fn test_multiple_selection_numbers_labels() {
        let mut graph = graph_with_lines(3);
        let update = LineUpdate::default().with_label("Trace").with_z_order(5);
        assert_eq!(
            graph.change_selected_line_attributes(&[2, 1], &update),
            Ok(2)
        );
        assert_eq!(graph.legend_list(), vec!["Data Set", "Trace 1", "Trace 0"]);
        assert_eq!(graph.line_info(1).unwrap().z_order, 5);
        assert_eq!(graph.line_info(0).unwrap().z_order, 2);
    }

    #[test]
    fn test_multiple_selection_without_label() {
        let mut graph = graph_with_lines(3);
        let update = LineUpdate::default().with_color("g").with_label("");
        assert_eq!(
            graph.change_selected_line_attributes(&[0, 1, 2], &update),
            Ok(3)
        );
        assert!(graph
            .lines()
            .lines()
            .iter()
            .all(|line| line.color() == "#008000"));
        assert_eq!(graph.legend_list()[0], "Data Set");
    }

    #[test]
    fn test_multiple_selection_stops_at_collision() {
        let mut graph = graph_with_lines(3);
        graph
            .change_line_attributes(2, &LineUpdate::default().with_label("Trace 1"))
            .unwrap();
        let update = LineUpdate::default().with_label("Trace");
        assert!(matches!(
            graph.change_selected_line_attributes(&[0, 1], &update),
            Err(GraphError::DuplicateKey { .. })
        ));
        // the first line keeps its new label, the second one is unchanged
        assert_eq!(
            graph.legend_list(),
            vec!["Trace 0", "InputSpectra_0", "Trace 1"]
        );
    }

    #[test]
    fn test_empty_selection_changes_nothing() {
        let mut graph = graph_with_lines(1);
        let update = LineUpdate::default().with_label("x");
        assert_eq!(graph.change_selected_line_attributes(&[], &update), Ok(0));
        assert_eq!(graph.legend_list(), vec!["Data Set"]);
    }
}
