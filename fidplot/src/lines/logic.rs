use crate::{
    error::{GraphError, NameKind},
    names::NameRegistry,
};

use super::{
    cycle_color, normalize_color, Bounds, Legend, LegendEntry, LineFormat, LineInfo, LineStyle,
    LineUpdate, PlotLine, PlotLineCollection, DEFAULT_Z_ORDER,
};

impl PlotLineCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `real_name` and append a new line at the end of the draw
    /// order. The data is copied. Returns the index of the new line.
    pub fn add_line(
        &mut self,
        x: &[f64],
        y: &[f64],
        real_name: &str,
        format: Option<&LineFormat>,
        visible: bool,
    ) -> Result<usize, GraphError> {
        check_lengths(x, y)?;
        self.names.add_entry(real_name, None)?;

        let color = match format.and_then(|fmt| fmt.color.clone()) {
            Some(color) => color,
            None => {
                let color = cycle_color(self.colors_used).to_owned();
                self.colors_used += 1;
                color
            }
        };
        let line_style = format
            .and_then(|fmt| fmt.line_style)
            .unwrap_or_default();

        self.lines.push(PlotLine {
            real_name: real_name.to_owned(),
            label: real_name.to_owned(),
            color,
            line_style,
            alpha: Some(1.0),
            visible,
            z_order: DEFAULT_Z_ORDER,
            points: x.iter().zip(y).map(|(x, y)| [*x, *y]).collect(),
        });
        log::debug!("added line '{}' with {} points", real_name, x.len());
        Ok(self.lines.len() - 1)
    }

    /// Like `add_line`, but an existing line with `real_name` is removed
    /// first. Everything that could make the new line fail is checked before
    /// the old line is touched.
    pub fn replace_line(
        &mut self,
        x: &[f64],
        y: &[f64],
        real_name: &str,
        format: Option<&LineFormat>,
        visible: bool,
    ) -> Result<usize, GraphError> {
        check_lengths(x, y)?;
        // Another line may use the real name as its display name.
        if let Ok(holder) = self.names.real_name(real_name) {
            if holder != real_name {
                return Err(GraphError::duplicate(NameKind::Display, real_name));
            }
        }
        self.remove_by_real_name(real_name);
        self.add_line(x, y, real_name, format, visible)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[PlotLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&PlotLine> {
        self.lines.get(index)
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    pub fn index_of_label(&self, label: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.label == label)
    }

    pub fn index_of_real_name(&self, real_name: &str) -> Option<usize> {
        let label = self.names.display_name(real_name).ok()?;
        self.index_of_label(label)
    }

    /// Labels of all lines in draw order, hidden ones included.
    pub fn legend_list(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.label.clone()).collect()
    }

    pub fn line_info(&self, index: usize) -> Result<LineInfo, GraphError> {
        let line = self.line(index)?;
        Ok(LineInfo {
            alpha: line.alpha,
            color: line.color.clone(),
            line_style: line.line_style,
            visible: line.visible,
            z_order: line.z_order,
            label: line.label.clone(),
        })
    }

    /// Apply the present fields of `update` to the line at `index`. Either
    /// the whole update is applied or nothing changes.
    pub fn set_attributes(&mut self, index: usize, update: &LineUpdate) -> Result<(), GraphError> {
        self.line(index)?;

        if let Some(alpha) = update.alpha {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(GraphError::InvalidAlpha(alpha));
            }
        }
        let color = non_empty(&update.color).map(normalize_color).transpose()?;
        let line_style = non_empty(&update.line_style)
            .map(str::parse::<LineStyle>)
            .transpose()?;

        // The rename goes last, it is the only step that touches the registry.
        if let Some(new_label) = update.new_label() {
            let old_label = self.lines[index].label.clone();
            self.names.rename_display_name(&old_label, new_label)?;
            self.lines[index].label = new_label.to_owned();
        }

        let line = &mut self.lines[index];
        if let Some(alpha) = update.alpha {
            line.alpha = Some(alpha);
        }
        if let Some(color) = color {
            line.color = color;
        }
        if let Some(line_style) = line_style {
            line.line_style = line_style;
        }
        if let Some(visible) = update.visible {
            line.visible = visible;
        }
        if let Some(z_order) = update.z_order {
            line.z_order = z_order;
        }
        Ok(())
    }

    pub fn set_color_for_indexes(&mut self, indexes: &[usize], color: &str) -> Result<(), GraphError> {
        self.check_indexes(indexes)?;
        let color = normalize_color(color)?;
        for index in indexes {
            self.lines[*index].color.clone_from(&color);
        }
        Ok(())
    }

    /// Replace the data of the line at `index`, keeping its attributes.
    pub fn set_points(&mut self, index: usize, x: &[f64], y: &[f64]) -> Result<(), GraphError> {
        self.line(index)?;
        check_lengths(x, y)?;
        self.lines[index].points = x.iter().zip(y).map(|(x, y)| [*x, *y]).collect();
        Ok(())
    }

    /// Remove the lines at the given draw-order positions, independent of
    /// the order (and repetitions) in `indexes`. Lines are taken out from the
    /// highest index down, which is also the order of the returned records.
    /// If any index is out of range nothing is removed.
    pub fn remove_by_indexes(&mut self, indexes: &[usize]) -> Result<Vec<PlotLine>, GraphError> {
        self.check_indexes(indexes)?;
        let mut indexes = indexes.to_vec();
        indexes.sort_unstable_by(|a, b| b.cmp(a));
        indexes.dedup();

        let removed: Vec<PlotLine> = indexes
            .into_iter()
            .map(|index| {
                let line = self.lines.remove(index);
                self.names.remove_by_real_name(&line.real_name);
                log::debug!("removed line '{}' at index {}", line.label, index);
                line
            })
            .collect();
        Ok(removed)
    }

    pub fn remove_by_real_name(&mut self, real_name: &str) -> Option<PlotLine> {
        let index = self
            .lines
            .iter()
            .position(|line| line.real_name == real_name)?;
        let line = self.lines.remove(index);
        self.names.remove_by_real_name(real_name);
        Some(line)
    }

    pub fn remove_by_display_label(&mut self, label: &str) -> Option<PlotLine> {
        let index = self.index_of_label(label)?;
        let line = self.lines.remove(index);
        self.names.remove_by_display_name(label);
        Some(line)
    }

    /// Remove all lines whose real name starts with `prefix`, returned in
    /// draw order.
    pub fn remove_all_by_real_name_prefix(&mut self, prefix: &str) -> Vec<PlotLine> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.lines)
            .into_iter()
            .partition(|line| line.real_name.starts_with(prefix));
        self.lines = kept;
        self.names.remove_all_with_real_name_prefix(prefix);
        log::debug!("removed {} lines with prefix '{}'", removed.len(), prefix);
        removed
    }

    pub fn clear_all(&mut self) {
        self.lines.clear();
        self.names.clear();
        self.legend = None;
        self.bounds = None;
        self.colors_used = 0;
    }

    /// Recompute the data limits from all finite points of visible lines.
    pub fn rescale(&mut self) -> Option<Bounds> {
        let mut points = self
            .lines
            .iter()
            .filter(|line| line.visible)
            .flat_map(|line| line.points.iter())
            .filter(|[x, y]| x.is_finite() && y.is_finite());

        self.bounds = points.next().map(|&[x, y]| {
            points.fold(
                Bounds {
                    xmin: x,
                    xmax: x,
                    ymin: y,
                    ymax: y,
                },
                |b, &[x, y]| Bounds {
                    xmin: b.xmin.min(x),
                    xmax: b.xmax.max(x),
                    ymin: b.ymin.min(y),
                    ymax: b.ymax.max(y),
                },
            )
        });
        self.bounds
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Rebuild the legend from the visible lines. Without visible lines there
    /// is no legend at all.
    pub fn recompute_legend(&mut self) -> Option<&Legend> {
        let entries: Vec<LegendEntry> = self
            .lines
            .iter()
            .filter(|line| line.visible)
            .map(|line| LegendEntry {
                label: line.label.clone(),
                color: line.color.clone(),
                line_style: line.line_style,
                alpha: line.alpha,
            })
            .collect();

        if entries.is_empty() {
            if self.legend.take().is_some() {
                log::debug!("no visible lines, removing legend");
            }
        } else {
            self.legend = Some(Legend { entries });
        }
        self.legend.as_ref()
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    fn line(&self, index: usize) -> Result<&PlotLine, GraphError> {
        self.lines.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    fn check_indexes(&self, indexes: &[usize]) -> Result<(), GraphError> {
        match indexes.iter().find(|index| **index >= self.lines.len()) {
            Some(index) => Err(GraphError::IndexOutOfRange {
                index: *index,
                len: self.lines.len(),
            }),
            None => Ok(()),
        }
    }
}

fn check_lengths(x: &[f64], y: &[f64]) -> Result<(), GraphError> {
    if x.len() != y.len() {
        return Err(GraphError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl From<PlotLineCollection> for Vec<PlotLine> {
    fn from(collection: PlotLineCollection) -> Self {
        collection.lines
    }
}

// Rebuilding goes through the registry, so stored lines with clashing names
// are rejected.
impl TryFrom<Vec<PlotLine>> for PlotLineCollection {
    type Error = GraphError;

    fn try_from(lines: Vec<PlotLine>) -> Result<Self, Self::Error> {
        let mut names = NameRegistry::new();
        for line in lines.iter() {
            names.add_entry(&line.real_name, Some(&line.label))?;
            if let Some(alpha) = line.alpha.filter(|alpha| !(0.0..=1.0).contains(alpha)) {
                return Err(GraphError::InvalidAlpha(alpha));
            }
            normalize_color(&line.color)?;
        }
        Ok(Self {
            colors_used: lines.len(),
            lines,
            names,
            legend: None,
            bounds: None,
        })
    }
}
