use crate::{
    error::GraphError,
    lines::{LineFormat, LineInfo, LineUpdate, PlotLine, PlotLineCollection},
    render::RenderSurface,
    roles::{Anchor, LineFamily, LineRole},
};

use super::{Graph, RemovalReport, Signal};

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format string used when plotting the data set, e.g. `"b"` or `"k--"`.
    pub fn with_data_set_format(mut self, format: &str) -> Result<Self, GraphError> {
        LineFormat::parse(format)?;
        self.data_set_format = format.to_owned();
        Ok(self)
    }

    pub fn lines(&self) -> &PlotLineCollection {
        &self.lines
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    pub fn set_x_label(&mut self, x_label: &str) {
        x_label.clone_into(&mut self.x_label);
    }

    pub fn set_y_label(&mut self, y_label: &str) {
        y_label.clone_into(&mut self.y_label);
    }

    /// Data behind an anchor line, if it is plotted.
    pub fn anchor_data(&self, anchor: Anchor) -> Option<&Signal> {
        match anchor {
            Anchor::DataSet => self.data.as_ref(),
            Anchor::BestFit => self.best_fit.as_ref(),
            Anchor::InitialFit => self.initial_fit.as_ref(),
            Anchor::Residuals => self.residuals.as_ref(),
        }
    }

    pub fn backup(&self) -> Option<&Signal> {
        self.backup.as_ref()
    }

    // ------------------------------------------------------------------------
    // Plotting
    // ------------------------------------------------------------------------

    /// Plot a new data set, replacing the old one together with its backup.
    /// On error the old data set stays as it was.
    pub fn plot_new_dataset(&mut self, x: &[f64], y: &[f64]) -> Result<usize, GraphError> {
        let format = LineFormat::parse(&self.data_set_format)?;
        let index = self.lines.replace_line(
            x,
            y,
            Anchor::DataSet.real_name(),
            Some(&format),
            true,
        )?;
        self.data = Some(Signal::new(x, y));
        self.backup = Some(Signal::new(x, y));
        Ok(index)
    }

    /// Replace the data of the plotted data set; the backup is kept.
    pub fn update_signal_data(&mut self, x: &[f64], y: &[f64]) -> Result<(), GraphError> {
        let index = self
            .lines
            .index_of_real_name(Anchor::DataSet.real_name())
            .ok_or(GraphError::NoDataSet)?;
        self.lines.set_points(index, x, y)?;
        self.data = Some(Signal::new(x, y));
        Ok(())
    }

    /// Put the backup of the data set back in place.
    pub fn restore_original_plot(&mut self) -> Result<(), GraphError> {
        let backup = self.backup.clone().ok_or(GraphError::NoDataSet)?;
        self.update_signal_data(&backup.x, &backup.y)
    }

    pub fn plot_best_fit(&mut self, x: &[f64], y: &[f64]) -> Result<usize, GraphError> {
        self.plot_anchor(Anchor::BestFit, x, y)
    }

    pub fn plot_initial_fit(&mut self, x: &[f64], y: &[f64]) -> Result<usize, GraphError> {
        self.plot_anchor(Anchor::InitialFit, x, y)
    }

    pub fn plot_residuals(&mut self, x: &[f64], y: &[f64]) -> Result<usize, GraphError> {
        self.plot_anchor(Anchor::Residuals, x, y)
    }

    fn plot_anchor(&mut self, anchor: Anchor, x: &[f64], y: &[f64]) -> Result<usize, GraphError> {
        if anchor == Anchor::DataSet {
            return self.plot_new_dataset(x, y);
        }
        let index = self
            .lines
            .replace_line(x, y, anchor.real_name(), None, true)?;
        let signal = Some(Signal::new(x, y));
        match anchor {
            Anchor::BestFit => self.best_fit = signal,
            Anchor::InitialFit => self.initial_fit = signal,
            Anchor::Residuals => self.residuals = signal,
            Anchor::DataSet => (),
        }
        Ok(index)
    }

    /// Plot a new member of `family` under the first free real name
    /// `<prefix><n>`. Returns that real name.
    pub fn plot_family_member(
        &mut self,
        family: LineFamily,
        x: &[f64],
        y: &[f64],
    ) -> Result<String, GraphError> {
        let mut n = 0;
        let real_name = loop {
            let name = family.member_name(n);
            if !self.lines.names().contains_real_name(&name) {
                break name;
            }
            n += 1;
        };
        self.lines.add_line(x, y, &real_name, None, true)?;
        Ok(real_name)
    }

    // ------------------------------------------------------------------------
    // Line attributes
    // ------------------------------------------------------------------------

    pub fn legend_list(&self) -> Vec<String> {
        self.lines.legend_list()
    }

    pub fn line_info(&self, index: usize) -> Result<LineInfo, GraphError> {
        self.lines.line_info(index)
    }

    pub fn change_line_attributes(&mut self, index: usize, update: &LineUpdate) -> Result<(), GraphError> {
        self.lines.set_attributes(index, update)
    }

    pub fn set_color_multiple_lines(&mut self, indexes: &[usize], color: &str) -> Result<(), GraphError> {
        self.lines.set_color_for_indexes(indexes, color)
    }

    /// Display labels of all guess peak lines, in draw order.
    pub fn guess_peak_display_labels(&self) -> Vec<String> {
        self.family_lines(LineFamily::GuessPeak)
            .map(|line| line.label().to_owned())
            .collect()
    }

    pub fn family_lines(&self, family: LineFamily) -> impl Iterator<Item = &PlotLine> + '_ {
        self.lines
            .lines()
            .iter()
            .filter(move |line| line.real_name().starts_with(family.prefix()))
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    pub fn remove_data_set(&mut self) {
        self.lines.remove_by_real_name(Anchor::DataSet.real_name());
        self.clear_anchor(Anchor::DataSet);
    }

    pub fn remove_family(&mut self, family: LineFamily) -> usize {
        self.lines
            .remove_all_by_real_name_prefix(family.prefix())
            .len()
    }

    pub fn remove_input_spectra(&mut self) -> usize {
        self.remove_family(LineFamily::InputSpectra)
    }

    /// Remove lines by draw-order index. Anchor data goes with its line;
    /// family lines are reported back because their associated data is not
    /// cleaned up here.
    pub fn remove_lines_with_indexes(&mut self, indexes: &[usize]) -> Result<RemovalReport, GraphError> {
        let removed = self.lines.remove_by_indexes(indexes)?;
        let mut report = RemovalReport::default();
        for line in removed {
            let real_name = line.real_name().to_owned();
            match LineRole::classify(&real_name) {
                LineRole::Anchor(anchor) => {
                    self.clear_anchor(anchor);
                    report.cleared.push(anchor);
                }
                LineRole::Family(family) => {
                    let warning = GraphError::UnimplementedGroupCleanup {
                        family,
                        real_name: real_name.clone(),
                    };
                    log::warn!("{warning}");
                    report.pending_cleanup.push(warning);
                }
                LineRole::Plain => (),
            }
            report.removed.push(real_name);
        }
        Ok(report)
    }

    /// Remove every line and forget all anchor data.
    pub fn remove_all_lines(&mut self) {
        self.lines.clear_all();
        for anchor in Anchor::ALL {
            self.clear_anchor(anchor);
        }
    }

    pub(super) fn drop_data_without_line(&mut self, anchor: Anchor) {
        let has_data = self.anchor_data(anchor).is_some()
            || (anchor == Anchor::DataSet && self.backup.is_some());
        if has_data && !self.lines.names().contains_real_name(anchor.real_name()) {
            log::warn!("dropping {:?} data, its line is not plotted", anchor);
            self.clear_anchor(anchor);
        }
    }

        fn clear_anchor(&mut self, anchor: Anchor) {
        match anchor {
            Anchor::DataSet => {
                self.data = None;
                self.backup = None;
            }
            Anchor::BestFit => self.best_fit = None,
            Anchor::InitialFit => self.initial_fit = None,
            Anchor::Residuals => self.residuals = None,
        }
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    pub fn rescale(&mut self, surface: &mut dyn RenderSurface) {
        surface.rescale(self.lines.rescale());
    }

    pub fn update_legend(&mut self) {
        self.lines.recompute_legend();
    }

    /// Rescale, update the legend and redraw in one go.
    pub fn update_graph(&mut self, surface: &mut dyn RenderSurface) {
        self.rescale(surface);
        self.update_legend();
        surface.redraw(self);
    }
}
