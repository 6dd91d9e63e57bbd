//! Boundaries to whatever draws the graph and shows status messages.

use crate::{graph::Graph, lines::Bounds};

/// A drawing surface. Neither call returns anything; the surface reads all
/// it needs from the graph.
pub trait RenderSurface {
    /// Fit the view to `bounds`, `None` if no visible line has data.
    fn rescale(&mut self, bounds: Option<Bounds>);
    fn redraw(&mut self, graph: &Graph);
}

/// Receives human readable status messages, e.g. for a status bar.
pub trait StatusSink {
    fn update_status(&mut self, msg: &str);
}

/// Surface for running without a window: reports each redraw to the log.
#[derive(Debug, Default)]
pub struct LogSurface {
    pub redraws: usize,
    bounds: Option<Bounds>,
}

impl RenderSurface for LogSurface {
    fn rescale(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    fn redraw(&mut self, graph: &Graph) {
        self.redraws += 1;
        let visible = graph.lines().lines().iter().filter(|l| l.visible()).count();
        log::info!(
            "redraw '{}': {} lines ({} visible), bounds {:?}",
            graph.title(),
            graph.lines().len(),
            visible,
            self.bounds
        );
    }
}

/// Status sink that forwards to the log and keeps the latest message.
#[derive(Debug, Default)]
pub struct LogStatus {
    pub last: Option<String>,
}

impl StatusSink for LogStatus {
    fn update_status(&mut self, msg: &str) {
        log::info!("{msg}");
        self.last = Some(msg.to_owned());
    }
}
