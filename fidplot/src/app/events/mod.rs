use std::{path::PathBuf, sync::mpsc::TryRecvError};

use app_core::{
    backend::{BackendEventLoop, BackendLink, LinkReceiver},
    event::{AppEvent, EventState},
    BACKEND_HUNG_UP_MSG,
};
use coord_reader::Coordinates;
use derive_new::new;

use super::{
    storage::{load_json, save_json},
    DynRequestSender, PlotApp,
};
use crate::{lines::LineUpdate, roles::LineFamily, BackendAppState};

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed on each tick of the
/// owning thread.
pub struct EventQueue<A> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = A>>>,
}

impl<A> EventQueue<A> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = A>>) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<A> Default for EventQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotApp {
    /// Run all queued events in the order they were queued. Busy events stay
    /// in front of events queued while this ran.
    pub fn run_events(&mut self) {
        let events = std::mem::take(&mut self.event_queue.queue);
        let mut backlog = Vec::new();
        for mut event in events {
            match event.apply(self) {
                Ok(EventState::Finished) => (),
                Ok(EventState::Busy) => backlog.push(event),
                Err(err) => {
                    log::error!("event failed: {}", err);
                    self.update_status(&err);
                }
            }
        }
        backlog.append(&mut self.event_queue.queue);
        self.event_queue.queue = backlog;
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTarget {
    /// Replaces the current data set.
    DataSet,
    /// Added next to the data set as a new input spectrum.
    InputSpectrum,
}

/// Read a coordinate file on the backend and plot it once it arrived.
#[derive(new)]
pub struct LoadCoordinates {
    path: PathBuf,
    target: LoadTarget,
    #[new(default)]
    pending: Option<LinkReceiver<Result<Coordinates, String>>>,
}

/// Replaces the list of selected line indexes.
#[derive(new)]
pub struct SelectLines {
    indexes: Vec<usize>,
}

/// Apply the attribute widgets' values to the selected lines.
#[derive(new)]
pub struct ChangeLineAttributes {
    update: LineUpdate,
}

#[derive(new)]
pub struct RecolorSelectedLines {
    color: String,
}

#[derive(new)]
pub struct DeleteSelectedLines {}

#[derive(new)]
pub struct RescaleGraph {}

#[derive(new)]
pub struct RestoreOriginalPlot {}

#[derive(new)]
pub struct ClearPlot {}

/// `None` leaves the respective label as it is.
#[derive(new)]
pub struct SetPlotLabels {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

/// Handles both, saving and loading the session, depending on whether
/// `should_save` is true or false.
#[derive(new)]
pub struct SaveLoadRequested {
    should_save: bool,
    path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for LoadCoordinates {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let rx = match self.pending.take() {
            Some(rx) => rx,
            None => load_coordinates(&self.path, &app.request_tx)?,
        };

        let coords = match rx.try_recv() {
            Ok(result) => result?,
            Err(TryRecvError::Empty) => {
                self.pending = Some(rx);
                return Ok(EventState::Busy);
            }
            Err(TryRecvError::Disconnected) => return Err(BACKEND_HUNG_UP_MSG.to_string()),
        };

        let name = match self.target {
            LoadTarget::DataSet => {
                app.graph
                    .plot_new_dataset(&coords.x, &coords.y)
                    .map_err(|err| err.to_string())?;
                app.update_status("Created new plot!");
                "data set".to_string()
            }
            LoadTarget::InputSpectrum => {
                let real_name = app
                    .graph
                    .plot_family_member(LineFamily::InputSpectra, &coords.x, &coords.y)
                    .map_err(|err| err.to_string())?;
                app.update_status(&format!("Added input spectrum '{real_name}'"));
                real_name
            }
        };
        log::debug!("plotted {:?} as {}", self.path, name);
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for SelectLines {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.selection = std::mem::take(&mut self.indexes);
        Ok(EventState::Finished)
    }
}

impl AppEvent for ChangeLineAttributes {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if app.selection.is_empty() {
            app.update_status("No line selected");
            return Ok(EventState::Finished);
        }
        let result = app
            .graph
            .change_selected_line_attributes(&app.selection, &self.update);
        // Lines before a failing one may have changed, so redraw either way.
        app.request_redraw();
        result.map_err(|err| err.to_string())?;
        Ok(EventState::Finished)
    }
}

impl AppEvent for RecolorSelectedLines {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if app.selection.is_empty() {
            app.update_status("No line selected");
            return Ok(EventState::Finished);
        }
        app.graph
            .set_color_multiple_lines(&app.selection, &self.color)
            .map_err(|err| err.to_string())?;
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for DeleteSelectedLines {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if app.selection.is_empty() {
            app.update_status("No line selected");
            return Ok(EventState::Finished);
        }
        let report = app
            .graph
            .remove_lines_with_indexes(&app.selection)
            .map_err(|err| err.to_string())?;
        app.selection.clear();
        for warning in report.pending_cleanup.iter() {
            app.update_status(&warning.to_string());
        }
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for RescaleGraph {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.graph.rescale(app.surface.as_mut());
        app.surface.redraw(&app.graph);
        Ok(EventState::Finished)
    }
}

impl AppEvent for RestoreOriginalPlot {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.graph
            .restore_original_plot()
            .map_err(|err| err.to_string())?;
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for ClearPlot {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.clear_plot();
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for SetPlotLabels {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(title) = &self.title {
            app.graph.set_title(title);
        }
        if let Some(x_label) = &self.x_label {
            app.graph.set_x_label(x_label);
        }
        if let Some(y_label) = &self.y_label {
            app.graph.set_y_label(y_label);
        }
        app.request_redraw();
        Ok(EventState::Finished)
    }
}

impl AppEvent for SaveLoadRequested {
    type App = PlotApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let path = self.path.as_deref();
        if self.should_save {
            save_json(app, path)?;
            app.update_status("Saved session");
        } else {
            load_json(app, path)?;
            app.update_status("Loaded session");
        }
        Ok(EventState::Finished)
    }
}

pub fn load_coordinates(
    path: &std::path::Path,
    request_tx: &DynRequestSender,
) -> Result<LinkReceiver<Result<Coordinates, String>>, String> {
    let path = path.to_owned();
    let (rx, linker) = BackendLink::new(
        &format!("load coordinates from file {:?}", path),
        move |b: &mut BackendEventLoop<BackendAppState>| {
            b.state.read_coordinates(&path).map_err(|err| {
                log::error!("{}", err);
                err
            })
        },
    );
    request_tx
        .send(Box::new(linker))
        .map_err(|_| BACKEND_HUNG_UP_MSG.to_string())?;
    Ok(rx)
}
