pub mod config;
pub mod events;
pub mod storage;

use std::{sync::mpsc::Sender, thread::JoinHandle};

use app_core::{
    backend::{request_stop, BackendRequest},
    event::AppEvent,
};

use crate::{
    error::GraphError,
    graph::Graph,
    render::{RenderSurface, StatusSink},
    selection::LineSelection,
    BackendAppState,
};
use config::Config;
use events::EventQueue;

pub type DynRequestSender = Sender<Box<dyn BackendRequest<BackendAppState>>>;

/// Owns the graph and everything the UI callbacks act on. Events get it by
/// `&mut`, there is no global state.
pub struct PlotApp {
    config: Config,
    graph: Graph,
    selection: Vec<usize>,
    request_tx: DynRequestSender,
    backend_thread_handle: Option<JoinHandle<()>>,
    event_queue: EventQueue<Self>,
    surface: Box<dyn RenderSurface>,
    status: Box<dyn StatusSink>,
    request_redraw: Option<()>,
}

impl PlotApp {
    pub fn new(
        config: Config,
        request_tx: DynRequestSender,
        backend_thread_handle: Option<JoinHandle<()>>,
        surface: Box<dyn RenderSurface>,
        status: Box<dyn StatusSink>,
    ) -> Result<Self, GraphError> {
        let mut graph = Graph::new().with_data_set_format(&config.data_set_format)?;
        graph.set_title(&config.plot_title);
        graph.set_x_label(&config.x_label);
        graph.set_y_label(&config.y_label);

        Ok(Self {
            config,
            graph,
            selection: Vec::new(),
            request_tx,
            backend_thread_handle,
            event_queue: EventQueue::new(),
            surface,
            status,
            request_redraw: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn selection_view(&self) -> Result<LineSelection, GraphError> {
        self.graph.selection_view(&self.selection)
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = Self>>) {
        self.event_queue.queue_event(event);
    }

    pub fn has_pending_events(&self) -> bool {
        !self.event_queue.is_empty()
    }

    /// One tick: run queued events, then redraw if any of them asked for it.
    pub fn update_state(&mut self) {
        self.run_events();
        if self.request_redraw.take().is_some() {
            self.graph.update_graph(self.surface.as_mut());
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    fn update_status(&mut self, msg: &str) {
        self.status.update_status(msg);
    }

    fn clear_plot(&mut self) {
        self.graph.remove_all_lines();
        self.selection.clear();
    }

    /// Stop the backend thread and wait for it.
    pub fn shutdown(mut self) {
        if let Some(handle) = self.backend_thread_handle.take() {
            request_stop(&self.request_tx, handle);
        }
    }
}
