use std::path::Path;

use app_core::storage::Storage;
use serde::{Deserialize, Serialize};

use super::PlotApp;
use crate::graph::Graph;

// The backend only holds the data path and reader settings, which come from
// the config file on every start, so nothing of it is stored.
#[derive(Clone, Serialize, Deserialize)]
struct BackendStorage {}

#[derive(Serialize, Deserialize)]
struct FrontendStorage {
    graph: Graph,
    selection: Vec<usize>,
}

pub fn save_json(app: &PlotApp, path: Option<&Path>) -> Result<(), String> {
    let frontend_storage = FrontendStorage {
        graph: app.graph.clone(),
        selection: app.selection.clone(),
    };
    let storage = Storage::new(BackendStorage {}, frontend_storage);
    storage.save_json(path)
}

pub fn load_json(app: &mut PlotApp, path: Option<&Path>) -> Result<(), String> {
    let Storage::<BackendStorage, FrontendStorage> {
        backend_storage: _,
        frontend_storage,
    } = Storage::load_json(path)?;

    let FrontendStorage { graph, selection } = frontend_storage;
    let len = graph.lines().len();
    app.selection = selection.into_iter().filter(|i| *i < len).collect();
    app.graph = graph;
    app.request_redraw();
    Ok(())
}
