#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod backend_state;
pub mod error;
pub mod graph;
pub mod lines;
mod nan_as_null;
pub mod names;
pub mod render;
pub mod roles;
pub mod selection;

pub use app::config::Config;
pub use app::events;
pub use app::storage;
pub use app::PlotApp;
pub use backend_state::BackendAppState;
pub use error::GraphError;
pub use graph::Graph;
