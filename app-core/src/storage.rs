//! This module defines the `Storage` type which bundles the persisted state
//! of the backend and of the session owner and provides methods to store/load
//! them to/from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};
use std::{
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use super::string_error::ErrorStringExt;

pub const STORAGE_FILE: &str = "./.fidplot_session.json";

#[derive(Serialize, Deserialize)]
pub struct Storage<B, F> {
    pub backend_storage: B,
    pub frontend_storage: F,
}

impl<B, F> Storage<B, F>
where
    for<'a> B: Serialize + Deserialize<'a>,
    for<'a> F: Serialize + Deserialize<'a>,
{
    pub fn new(backend_storage: B, frontend_storage: F) -> Self {
        Self {
            backend_storage,
            frontend_storage,
        }
    }

    pub fn save_json(&self, path: Option<&Path>) -> Result<(), String> {
        let output_path = resolve(path);
        let file =
            std::fs::File::create(&output_path).err_to_string("could not open storage file")?;
        to_writer_pretty(BufWriter::new(file), &self)
            .err_to_string("could not save session to json")?;
        log::debug!("saved session to file {:?}", output_path);
        Ok(())
    }

    pub fn load_json(path: Option<&Path>) -> Result<Storage<B, F>, String> {
        let input_path = resolve(path);
        let file = std::fs::File::open(&input_path).err_to_string("could not open storage file")?;
        let storage = from_reader(BufReader::new(file))
            .err_to_string("could not load session from storage file")?;
        log::debug!("loaded session from file {:?}", input_path);
        Ok(storage)
    }
}

fn resolve(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(STORAGE_FILE))
}
