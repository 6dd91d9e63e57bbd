use std::path::{Path, PathBuf};

use app_core::backend::BackendState;
use coord_reader::{Coordinates, ReaderSettings};

/// State of the backend thread, which does all file reading.
pub struct BackendAppState {
    data_path: PathBuf,
    reader: ReaderSettings,
}

impl BackendState for BackendAppState {}

impl BackendAppState {
    pub fn new(data_path: PathBuf, reader: ReaderSettings) -> Self {
        Self { data_path, reader }
    }

    /// Relative paths are looked up in the data directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_path.join(path)
        }
    }

    pub fn read_coordinates(&self, path: &Path) -> Result<Coordinates, String> {
        Coordinates::from_path(&self.resolve(path), &self.reader)
    }

    pub fn reader(&self) -> &ReaderSettings {
        &self.reader
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
