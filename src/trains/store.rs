//! JSON file holding the train list

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::{RegistryError, Result};
use super::record::Train;

/// Flat JSON array of trains at a fixed path.
#[derive(Debug, Clone)]
pub struct TrainStore {
    path: PathBuf,
}

impl TrainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the store for `filename`.
    ///
    /// Absolute paths are used as given. Relative names live in `data_dir`, falling
    /// back to the user's home directory.
    pub fn resolve(filename: &Path, data_dir: Option<&Path>) -> Result<Self> {
        if filename.is_absolute() {
            return Ok(Self::new(filename));
        }
        let base = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::home_dir().ok_or(RegistryError::NoDataDir)?,
        };
        Ok(Self::new(base.join(filename)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all trains. A missing file is an empty registry.
    pub fn load(&self) -> Result<Vec<Train>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no train store yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(RegistryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let trains: Vec<Train> =
            serde_json::from_str(&text).map_err(|source| RegistryError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(path = %self.path.display(), count = trains.len(), "loaded trains");
        Ok(trains)
    }

    /// Rewrite the whole store. Non-ASCII text is written as-is.
    pub fn save(&self, trains: &[Train]) -> Result<()> {
        let write_error = |source| RegistryError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        trains.serialize(&mut serializer)?;
        buf.push(b'\n');

        fs::write(&self.path, buf).map_err(write_error)?;
        tracing::info!(path = %self.path.display(), count = trains.len(), "saved trains");
        Ok(())
    }
}
