use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the train store.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no data directory: set TRAINS_HOME or HOME")]
    NoDataDir,

    #[error("cannot read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a valid train list", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize trains")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
