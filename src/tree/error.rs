//! Errors raised while walking or rendering a tree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal tree-walk errors. Each filesystem variant names the path that failed.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}'", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' and another entry in the same directory both display as '{name}'", path.display())]
    DuplicateName { path: PathBuf, name: String },

    #[error("error writing output")]
    Io(#[from] io::Error),

    #[error("failed to serialize tree")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
