//! Walker - validates the root and drives the traversal

use std::fs;
use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::Entry;
use super::error::{Result, TreeError};
use super::traversal::Walk;

/// Callback for streaming output - receives entries in traversal order.
pub trait StreamingOutput {
    fn output_entry(&mut self, entry: &Entry) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Tree walker over a single root directory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Start a lazy walk below `root`. The root itself is not yielded.
    pub fn walk(&self, root: &Path) -> Result<Walk> {
        let meta = fs::metadata(root).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TreeError::NotFound(root.to_path_buf())
            } else {
                TreeError::Metadata {
                    path: root.to_path_buf(),
                    source,
                }
            }
        })?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }
        Walk::new(root, self.config)
    }

    /// Walk and hand every entry to `output` as soon as it is produced.
    /// Returns the number of entries emitted.
    pub fn walk_streaming<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<usize> {
        let mut count = 0usize;
        for entry in self.walk(root)? {
            output.output_entry(&entry?)?;
            count += 1;
        }
        output.finish()?;
        Ok(count)
    }
}
