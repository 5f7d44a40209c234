//! Lazy depth-first traversal shared by every renderer.
//!
//! `Walk` yields one `Entry` per retained directory entry in pre-order. Listing,
//! sorting, filtering and the last-sibling flag are decided here once, so the text
//! and JSON renderers never touch the filesystem themselves.

use std::collections::HashSet;
use std::fs;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::entry::{Entry, EntryKind, entry_name};
use super::error::{Result, TreeError};

/// Iterator over the entries below a root directory.
///
/// Holds one pending sibling listing per open directory level. After the first
/// error the iterator is exhausted.
pub struct Walk {
    config: WalkerConfig,
    stack: Vec<std::vec::IntoIter<Entry>>,
    /// Directory yielded last whose children still have to be listed.
    descend_into: Option<(PathBuf, usize)>,
    failed: bool,
}

impl Walk {
    pub(super) fn new(root: &Path, config: WalkerConfig) -> Result<Self> {
        let top = read_level(root, 0, &config)?;
        Ok(Self {
            config,
            stack: vec![top.into_iter()],
            descend_into: None,
            failed: false,
        })
    }

    fn fail(&mut self, err: TreeError) -> Option<Result<Entry>> {
        self.failed = true;
        self.stack.clear();
        self.descend_into = None;
        Some(Err(err))
    }
}

impl Iterator for Walk {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        // Children are listed lazily so a directory's own line is produced before
        // any error from reading its contents.
        if let Some((path, depth)) = self.descend_into.take() {
            match read_level(&path, depth, &self.config) {
                Ok(children) => {
                    if !children.is_empty() {
                        self.stack.push(children.into_iter());
                    }
                }
                Err(e) => return self.fail(e),
            }
        }

        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(entry) => {
                    if entry.is_dir() && self.config.descends_below(entry.depth) {
                        self.descend_into = Some((entry.path.clone(), entry.depth + 1));
                    }
                    return Some(Ok(entry));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Walk {}

/// Read, filter and sort one directory listing.
///
/// Names are ordered by their raw bytes, so `B` sorts before `a`. The last-sibling
/// flag is computed after the directories-only filter has been applied. Names that
/// are not valid UTF-8 are escaped; if an escaped name clashes with a sibling the
/// listing fails rather than merging the two.
fn read_level(path: &Path, depth: usize, config: &WalkerConfig) -> Result<Vec<Entry>> {
    tracing::debug!(path = %path.display(), depth, "listing directory");

    let read_dir_error = |source| TreeError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut kept = Vec::new();
    for dirent in fs::read_dir(path).map_err(read_dir_error)? {
        let dirent = dirent.map_err(read_dir_error)?;
        let kind = dirent
            .file_type()
            .map(EntryKind::from)
            .map_err(|source| TreeError::Metadata {
                path: dirent.path(),
                source,
            })?;
        if config.dirs_only && !kind.is_dir() {
            continue;
        }
        kept.push((dirent, kind));
    }
    kept.sort_by_key(|(dirent, _)| dirent.file_name());

    let count = kept.len();
    let mut seen = HashSet::with_capacity(count);
    kept.into_iter()
        .enumerate()
        .map(|(index, (dirent, kind))| -> Result<Entry> {
            let entry_path = dirent.path();
            let name = entry_name(&dirent.file_name());
            if !seen.insert(name.clone()) {
                return Err(TreeError::DuplicateName {
                    path: entry_path,
                    name,
                });
            }
            let size = if config.show_size {
                let meta = dirent.metadata().map_err(|source| TreeError::Metadata {
                    path: entry_path.clone(),
                    source,
                })?;
                Some(meta.len())
            } else {
                None
            };
            Ok(Entry {
                name,
                path: entry_path,
                kind,
                depth,
                size,
                is_last: index + 1 == count,
            })
        })
        .collect()
}
