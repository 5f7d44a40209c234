//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
///
/// Fixed for one invocation; the root path is handed to the walker separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Deepest entry depth to report. The root's direct children are depth 0.
    /// `None` walks the whole subtree.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Attach the raw metadata length to every entry
    pub show_size: bool,
}

impl WalkerConfig {
    /// Whether the children of an entry at `depth` should be listed.
    pub fn descends_below(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}
