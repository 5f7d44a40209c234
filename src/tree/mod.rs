//! Directory tree walking logic
//!
//! A single lazy traversal (`Walk`) produces `Entry` records in depth-first
//! pre-order. Renderers consume them through the `StreamingOutput` trait:
//!
//! - `TextFormatter`: prints indented lines as entries arrive
//! - `JsonTreeBuilder`: folds entries into a nested mapping for JSON output

mod config;
mod entry;
mod error;
mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{Entry, EntryKind};
pub use error::{Result, TreeError};
pub use traversal::Walk;
pub use walker::{StreamingOutput, TreeWalker};
