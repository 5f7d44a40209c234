//! twig - directory trees as indented text or nested JSON, plus a small train registry

pub mod logging;
pub mod output;
pub mod trains;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{JsonSchema, JsonTreeBuilder, OutputConfig, TextFormatter, TreeMap, print_json};
pub use tree::{Entry, EntryKind, StreamingOutput, TreeError, TreeWalker, Walk, WalkerConfig};
