//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `text` - Streaming indented text output
//! - `json` - Nested mapping builder and JSON output

mod config;
mod json;
mod text;

// Re-export public types and functions
pub use config::{JsonSchema, OutputConfig};
pub use json::{JsonTreeBuilder, TreeMap, build_tree, print_json, to_json_string, write_json};
pub use text::{TextFormatter, format_text};
