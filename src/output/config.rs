//! Output configuration types

use clap::ValueEnum;

/// Layout of the JSON mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum JsonSchema {
    /// `size` and child names share one mapping per entry
    #[default]
    Flat,
    /// Each entry carries `type`, optional `size` and, for directories, `children`
    Nested,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub schema: JsonSchema,
}
