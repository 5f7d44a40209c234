//! Flat-file train registry
//!
//! Records live in a JSON array; the registry only appends, lists and filters.
//! It shares nothing with the tree printer beyond the crate.

mod error;
mod record;
mod store;
mod table;

pub use error::{RegistryError, Result};
pub use record::{Train, add_train, select_trains};
pub use store::TrainStore;
pub use table::{EMPTY_MESSAGE, render_table};
