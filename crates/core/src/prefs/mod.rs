//! Persisted display preferences
//!
//! A flat key-value record stored as TOML. Absent file or absent keys mean
//! the documented defaults; writes are immediately durable.

mod schema;
mod store;

pub use schema::{BackgroundColor, Preferences, LARGE_TEXT_SIZE, NORMAL_TEXT_SIZE};
pub use store::{PrefStore, PREFS_FILE_NAME};
