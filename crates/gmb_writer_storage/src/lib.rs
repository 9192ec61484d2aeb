//! Persistent key-value storage for gmb_writer.
//!
//! Everything the application remembers between runs (rate-limit counters,
//! the API key, the theme preference) lives behind the [`KeyValueStore`]
//! trait as string values under well-known keys.
//!
//! # Backends
//!
//! - [`FileKeyValueStore`]: a JSON object on disk, rewritten atomically
//! - [`MemoryKeyValueStore`]: process-local map for tests and ephemeral runs

#![warn(missing_docs)]

mod file;
mod memory;
mod profile;
mod store;

pub use file::{FileKeyValueStore, default_profile_path};
pub use memory::MemoryKeyValueStore;
pub use profile::ProfileStore;
pub use store::{API_KEY_KEY, KeyValueStore, RATE_LIMIT_KEY, THEME_KEY};
