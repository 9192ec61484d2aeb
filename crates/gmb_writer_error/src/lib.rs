//! Error types for gmb_writer.
//!
//! Every domain follows the same `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind and records where it was created
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gmb_writer_error::{GeminiError, GeminiErrorKind, GmbResult};
//!
//! fn fetch_data() -> GmbResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::ApiRequest("connection refused".into())))?
//! }
//!
//! assert!(fetch_data().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod json;
mod prompt;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{GmbError, GmbErrorKind, GmbResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use prompt::{PromptError, PromptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
