//! Rate-limited listing content generator for Google My Business profiles.
//!
//! `gmb_writer` turns a handful of business facts into ready-to-paste
//! listing copy: posts, a business description, review replies and Q&A.
//!
//! # Architecture
//!
//! - [`ContentDispatcher`] runs one generation end to end: validation,
//!   in-flight de-duplication, rate limiting, prompt composition, the API
//!   call and the canned fallback.
//! - [`RateLimiter`] enforces a cooldown plus a rolling daily cap persisted
//!   in the profile store.
//! - [`PromptComposer`] renders validated prompt templates and parses model
//!   output back into [`ContentBody`] values.
//! - [`GeminiClient`] implements [`GenerativeBackend`] over the Gemini REST
//!   API.
//!
//! # Example
//!
//! ```no_run
//! use gmb_writer::{
//!     BusinessInfo, ContentDispatcher, ContentKind, GeminiClient, GenerationRequest,
//!     Language, LogNotifier, MemoryKeyValueStore, PostKind, ProfileStore, PromptComposer,
//!     RateLimiter, SystemClock, Tone,
//! };
//! use std::sync::Arc;
//!
//! # async fn run() -> gmb_writer::GmbResult<()> {
//! let store = Arc::new(MemoryKeyValueStore::new());
//! let dispatcher = ContentDispatcher::new(
//!     Arc::new(RateLimiter::new(store.clone(), Arc::new(SystemClock))),
//!     PromptComposer::new()?,
//!     Arc::new(GeminiClient::new(Default::default())?),
//!     ProfileStore::new(store),
//!     Arc::new(LogNotifier),
//! );
//!
//! let business = BusinessInfo::builder()
//!     .name("Padaria Central")
//!     .category("Bakery")
//!     .address("Av. Brasil, 500")
//!     .build()
//!     .map_err(|e| gmb_writer::BuilderError::from(e.to_string()))?;
//! let request = GenerationRequest::new(
//!     ContentKind::Post { kind: PostKind::Offer },
//!     business,
//!     Tone::Promotional,
//!     Language::PtBr,
//! );
//!
//! let outcome = dispatcher.generate(&request).await;
//! println!("{}", outcome.notice().title);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod dispatcher;
mod notifier;
mod outcome;
pub mod telemetry;

pub use config::{DispatchSettings, GmbWriterConfig, StorageSettings};
pub use dispatcher::{ContentDispatcher, DEFAULT_EXAMPLE_DELAY};
pub use notifier::{LogNotifier, Notifier};
pub use outcome::{GenerationOutcome, Notice, NoticeLevel, RateLimitRejection};

// Re-export the building blocks so callers need one dependency.
pub use gmb_writer_core::*;
pub use gmb_writer_error::*;
pub use gmb_writer_models::{GeminiClient, GeminiSettings, GenerativeBackend};
pub use gmb_writer_prompt::{PromptComposer, parse_response};
pub use gmb_writer_rate_limit::{
    COOLDOWN_PERIOD_MS, Clock, DAILY_LIMIT, GenerationPermit, ManualClock, RateLimitDecision,
    RateLimitPolicy, RateLimitState, RateLimiter, RemainingTime, SystemClock, WINDOW_LENGTH_MS,
};
pub use gmb_writer_storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, ProfileStore, default_profile_path,
};
