//! Cooldown and daily quota enforcement for content generation.
//!
//! The limiter guards two budgets at once:
//!
//! - a **cooldown** between consecutive successful generations, and
//! - a **daily cap** over a rolling window that starts fresh the first time
//!   the record is read after the previous window expired.
//!
//! State is persisted through a [`KeyValueStore`](gmb_writer_storage::KeyValueStore)
//! so limits survive restarts. Time comes from an injected [`Clock`], which
//! keeps every rule testable without sleeping.
//!
//! ```
//! use gmb_writer_rate_limit::{ManualClock, RateLimiter};
//! use gmb_writer_storage::MemoryKeyValueStore;
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::new(1_700_000_000_000));
//! let limiter = RateLimiter::new(Arc::new(MemoryKeyValueStore::new()), clock.clone());
//!
//! let decision = limiter.check();
//! let permit = decision.into_permit().unwrap();
//! limiter.record(permit);
//!
//! clock.advance(4_000);
//! assert_eq!(limiter.check().remaining_cooldown_ms(), Some(6_000));
//! ```

#![warn(missing_docs)]

mod clock;
mod decision;
mod limiter;
mod policy;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use decision::{GenerationPermit, RateLimitDecision, RemainingTime};
pub use limiter::RateLimiter;
pub use policy::{COOLDOWN_PERIOD_MS, DAILY_LIMIT, RateLimitPolicy, WINDOW_LENGTH_MS};
pub use state::RateLimitState;
