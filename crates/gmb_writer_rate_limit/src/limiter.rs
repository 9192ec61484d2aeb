//! The persisted rate limiter.

use crate::{
    Clock, GenerationPermit, RateLimitDecision, RateLimitPolicy, RateLimitState, RemainingTime,
};
use gmb_writer_storage::{KeyValueStore, RATE_LIMIT_KEY};
use std::sync::{Arc, Mutex};

/// Cooldown plus rolling daily quota, persisted in a key-value store.
///
/// No operation fails: an unreadable record reads as a fresh one and write
/// failures are logged and ignored. Every operation holds an internal lock
/// across its read-modify-write, so concurrent callers in one process never
/// lose updates.
///
/// # Example
///
/// ```
/// use gmb_writer_rate_limit::{DAILY_LIMIT, ManualClock, RateLimitDecision, RateLimiter};
/// use gmb_writer_storage::MemoryKeyValueStore;
/// use std::sync::Arc;
///
/// let clock = Arc::new(ManualClock::new(1_700_000_000_000));
/// let limiter = RateLimiter::new(Arc::new(MemoryKeyValueStore::new()), clock);
///
/// match limiter.check() {
///     RateLimitDecision::Allowed { permit, daily_remaining } => {
///         assert_eq!(daily_remaining, DAILY_LIMIT);
///         limiter.record(permit);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(limiter.snapshot().daily_count, 1);
/// ```
pub struct RateLimiter {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
    lock: Mutex<()>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl RateLimiter {
    /// Create a limiter with the default policy.
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_policy(store, clock, RateLimitPolicy::default())
    }

    /// Create a limiter with custom limits.
    pub fn with_policy(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        policy: RateLimitPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            policy,
            lock: Mutex::new(()),
        }
    }

    /// Limits in force.
    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    /// Decide whether a generation may start now.
    ///
    /// Only side effect: an expired window is rolled over and persisted.
    #[tracing::instrument(skip(self))]
    pub fn check(&self) -> RateLimitDecision {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now_ms();
        let state = self.load_current(now);

        let daily_remaining = self.policy.daily_limit().saturating_sub(state.daily_count);

        if state.daily_count >= *self.policy.daily_limit() {
            let resets_in_ms = state.daily_reset_timestamp.saturating_sub(now);
            tracing::debug!(resets_in_ms, "Daily limit reached");
            return RateLimitDecision::DailyExhausted {
                resets_in_ms,
                daily_remaining,
            };
        }

        let remaining_ms = state.cooldown_remaining(now, *self.policy.cooldown_ms());
        if remaining_ms > 0 {
            tracing::debug!(remaining_ms, daily_remaining, "Cooldown active");
            return RateLimitDecision::Cooldown {
                remaining_ms,
                daily_remaining,
            };
        }

        tracing::debug!(daily_remaining, "Generation allowed");
        RateLimitDecision::Allowed {
            permit: GenerationPermit::new(),
            daily_remaining,
        }
    }

    /// Count a successful generation.
    #[tracing::instrument(skip(self, permit))]
    pub fn record(&self, permit: GenerationPermit) {
        drop(permit);
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now_ms();
        let mut state = self.load_current(now);

        state.count = state.count.saturating_add(1);
        state.daily_count = state.daily_count.saturating_add(1);
        state.last_generation_timestamp = now;
        self.persist(&state);

        tracing::info!(
            count = state.count,
            daily_count = state.daily_count,
            "Recorded generation"
        );
    }

    /// Countdowns until the cooldown ends and the window resets.
    #[tracing::instrument(skip(self))]
    pub fn remaining_time(&self) -> RemainingTime {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now_ms();
        let state = self.load_current(now);

        RemainingTime {
            cooldown_ms: state.cooldown_remaining(now, *self.policy.cooldown_ms()),
            daily_window_ms: state.daily_reset_timestamp.saturating_sub(now),
        }
    }

    /// Stored record as-is, without rolling the window over.
    pub fn snapshot(&self) -> RateLimitState {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.load(self.clock.now_ms())
    }

    /// Load the record and roll an expired window over.
    fn load_current(&self, now: u64) -> RateLimitState {
        let mut state = self.load(now);
        if state.window_expired(now) {
            state.roll_over(now, *self.policy.window_ms());
            tracing::info!(
                reset_at = state.daily_reset_timestamp,
                "Daily window expired, starting a new one"
            );
            self.persist(&state);
        }
        state
    }

    fn load(&self, now: u64) -> RateLimitState {
        let fresh = || RateLimitState::fresh(now, *self.policy.window_ms());

        let raw = match self.store.get(RATE_LIMIT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fresh(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read rate limit state, using defaults");
                return fresh();
            }
        };

        match serde_json::from_str::<RateLimitState>(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed rate limit state, using defaults");
                fresh()
            }
        }
    }

    fn persist(&self, state: &RateLimitState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize rate limit state");
                return;
            }
        };
        if let Err(e) = self.store.set(RATE_LIMIT_KEY, &raw) {
            tracing::warn!(error = %e, "Failed to persist rate limit state");
        }
    }
}
