//! Persisted limiter record.

use serde::{Deserialize, Serialize};

/// Counters persisted between runs.
///
/// Serialized as camelCase JSON under the `rateLimits` key:
///
/// ```json
/// {"count":3,"lastGenerationTimestamp":1700000000000,"dailyCount":3,"dailyResetTimestamp":1700086400000}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitState {
    /// Lifetime number of recorded generations
    pub count: u64,
    /// Epoch ms of the most recent recorded generation, 0 if none
    pub last_generation_timestamp: u64,
    /// Generations recorded in the current window
    pub daily_count: u32,
    /// Epoch ms at which the current window expires
    pub daily_reset_timestamp: u64,
}

impl RateLimitState {
    /// Fresh record whose window starts at `now_ms`.
    pub fn fresh(now_ms: u64, window_ms: u64) -> Self {
        Self {
            count: 0,
            last_generation_timestamp: 0,
            daily_count: 0,
            daily_reset_timestamp: now_ms.saturating_add(window_ms),
        }
    }

    /// Whether no generation has ever been recorded.
    pub fn is_pristine(&self) -> bool {
        self.count == 0 && self.last_generation_timestamp == 0
    }

    /// Whether the window ended before `now_ms`.
    pub fn window_expired(&self, now_ms: u64) -> bool {
        now_ms > self.daily_reset_timestamp
    }

    /// Start a new window at `now_ms`, keeping lifetime counters.
    pub fn roll_over(&mut self, now_ms: u64, window_ms: u64) {
        self.daily_count = 0;
        self.daily_reset_timestamp = now_ms.saturating_add(window_ms);
    }

    /// Milliseconds of cooldown left at `now_ms`.
    ///
    /// Only a pristine record (no count and no timestamp) skips the
    /// cooldown, so a first generation at epoch 0 is still allowed.
    pub fn cooldown_remaining(&self, now_ms: u64, cooldown_ms: u64) -> u64 {
        if self.is_pristine() {
            return 0;
        }
        let elapsed = now_ms.saturating_sub(self.last_generation_timestamp);
        cooldown_ms.saturating_sub(elapsed)
    }
}
