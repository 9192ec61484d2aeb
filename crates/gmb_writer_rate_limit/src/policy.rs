//! Limit constants.

/// Minimum spacing between successful generations.
pub const COOLDOWN_PERIOD_MS: u64 = 10_000;

/// Generations allowed per window.
pub const DAILY_LIMIT: u32 = 30;

/// Length of the rolling daily window (24h).
pub const WINDOW_LENGTH_MS: u64 = 86_400_000;

/// Limits enforced by a [`RateLimiter`](crate::RateLimiter).
///
/// Production code always runs with [`RateLimitPolicy::default`]; other
/// values exist so tests can shrink the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct RateLimitPolicy {
    cooldown_ms: u64,
    daily_limit: u32,
    window_ms: u64,
}

impl RateLimitPolicy {
    /// Build a custom policy.
    pub fn new(cooldown_ms: u64, daily_limit: u32, window_ms: u64) -> Self {
        Self {
            cooldown_ms,
            daily_limit,
            window_ms,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(COOLDOWN_PERIOD_MS, DAILY_LIMIT, WINDOW_LENGTH_MS)
    }
}
