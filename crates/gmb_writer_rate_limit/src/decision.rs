//! Results of asking the limiter for permission.

/// Proof that a [`RateLimiter::check`](crate::RateLimiter::check) allowed a
/// generation.
///
/// Only the limiter can create one, and [`RateLimiter::record`](crate::RateLimiter::record)
/// consumes it, so a generation is recorded at most once per allowed check.
#[derive(Debug)]
#[must_use = "a permit that is never recorded leaves the generation uncounted"]
pub struct GenerationPermit {
    _private: (),
}

impl GenerationPermit {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Outcome of a limit check.
#[derive(Debug)]
pub enum RateLimitDecision {
    /// Generation may proceed; record it with the permit on success.
    Allowed {
        /// Capability to record the generation
        permit: GenerationPermit,
        /// Generations left in the current window before this one
        daily_remaining: u32,
    },
    /// Too soon after the previous generation.
    Cooldown {
        /// Milliseconds until the cooldown ends
        remaining_ms: u64,
        /// Generations left in the current window
        daily_remaining: u32,
    },
    /// The daily cap has been reached.
    DailyExhausted {
        /// Milliseconds until the window resets
        resets_in_ms: u64,
        /// Always zero; kept for display symmetry
        daily_remaining: u32,
    },
}

impl RateLimitDecision {
    /// Whether generation may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }

    /// Cooldown still pending, if that is why the check failed.
    pub fn remaining_cooldown_ms(&self) -> Option<u64> {
        match self {
            RateLimitDecision::Cooldown { remaining_ms, .. } => Some(*remaining_ms),
            _ => None,
        }
    }

    /// Generations left in the current window.
    pub fn daily_remaining(&self) -> u32 {
        match self {
            RateLimitDecision::Allowed {
                daily_remaining, ..
            }
            | RateLimitDecision::Cooldown {
                daily_remaining, ..
            }
            | RateLimitDecision::DailyExhausted {
                daily_remaining, ..
            } => *daily_remaining,
        }
    }

    /// Take the permit out of an allowed decision.
    pub fn into_permit(self) -> Option<GenerationPermit> {
        match self {
            RateLimitDecision::Allowed { permit, .. } => Some(permit),
            _ => None,
        }
    }
}

/// Countdowns for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemainingTime {
    /// Milliseconds until the cooldown ends (0 if none)
    pub cooldown_ms: u64,
    /// Milliseconds until the daily window resets
    pub daily_window_ms: u64,
}
