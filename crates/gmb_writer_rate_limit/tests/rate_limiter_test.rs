//! Behavioural tests for the persisted rate limiter.

use gmb_writer_rate_limit::{
    COOLDOWN_PERIOD_MS, DAILY_LIMIT, ManualClock, RateLimitDecision, RateLimitPolicy,
    RateLimitState, RateLimiter, WINDOW_LENGTH_MS,
};
use gmb_writer_storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, RATE_LIMIT_KEY};
use std::sync::Arc;

const T0: u64 = 1_700_000_000_000;

fn limiter_at(now: u64) -> (RateLimiter, Arc<ManualClock>, Arc<MemoryKeyValueStore>) {
    let clock = Arc::new(ManualClock::new(now));
    let store = Arc::new(MemoryKeyValueStore::new());
    let limiter = RateLimiter::new(store.clone(), clock.clone());
    (limiter, clock, store)
}

fn check_and_record(limiter: &RateLimiter) {
    match limiter.check() {
        RateLimitDecision::Allowed { permit, .. } => limiter.record(permit),
        other => panic!("expected allowed, got {other:?}"),
    }
}

fn seed(store: &MemoryKeyValueStore, state: RateLimitState) {
    store
        .set(RATE_LIMIT_KEY, &serde_json::to_string(&state).unwrap())
        .unwrap();
}

#[test]
fn fresh_limiter_allows_with_full_quota() {
    let (limiter, _, _) = limiter_at(T0);
    let decision = limiter.check();

    assert!(decision.is_allowed());
    assert_eq!(decision.daily_remaining(), DAILY_LIMIT);
    assert_eq!(decision.remaining_cooldown_ms(), None);
}

#[test]
fn cooldown_counts_down_then_allows() {
    let (limiter, clock, _) = limiter_at(T0);
    check_and_record(&limiter);

    clock.set(T0 + 5_000);
    let decision = limiter.check();
    assert!(!decision.is_allowed());
    assert_eq!(decision.remaining_cooldown_ms(), Some(5_000));

    clock.set(T0 + 10_000);
    let decision = limiter.check();
    assert!(decision.is_allowed());
    assert_eq!(decision.daily_remaining(), DAILY_LIMIT - 1);
}

#[test]
fn first_generation_at_time_zero_starts_cooldown() {
    let (limiter, clock, _) = limiter_at(0);
    check_and_record(&limiter);

    clock.set(5_000);
    let decision = limiter.check();
    assert!(!decision.is_allowed());
    assert_eq!(decision.remaining_cooldown_ms(), Some(5_000));

    clock.set(10_000);
    let decision = limiter.check();
    assert!(decision.is_allowed());
    assert_eq!(decision.daily_remaining(), 29);
}

#[test]
fn recent_timestamp_gates_even_with_zero_count() {
    let (limiter, _, store) = limiter_at(T0);
    seed(
        &store,
        RateLimitState {
            count: 0,
            last_generation_timestamp: T0 - 1_000,
            daily_count: 0,
            daily_reset_timestamp: T0 + WINDOW_LENGTH_MS / 2,
        },
    );

    let decision = limiter.check();
    assert!(!decision.is_allowed());
    assert_eq!(decision.remaining_cooldown_ms(), Some(COOLDOWN_PERIOD_MS - 1_000));
}

#[test]
fn thirty_records_from_time_zero_exhaust_the_day() {
    let (limiter, clock, _) = limiter_at(0);
    for i in 0..30 {
        clock.set(i * 10_000);
        check_and_record(&limiter);
    }

    clock.set(290_500);
    match limiter.check() {
        RateLimitDecision::DailyExhausted {
            resets_in_ms,
            daily_remaining,
        } => {
            assert_eq!(daily_remaining, 0);
            assert_eq!(resets_in_ms, WINDOW_LENGTH_MS - 290_500);
        }
        other => panic!("expected daily exhaustion, got {other:?}"),
    }
}

#[test]
fn cooldown_never_increases_between_records() {
    let (limiter, clock, _) = limiter_at(T0);
    check_and_record(&limiter);

    let mut previous = u64::MAX;
    for step in 0..=12 {
        clock.set(T0 + step * 1_000);
        let remaining = limiter.remaining_time().cooldown_ms;
        assert!(remaining <= previous);
        previous = remaining;
    }
    assert_eq!(previous, 0);
}

#[test]
fn daily_cap_blocks_after_limit() {
    let (limiter, clock, _) = limiter_at(T0);

    for _ in 0..DAILY_LIMIT {
        check_and_record(&limiter);
        clock.advance(COOLDOWN_PERIOD_MS);
    }

    let decision = limiter.check();
    match decision {
        RateLimitDecision::DailyExhausted {
            resets_in_ms,
            daily_remaining,
        } => {
            assert_eq!(daily_remaining, 0);
            let elapsed = u64::from(DAILY_LIMIT) * COOLDOWN_PERIOD_MS;
            assert_eq!(resets_in_ms, WINDOW_LENGTH_MS - elapsed);
        }
        other => panic!("expected daily exhaustion, got {other:?}"),
    }
    assert_eq!(limiter.snapshot().daily_count, DAILY_LIMIT);
}

#[test]
fn daily_cap_takes_precedence_over_cooldown() {
    let (limiter, clock, store) = limiter_at(T0);
    seed(
        &store,
        RateLimitState {
            count: 30,
            last_generation_timestamp: T0 - 1_000,
            daily_count: 30,
            daily_reset_timestamp: T0 + 60_000,
        },
    );

    let decision = limiter.check();
    assert!(matches!(decision, RateLimitDecision::DailyExhausted { resets_in_ms: 60_000, .. }));

    clock.advance(1);
    assert_eq!(decision_resets_in(&limiter), 59_999);
}

fn decision_resets_in(limiter: &RateLimiter) -> u64 {
    match limiter.check() {
        RateLimitDecision::DailyExhausted { resets_in_ms, .. } => resets_in_ms,
        other => panic!("expected daily exhaustion, got {other:?}"),
    }
}

#[test]
fn expired_window_rolls_over_and_persists() {
    let (limiter, clock, store) = limiter_at(T0);
    seed(
        &store,
        RateLimitState {
            count: 42,
            last_generation_timestamp: T0 - 100_000,
            daily_count: 30,
            daily_reset_timestamp: T0 - 1,
        },
    );

    let decision = limiter.check();
    assert!(decision.is_allowed());
    assert_eq!(decision.daily_remaining(), DAILY_LIMIT);

    let state = limiter.snapshot();
    assert_eq!(state.daily_count, 0);
    assert_eq!(state.count, 42);
    assert_eq!(state.daily_reset_timestamp, T0 + WINDOW_LENGTH_MS);

    clock.advance(1);
    assert_eq!(limiter.snapshot().daily_reset_timestamp, T0 + WINDOW_LENGTH_MS);
}

#[test]
fn window_still_active_at_exact_reset_time() {
    let (limiter, _, store) = limiter_at(T0);
    seed(
        &store,
        RateLimitState {
            count: 30,
            last_generation_timestamp: T0 - 50_000,
            daily_count: 30,
            daily_reset_timestamp: T0,
        },
    );

    assert!(matches!(limiter.check(), RateLimitDecision::DailyExhausted { resets_in_ms: 0, .. }));
}

#[test]
fn remaining_time_rolls_over_expired_window() {
    let (limiter, _, store) = limiter_at(T0);
    seed(
        &store,
        RateLimitState {
            count: 5,
            last_generation_timestamp: T0 - 2_000,
            daily_count: 5,
            daily_reset_timestamp: T0 - 10,
        },
    );

    let remaining = limiter.remaining_time();
    assert_eq!(remaining.cooldown_ms, COOLDOWN_PERIOD_MS - 2_000);
    assert_eq!(remaining.daily_window_ms, WINDOW_LENGTH_MS);
    assert_eq!(limiter.snapshot().daily_count, 0);
}

#[test]
fn check_does_not_record() {
    let (limiter, _, _) = limiter_at(T0);

    for _ in 0..5 {
        assert!(limiter.check().is_allowed());
    }
    assert_eq!(limiter.snapshot().count, 0);
}

#[test]
fn malformed_state_reads_as_fresh() {
    let (limiter, _, store) = limiter_at(T0);

    for raw in [
        "not json",
        r#"{"count":-1,"lastGenerationTimestamp":0,"dailyCount":0,"dailyResetTimestamp":0}"#,
        r#"{"count":1.5,"lastGenerationTimestamp":0,"dailyCount":0,"dailyResetTimestamp":0}"#,
    ] {
        store.set(RATE_LIMIT_KEY, raw).unwrap();
        let decision = limiter.check();
        assert!(decision.is_allowed(), "state {raw} should read as fresh");
        assert_eq!(decision.daily_remaining(), DAILY_LIMIT);
    }
}

#[test]
fn state_is_stored_as_camel_case_json() {
    let (limiter, _, store) = limiter_at(T0);
    check_and_record(&limiter);

    let raw = store.get(RATE_LIMIT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["dailyCount"], 1);
    assert_eq!(value["lastGenerationTimestamp"], T0);
    assert_eq!(value["dailyResetTimestamp"], T0 + WINDOW_LENGTH_MS);
}

#[test]
fn state_survives_restart_with_file_store() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("profile.json");
    let clock = Arc::new(ManualClock::new(T0));

    let first = RateLimiter::new(Arc::new(FileKeyValueStore::new(&path)?), clock.clone());
    check_and_record(&first);
    drop(first);

    clock.advance(3_000);
    let second = RateLimiter::new(Arc::new(FileKeyValueStore::new(&path)?), clock);
    assert_eq!(second.check().remaining_cooldown_ms(), Some(7_000));
    Ok(())
}

#[test]
fn corrupt_profile_file_heals_on_first_record() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "[]")?;
    let clock = Arc::new(ManualClock::new(T0));
    let limiter = RateLimiter::new(Arc::new(FileKeyValueStore::new(&path)?), clock);

    let mut allowed = 0;
    for _ in 0..50 {
        if let RateLimitDecision::Allowed { permit, .. } = limiter.check() {
            limiter.record(permit);
            allowed += 1;
        }
    }

    assert_eq!(allowed, 1);
    assert_eq!(limiter.snapshot().daily_count, 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("profile.json.corrupt"))?,
        "[]"
    );
    Ok(())
}

#[test]
fn custom_policy_is_honoured() {
    let clock = Arc::new(ManualClock::new(T0));
    let limiter = RateLimiter::with_policy(
        Arc::new(MemoryKeyValueStore::new()),
        clock.clone(),
        RateLimitPolicy::new(100, 2, 1_000),
    );

    check_and_record(&limiter);
    clock.advance(100);
    check_and_record(&limiter);
    clock.advance(100);
    assert!(matches!(limiter.check(), RateLimitDecision::DailyExhausted { .. }));

    clock.advance(1_000);
    assert!(limiter.check().is_allowed());
}

#[test]
fn concurrent_records_are_not_lost() {
    let clock = Arc::new(ManualClock::new(T0));
    let limiter = Arc::new(RateLimiter::with_policy(
        Arc::new(MemoryKeyValueStore::new()),
        clock,
        RateLimitPolicy::new(0, 1_000, WINDOW_LENGTH_MS),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let limiter = limiter.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    if let Some(permit) = limiter.check().into_permit() {
                        limiter.record(permit);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(limiter.snapshot().count, 80);
}
