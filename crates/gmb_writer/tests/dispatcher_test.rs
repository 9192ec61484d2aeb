//! End-to-end tests for the content dispatcher with a scripted backend.

use async_trait::async_trait;
use gmb_writer::{
    BusinessInfo, ContentBody, ContentDispatcher, ContentKind, ContentSource, ContentType,
    GeminiError, GeminiErrorKind, GenerationOutcome, GenerationRequest, GenerativeBackend,
    GmbResult, KeyValueStore, Language, ManualClock, MemoryKeyValueStore, Notice, NoticeLevel,
    Notifier, PostKind, ProfileStore, PromptComposer, RateLimitRejection, RateLimitState,
    RateLimiter, Tone, WINDOW_LENGTH_MS,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

const T0: u64 = 1_700_000_000_000;

/// Replies from a queue and remembers what it was asked.
#[derive(Default)]
struct ScriptedBackend {
    replies: Mutex<VecDeque<GmbResult<String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    fn replying(replies: Vec<GmbResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, api_key: &str, prompt: &str) -> GmbResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("default reply".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

/// Blocks every call until released.
#[derive(Default)]
struct GatedBackend {
    started: Notify,
    release: Notify,
}

#[async_trait]
impl GenerativeBackend for GatedBackend {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> GmbResult<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok("Gated post".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }

    fn model_name(&self) -> &str {
        "gated-1"
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

struct Harness {
    dispatcher: ContentDispatcher,
    store: Arc<MemoryKeyValueStore>,
    clock: Arc<ManualClock>,
    limiter: Arc<RateLimiter>,
    notifier: Arc<RecordingNotifier>,
}

fn harness(backend: Arc<dyn GenerativeBackend>) -> Harness {
    let store = Arc::new(MemoryKeyValueStore::new());
    let clock = Arc::new(ManualClock::new(T0));
    let limiter = Arc::new(RateLimiter::new(store.clone(), clock.clone()));
    let notifier = Arc::new(RecordingNotifier::default());
    let dispatcher = ContentDispatcher::new(
        limiter.clone(),
        PromptComposer::new().unwrap(),
        backend,
        ProfileStore::new(store.clone()),
        notifier.clone(),
    )
    .with_example_delay(Duration::ZERO);

    Harness {
        dispatcher,
        store,
        clock,
        limiter,
        notifier,
    }
}

impl Harness {
    fn with_api_key(self) -> Self {
        ProfileStore::new(self.store.clone())
            .set_api_key("test-key")
            .unwrap();
        self
    }
}

fn business() -> BusinessInfo {
    BusinessInfo::builder()
        .name("Padaria Central")
        .category("Bakery")
        .address("Av. Brasil, 500")
        .build()
        .unwrap()
}

fn post_request() -> GenerationRequest {
    GenerationRequest::new(
        ContentKind::Post {
            kind: PostKind::Offer,
        },
        business(),
        Tone::Promotional,
        Language::EnUs,
    )
}

fn upstream_error() -> GmbResult<String> {
    Err(GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 400,
        message: "API key not valid".to_string(),
    })
    .into())
}

#[tokio::test]
async fn incomplete_business_is_rejected_before_rate_limiting() {
    let backend = Arc::new(ScriptedBackend::default());
    let h = harness(backend.clone()).with_api_key();
    let request = GenerationRequest::new(
        ContentKind::Qa { topics: vec![] },
        BusinessInfo::builder().name("Only a name").build().unwrap(),
        Tone::Helpful,
        Language::PtBr,
    );

    let outcome = h.dispatcher.generate(&request).await;

    assert_eq!(
        outcome,
        GenerationOutcome::Incomplete {
            missing: vec!["category", "address"]
        }
    );
    assert!(backend.calls().is_empty());
    assert_eq!(h.limiter.snapshot().count, 0);
    assert_eq!(outcome.notice().level, NoticeLevel::Warning);
}

#[tokio::test]
async fn missing_key_serves_counted_example() {
    let backend = Arc::new(ScriptedBackend::default());
    let h = harness(backend.clone());

    let outcome = h.dispatcher.generate(&post_request()).await;

    let GenerationOutcome::Example { content } = &outcome else {
        panic!("expected example outcome, got {outcome:?}");
    };
    assert_eq!(content.source, ContentSource::Example);
    assert_eq!(content.content_type, ContentType::Post);
    assert!(backend.calls().is_empty());
    assert_eq!(h.limiter.snapshot().daily_count, 1);
    assert!(outcome.counted());
}

#[tokio::test(start_paused = true)]
async fn example_path_waits_default_delay() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let limiter = Arc::new(RateLimiter::new(
        store.clone(),
        Arc::new(ManualClock::new(T0)),
    ));
    let dispatcher = ContentDispatcher::new(
        limiter,
        PromptComposer::new().unwrap(),
        Arc::new(ScriptedBackend::default()),
        ProfileStore::new(store),
        Arc::new(RecordingNotifier::default()),
    );

    let started = tokio::time::Instant::now();
    let outcome = dispatcher.generate(&post_request()).await;

    assert!(matches!(outcome, GenerationOutcome::Example { .. }));
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn live_success_parses_and_records() {
    let backend = Arc::new(ScriptedBackend::replying(vec![Ok(
        "Offer one\n---\nOffer two\n---\nOffer three".to_string(),
    )]));
    let h = harness(backend.clone()).with_api_key();

    let outcome = h.dispatcher.generate(&post_request()).await;

    let GenerationOutcome::Live { content } = &outcome else {
        panic!("expected live outcome, got {outcome:?}");
    };
    assert_eq!(
        content.body,
        ContentBody::Variants(vec![
            "Offer one".to_string(),
            "Offer two".to_string(),
            "Offer three".to_string()
        ])
    );

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "test-key");
    assert!(calls[0].1.contains("- Business Name: Padaria Central"));
    assert!(calls[0].1.contains("Language: English (US) (en-US)"));

    let state = h.limiter.snapshot();
    assert_eq!(state.count, 1);
    assert_eq!(state.last_generation_timestamp, T0);
    assert_eq!(outcome.notice().level, NoticeLevel::Success);
}

#[tokio::test]
async fn failed_call_consumes_no_quota_and_falls_back() {
    let backend = Arc::new(ScriptedBackend::replying(vec![upstream_error()]));
    let h = harness(backend).with_api_key();
    let seeded = RateLimitState {
        count: 3,
        last_generation_timestamp: T0 - 60_000,
        daily_count: 3,
        daily_reset_timestamp: T0 + WINDOW_LENGTH_MS / 2,
    };
    h.store
        .set("rateLimits", &serde_json::to_string(&seeded).unwrap())
        .unwrap();

    let request = post_request();
    let outcome = h.dispatcher.generate(&request).await;

    let GenerationOutcome::Failed { content, error } = &outcome else {
        panic!("expected failed outcome, got {outcome:?}");
    };
    let expected = PromptComposer::new().unwrap().canned(&request);
    assert_eq!(content, &expected);
    assert_eq!(error, "API error: API key not valid");
    assert_eq!(h.limiter.snapshot(), seeded);
    assert!(!outcome.counted());

    let notice = outcome.notice();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.description.contains("API key not valid"));
}

#[tokio::test]
async fn failure_releases_the_in_flight_slot() {
    let backend = Arc::new(ScriptedBackend::replying(vec![
        upstream_error(),
        Ok("Recovered".to_string()),
    ]));
    let h = harness(backend).with_api_key();

    assert!(matches!(
        h.dispatcher.generate(&post_request()).await,
        GenerationOutcome::Failed { .. }
    ));
    assert!(h.dispatcher.in_flight().is_empty());
    assert!(matches!(
        h.dispatcher.generate(&post_request()).await,
        GenerationOutcome::Live { .. }
    ));
}

#[tokio::test]
async fn cooldown_rejects_until_elapsed() {
    let backend = Arc::new(ScriptedBackend::default());
    let h = harness(backend.clone()).with_api_key();

    h.dispatcher.generate(&post_request()).await;
    h.clock.advance(4_000);
    let outcome = h.dispatcher.generate(&post_request()).await;

    assert_eq!(
        outcome,
        GenerationOutcome::RateLimited {
            rejection: RateLimitRejection::Cooldown {
                remaining_ms: 6_000,
                daily_remaining: 29,
            }
        }
    );
    assert_eq!(backend.calls().len(), 1);
    assert!(outcome.notice().description.contains("6 seconds"));

    h.clock.advance(6_000);
    assert!(matches!(
        h.dispatcher.generate(&post_request()).await,
        GenerationOutcome::Live { .. }
    ));
}

#[tokio::test]
async fn daily_exhaustion_has_its_own_notice() {
    let backend = Arc::new(ScriptedBackend::default());
    let h = harness(backend.clone()).with_api_key();
    let exhausted = RateLimitState {
        count: 30,
        last_generation_timestamp: T0 - 60_000,
        daily_count: 30,
        daily_reset_timestamp: T0 + 5 * 3_600_000 - 1,
    };
    h.store
        .set("rateLimits", &serde_json::to_string(&exhausted).unwrap())
        .unwrap();

    let outcome = h.dispatcher.generate(&post_request()).await;
    let daily = outcome.notice();
    assert!(matches!(
        outcome,
        GenerationOutcome::RateLimited {
            rejection: RateLimitRejection::DailyExhausted { .. }
        }
    ));
    assert!(backend.calls().is_empty());

    let cooldown = GenerationOutcome::RateLimited {
        rejection: RateLimitRejection::Cooldown {
            remaining_ms: 1_000,
            daily_remaining: 10,
        },
    }
    .notice();

    assert_eq!(daily.title, "Daily limit reached");
    assert!(daily.description.contains("30 generations per day"));
    assert!(daily.description.contains("5 hours"));
    assert_ne!(daily.title, cooldown.title);
    assert_ne!(daily.level, cooldown.level);
}

#[tokio::test]
async fn empty_response_still_counts() {
    let backend = Arc::new(ScriptedBackend::replying(vec![Ok("  \n ".to_string())]));
    let h = harness(backend).with_api_key();
    let request = GenerationRequest::new(
        ContentKind::Description { highlights: vec![] },
        business(),
        Tone::Friendly,
        Language::EsEs,
    );

    let outcome = h.dispatcher.generate(&request).await;

    let GenerationOutcome::Live { content } = outcome else {
        panic!("expected live outcome");
    };
    assert_eq!(
        content.body,
        ContentBody::Placeholder(Language::EsEs.empty_result_placeholder().to_string())
    );
    assert_eq!(h.limiter.snapshot().count, 1);
}

#[tokio::test]
async fn same_type_in_flight_is_busy() {
    let backend = Arc::new(GatedBackend::default());
    let h = harness(backend.clone()).with_api_key();
    let request = post_request();

    let first = h.dispatcher.generate(&request);
    let second = async {
        backend.started.notified().await;
        let outcome = h.dispatcher.generate(&request).await;
        backend.release.notify_one();
        outcome
    };
    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first, GenerationOutcome::Live { .. }));
    assert_eq!(
        second,
        GenerationOutcome::Busy {
            content_type: ContentType::Post
        }
    );
    assert!(h.dispatcher.in_flight().is_empty());
    assert_eq!(h.limiter.snapshot().count, 1);
}

#[tokio::test]
async fn every_outcome_is_notified() {
    let backend = Arc::new(ScriptedBackend::default());
    let h = harness(backend).with_api_key();

    h.dispatcher.generate(&post_request()).await;
    h.dispatcher.generate(&post_request()).await;

    let titles: Vec<String> = h
        .notifier
        .notices()
        .into_iter()
        .map(|notice| notice.title)
        .collect();
    assert_eq!(titles, vec!["Content generated", "Please wait"]);
}
