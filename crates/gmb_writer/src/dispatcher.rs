//! End-to-end generation flow.

use crate::{GenerationOutcome, Notifier, RateLimitRejection};
use gmb_writer_core::{ContentType, GeneratedContent, GenerationRequest};
use gmb_writer_models::GenerativeBackend;
use gmb_writer_prompt::PromptComposer;
use gmb_writer_rate_limit::{RateLimitDecision, RateLimiter};
use gmb_writer_storage::ProfileStore;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Pause before returning canned content when no API key is set.
pub const DEFAULT_EXAMPLE_DELAY: Duration = Duration::from_millis(1000);

type InFlight = Arc<Mutex<HashSet<ContentType>>>;

/// Marks a content type as in flight until dropped.
struct InFlightGuard {
    in_flight: InFlight,
    content_type: ContentType,
}

impl InFlightGuard {
    /// `None` if the content type is already in flight.
    fn acquire(in_flight: &InFlight, content_type: ContentType) -> Option<Self> {
        let inserted = in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(content_type);
        inserted.then(|| Self {
            in_flight: Arc::clone(in_flight),
            content_type,
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.content_type);
    }
}

/// Runs generation requests against the limiter, the backend and the
/// canned fallback.
///
/// One request per content type may be in flight at a time; a second one
/// is rejected with [`GenerationOutcome::Busy`] rather than queued.
/// `generate` never returns an error: every failure maps to an outcome and
/// a notice.
pub struct ContentDispatcher {
    limiter: Arc<RateLimiter>,
    composer: PromptComposer,
    backend: Arc<dyn GenerativeBackend>,
    profile: ProfileStore,
    notifier: Arc<dyn Notifier>,
    example_delay: Duration,
    in_flight: InFlight,
}

impl std::fmt::Debug for ContentDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDispatcher")
            .field("limiter", &self.limiter)
            .field("backend", &self.backend.provider_name())
            .field("example_delay", &self.example_delay)
            .finish_non_exhaustive()
    }
}

impl ContentDispatcher {
    /// Wire a dispatcher together.
    pub fn new(
        limiter: Arc<RateLimiter>,
        composer: PromptComposer,
        backend: Arc<dyn GenerativeBackend>,
        profile: ProfileStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            limiter,
            composer,
            backend,
            profile,
            notifier,
            example_delay: DEFAULT_EXAMPLE_DELAY,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Override the pause before canned content is returned.
    pub fn with_example_delay(mut self, delay: Duration) -> Self {
        self.example_delay = delay;
        self
    }

    /// The limiter guarding this dispatcher.
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Content types currently being generated.
    pub fn in_flight(&self) -> Vec<ContentType> {
        let mut types: Vec<_> = self
            .in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .copied()
            .collect();
        types.sort();
        types
    }

    /// Generate content for `request` and notify the outcome.
    #[instrument(skip(self, request), fields(content_type = %request.content_type(), language = %request.language))]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let outcome = self.dispatch(request).await;
        self.notifier.notify(&outcome.notice());
        outcome
    }

    async fn dispatch(&self, request: &GenerationRequest) -> GenerationOutcome {
        let content_type = request.content_type();

        let missing = request.business.missing_required_fields();
        if !missing.is_empty() {
            debug!(?missing, "Required business fields are blank");
            return GenerationOutcome::Incomplete { missing };
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, content_type) else {
            debug!("Generation already in flight");
            return GenerationOutcome::Busy { content_type };
        };

        let permit = match self.limiter.check() {
            RateLimitDecision::Allowed { permit, .. } => permit,
            RateLimitDecision::Cooldown {
                remaining_ms,
                daily_remaining,
            } => {
                return GenerationOutcome::RateLimited {
                    rejection: RateLimitRejection::Cooldown {
                        remaining_ms,
                        daily_remaining,
                    },
                };
            }
            RateLimitDecision::DailyExhausted { resets_in_ms, .. } => {
                return GenerationOutcome::RateLimited {
                    rejection: RateLimitRejection::DailyExhausted { resets_in_ms },
                };
            }
        };

        let api_key = self.profile.api_key().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read API key, falling back to examples");
            None
        });

        let Some(api_key) = api_key else {
            debug!(delay = ?self.example_delay, "No API key, serving example");
            tokio::time::sleep(self.example_delay).await;
            let content = self.composer.canned(request);
            self.limiter.record(permit);
            return GenerationOutcome::Example { content };
        };

        let prompt = self.composer.compose(request);
        match self.backend.generate(&api_key, &prompt).await {
            Ok(text) => {
                let body = self
                    .composer
                    .parse_response(content_type, &text, request.language);
                self.limiter.record(permit);
                info!(provider = self.backend.provider_name(), "Generated live content");
                GenerationOutcome::Live {
                    content: GeneratedContent::live(content_type, body),
                }
            }
            Err(e) => {
                // Failed calls never count against the quota
                drop(permit);
                warn!(error = %e, "Generation failed, serving example");
                GenerationOutcome::Failed {
                    content: self.composer.canned(request),
                    error: e.user_message(),
                }
            }
        }
    }
}
