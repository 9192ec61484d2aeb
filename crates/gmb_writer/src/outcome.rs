//! Dispatch outcomes and the notices they produce.

use gmb_writer_core::{ContentType, GeneratedContent};
use gmb_writer_rate_limit::DAILY_LIMIT;
use serde::Serialize;

/// Why the limiter turned a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RateLimitRejection {
    /// Too soon after the previous generation
    Cooldown {
        /// Milliseconds until the cooldown ends
        remaining_ms: u64,
        /// Generations left today
        daily_remaining: u32,
    },
    /// Daily cap reached
    DailyExhausted {
        /// Milliseconds until the window resets
        resets_in_ms: u64,
    },
}

/// Result of one [`ContentDispatcher::generate`](crate::ContentDispatcher::generate) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Required business fields are blank; nothing was attempted.
    Incomplete {
        /// Names of the blank fields
        missing: Vec<&'static str>,
    },
    /// A request for the same content type is already running.
    Busy {
        /// The content type in flight
        content_type: ContentType,
    },
    /// The rate limiter refused the request.
    RateLimited {
        /// Cooldown or daily cap
        rejection: RateLimitRejection,
    },
    /// No API key is configured; canned content was returned and counted.
    Example {
        /// Canned content
        content: GeneratedContent,
    },
    /// The API produced content and the generation was counted.
    Live {
        /// Parsed API output
        content: GeneratedContent,
    },
    /// The API call failed; canned content is returned and nothing counted.
    Failed {
        /// Canned fallback content
        content: GeneratedContent,
        /// What went wrong, suitable for display
        error: String,
    },
}

impl GenerationOutcome {
    /// Content to show, if any.
    pub fn content(&self) -> Option<&GeneratedContent> {
        match self {
            GenerationOutcome::Example { content }
            | GenerationOutcome::Live { content }
            | GenerationOutcome::Failed { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Whether this outcome consumed quota.
    pub fn counted(&self) -> bool {
        matches!(
            self,
            GenerationOutcome::Example { .. } | GenerationOutcome::Live { .. }
        )
    }

    /// User-facing notice describing this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            GenerationOutcome::Incomplete { missing } => Notice::new(
                NoticeLevel::Warning,
                "Missing business information",
                format!("Please fill in: {}.", missing.join(", ")),
            ),
            GenerationOutcome::Busy { content_type } => Notice::new(
                NoticeLevel::Warning,
                "Generation in progress",
                format!("A {content_type} generation is already running. Please wait for it to finish."),
            ),
            GenerationOutcome::RateLimited {
                rejection: RateLimitRejection::Cooldown { remaining_ms, .. },
            } => Notice::new(
                NoticeLevel::Info,
                "Please wait",
                format!(
                    "You can generate new content in {} seconds.",
                    remaining_ms.div_ceil(1_000)
                ),
            ),
            GenerationOutcome::RateLimited {
                rejection: RateLimitRejection::DailyExhausted { resets_in_ms },
            } => Notice::new(
                NoticeLevel::Warning,
                "Daily limit reached",
                format!(
                    "You have reached the limit of {DAILY_LIMIT} generations per day. Try again in {} hours.",
                    resets_in_ms.div_ceil(3_600_000)
                ),
            ),
            GenerationOutcome::Example { .. } => Notice::new(
                NoticeLevel::Info,
                "Example generated",
                "Configure your Gemini API key for richer, personalized content.",
            ),
            GenerationOutcome::Live { content } => Notice::new(
                NoticeLevel::Success,
                "Content generated",
                format!("Your {} content is ready.", content.content_type),
            ),
            GenerationOutcome::Failed { error, .. } => Notice::new(
                NoticeLevel::Error,
                "Generation failed",
                format!(
                    "{}. Showing example content instead.",
                    error.trim_end_matches('.')
                ),
            ),
        }
    }
}

/// Severity of a [`Notice`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    /// Neutral information
    Info,
    /// Something worked
    Success,
    /// Nothing happened, user action may help
    Warning,
    /// Something failed
    Error,
}

/// Short message shown to the user after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// One-line headline
    pub title: String,
    /// Details
    pub description: String,
}

impl Notice {
    /// Creates a notice.
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }
}
