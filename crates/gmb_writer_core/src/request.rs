//! Generation requests.

use crate::{BusinessInfo, ContentType, Language, PostKind, ReviewKind, Tone};
use serde::{Deserialize, Serialize};

/// Content type together with its type-specific inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentKind {
    /// Listing posts of the given kind
    Post {
        /// Update, offer or event
        kind: PostKind,
    },
    /// Business description
    Description {
        /// Key features to highlight
        #[serde(default)]
        highlights: Vec<String>,
    },
    /// Reply to a customer review
    ReviewReply {
        /// Sentiment of the review
        #[serde(default)]
        review_kind: ReviewKind,
        /// The review text being answered
        review_text: String,
    },
    /// FAQ entries
    Qa {
        /// Topics the questions should cover
        #[serde(default)]
        topics: Vec<String>,
    },
}

impl ContentKind {
    /// The content type this kind belongs to.
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentKind::Post { .. } => ContentType::Post,
            ContentKind::Description { .. } => ContentType::Description,
            ContentKind::ReviewReply { .. } => ContentType::ReviewReply,
            ContentKind::Qa { .. } => ContentType::Qa,
        }
    }
}

/// Everything needed to generate one piece of content.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::{
///     BusinessInfo, ContentKind, ContentType, GenerationRequest, Language, PostKind, Tone,
/// };
///
/// let request = GenerationRequest::new(
///     ContentKind::Post { kind: PostKind::Offer },
///     BusinessInfo::default(),
///     Tone::Promotional,
///     Language::EnUs,
/// );
/// assert_eq!(request.content_type(), ContentType::Post);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What to generate
    pub content: ContentKind,
    /// Facts about the business
    pub business: BusinessInfo,
    /// Requested tone
    pub tone: Tone,
    /// Output language
    pub language: Language,
}

impl GenerationRequest {
    /// Creates a request.
    pub fn new(content: ContentKind, business: BusinessInfo, tone: Tone, language: Language) -> Self {
        Self {
            content,
            business,
            tone,
            language,
        }
    }

    /// Shorthand for `self.content.content_type()`.
    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }
}
