//! Content types and generated results.

use crate::Language;
use serde::{Deserialize, Serialize};

/// The four kinds of listing content that can be generated.
///
/// Each type has its own prompt shape and response-parsing convention.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentType {
    /// Listing posts (updates, offers, events)
    Post,
    /// Business description
    Description,
    /// Reply to a customer review
    ReviewReply,
    /// Frequently asked questions with answers
    Qa,
}

impl ContentType {
    /// Whether the model is asked for several `---` separated variants.
    pub fn is_multi_variant(&self) -> bool {
        matches!(self, ContentType::Post | ContentType::Qa)
    }
}

/// Flavour of listing post.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostKind {
    /// General news about the business
    #[default]
    Update,
    /// Promotion or discount
    Offer,
    /// Upcoming event
    Event,
}

impl PostKind {
    /// Plural label for this post kind in the given language.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmb_writer_core::{Language, PostKind};
    ///
    /// assert_eq!(PostKind::Offer.label(Language::PtBr), "ofertas");
    /// assert_eq!(PostKind::Update.label(Language::EsEs), "actualizaciones");
    /// ```
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::PtBr, PostKind::Update) => "atualizações",
            (Language::PtBr, PostKind::Offer) => "ofertas",
            (Language::PtBr, PostKind::Event) => "eventos",
            (Language::EnUs, PostKind::Update) => "updates",
            (Language::EnUs, PostKind::Offer) => "offers",
            (Language::EnUs, PostKind::Event) => "events",
            (Language::EsEs, PostKind::Update) => "actualizaciones",
            (Language::EsEs, PostKind::Offer) => "ofertas",
            (Language::EsEs, PostKind::Event) => "eventos",
        }
    }
}

/// Sentiment of the review being replied to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReviewKind {
    /// Praise
    Positive,
    /// Complaint
    Negative,
    /// Customer asked something
    Question,
    /// Anything else
    #[default]
    General,
}

impl ReviewKind {
    /// Label for this review kind in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::PtBr, ReviewKind::Positive) => "positiva",
            (Language::PtBr, ReviewKind::Negative) => "negativa",
            (Language::PtBr, ReviewKind::Question) => "pergunta",
            (Language::PtBr, ReviewKind::General) => "geral",
            (Language::EnUs, ReviewKind::Positive) => "positive",
            (Language::EnUs, ReviewKind::Negative) => "negative",
            (Language::EnUs, ReviewKind::Question) => "question",
            (Language::EnUs, ReviewKind::General) => "general",
            (Language::EsEs, ReviewKind::Positive) => "positiva",
            (Language::EsEs, ReviewKind::Negative) => "negativa",
            (Language::EsEs, ReviewKind::Question) => "pregunta",
            (Language::EsEs, ReviewKind::General) => "general",
        }
    }
}

/// One question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaPair {
    /// The question a customer might ask
    pub question: String,
    /// The business's answer
    pub answer: String,
}

impl QaPair {
    /// Creates a pair from anything string-like.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Where a generated result came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentSource {
    /// Produced by the generative API
    Live,
    /// Canned example text
    Example,
}

/// Shaped result of a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContentBody {
    /// Several alternative texts (posts)
    Variants(Vec<String>),
    /// A single text (descriptions, review replies)
    Text(String),
    /// Question/answer pairs
    QuestionsAndAnswers(Vec<QaPair>),
    /// The API answered but nothing usable could be extracted
    Placeholder(String),
}

impl ContentBody {
    /// Each displayable block as plain text, in order.
    ///
    /// Q&A pairs render as `Question: …\nAnswer: …`.
    pub fn blocks(&self) -> Vec<String> {
        match self {
            ContentBody::Variants(items) => items.clone(),
            ContentBody::Text(text) | ContentBody::Placeholder(text) => vec![text.clone()],
            ContentBody::QuestionsAndAnswers(pairs) => pairs
                .iter()
                .map(|pair| format!("Question: {}\nAnswer: {}", pair.question, pair.answer))
                .collect(),
        }
    }

    /// Whether this body is the empty-result placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ContentBody::Placeholder(_))
    }
}

/// A generation result ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// What was generated
    pub content_type: ContentType,
    /// The shaped result
    pub body: ContentBody,
    /// Live API output or canned example
    pub source: ContentSource,
}

impl GeneratedContent {
    /// Content produced by the generative API.
    pub fn live(content_type: ContentType, body: ContentBody) -> Self {
        Self {
            content_type,
            body,
            source: ContentSource::Live,
        }
    }

    /// Canned example content.
    pub fn example(content_type: ContentType, body: ContentBody) -> Self {
        Self {
            content_type,
            body,
            source: ContentSource::Example,
        }
    }

    /// Whether this is canned example data.
    pub fn is_example(&self) -> bool {
        self.source == ContentSource::Example
    }
}
