//! Template field schema and value lookup.

use gmb_writer_core::{ContentKind, GenerationRequest};
use std::borrow::Cow;

/// Rendered in place of blank optional values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Q&A topics used when the request names none.
pub const DEFAULT_QA_TOPICS: &str =
    "business hours, services offered, pricing, location, parking, accessibility";

/// Every placeholder a template may reference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TemplateField {
    /// Business name
    BusinessName,
    /// Business name in upper case, for shouty headlines
    BusinessNameUpper,
    /// Business category
    Category,
    /// Website, or N/A
    Website,
    /// Street address
    Address,
    /// Phone, or N/A
    Phone,
    /// Opening hours, or N/A
    Hours,
    /// Tone identifier (`friendly`, `promotional`, ...)
    Tone,
    /// Human-readable language name
    LanguageLabel,
    /// BCP 47 language tag
    LanguageCode,
    /// Post kind identifier (`update`, `offer`, `event`)
    PostKind,
    /// Post kind in the output language
    PostKindLabel,
    /// Review sentiment in the output language
    ReviewKindLabel,
    /// Text of the review being answered
    ReviewText,
    /// Description highlights, comma separated, or N/A
    Highlights,
    /// Q&A topics, comma separated, or the default topic list
    Topics,
}

/// Supplies field values for one request.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    request: &'a GenerationRequest,
}

impl<'a> TemplateContext<'a> {
    /// Context for `request`.
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Value substituted for `field`.
    ///
    /// Fields that do not apply to the request's content type render as
    /// N/A.
    pub fn value(&self, field: TemplateField) -> Cow<'a, str> {
        let request = self.request;
        let business = &request.business;
        let language = request.language;

        match field {
            TemplateField::BusinessName => Cow::Borrowed(business.name().trim()),
            TemplateField::BusinessNameUpper => Cow::Owned(business.name().trim().to_uppercase()),
            TemplateField::Category => Cow::Borrowed(business.category().trim()),
            TemplateField::Address => Cow::Borrowed(business.address().trim()),
            TemplateField::Website => or_not_available(business.website()),
            TemplateField::Phone => or_not_available(business.phone()),
            TemplateField::Hours => or_not_available(business.hours()),
            TemplateField::Tone => Cow::Borrowed(request.tone.as_ref()),
            TemplateField::LanguageLabel => Cow::Borrowed(language.label()),
            TemplateField::LanguageCode => Cow::Borrowed(language.code()),
            TemplateField::PostKind => match &request.content {
                ContentKind::Post { kind } => Cow::Borrowed(kind.as_ref()),
                _ => Cow::Borrowed(NOT_AVAILABLE),
            },
            TemplateField::PostKindLabel => match &request.content {
                ContentKind::Post { kind } => Cow::Borrowed(kind.label(language)),
                _ => Cow::Borrowed(NOT_AVAILABLE),
            },
            TemplateField::ReviewKindLabel => match &request.content {
                ContentKind::ReviewReply { review_kind, .. } => {
                    Cow::Borrowed(review_kind.label(language))
                }
                _ => Cow::Borrowed(NOT_AVAILABLE),
            },
            TemplateField::ReviewText => match &request.content {
                ContentKind::ReviewReply { review_text, .. } => Cow::Borrowed(review_text.as_str()),
                _ => Cow::Borrowed(NOT_AVAILABLE),
            },
            TemplateField::Highlights => match &request.content {
                ContentKind::Description { highlights } => {
                    join_or(highlights, Cow::Borrowed(NOT_AVAILABLE))
                }
                _ => Cow::Borrowed(NOT_AVAILABLE),
            },
            TemplateField::Topics => match &request.content {
                ContentKind::Qa { topics } => join_or(topics, Cow::Borrowed(DEFAULT_QA_TOPICS)),
                _ => Cow::Borrowed(DEFAULT_QA_TOPICS),
            },
        }
    }
}

fn or_not_available(value: &str) -> Cow<'_, str> {
    let value = value.trim();
    if value.is_empty() {
        Cow::Borrowed(NOT_AVAILABLE)
    } else {
        Cow::Borrowed(value)
    }
}

fn join_or<'a>(items: &[String], fallback: Cow<'a, str>) -> Cow<'a, str> {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        fallback
    } else {
        Cow::Owned(items.join(", "))
    }
}
