//! The prompt composer.

use crate::canned::{CANNED_SOURCES, CannedTemplate, canned_id};
use crate::prompts::prompt_sources;
use crate::{Template, TemplateContext, parse_response};
use gmb_writer_core::{
    BusinessInfo, ContentBody, ContentKind, ContentType, GeneratedContent, GenerationRequest,
    Language, PostKind, ReviewKind, Tone,
};
use gmb_writer_error::GmbResult;
use std::collections::HashMap;

/// Builds prompts and canned content from validated templates.
///
/// Construction parses every template; after that, composition cannot fail.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::{BusinessInfo, Language, PostKind, Tone};
/// use gmb_writer_prompt::PromptComposer;
///
/// let composer = PromptComposer::new().unwrap();
/// let business = BusinessInfo::builder()
///     .name("Padaria Central")
///     .category("Bakery")
///     .address("Av. Brasil, 500")
///     .build()
///     .unwrap();
///
/// let prompt = composer.build_post_prompt(&business, PostKind::Offer, Tone::Promotional, Language::EnUs);
/// assert!(prompt.contains("- Business Name: Padaria Central"));
/// assert!(prompt.contains("- Phone: N/A"));
/// assert!(prompt.contains("Language: English (US) (en-US)"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptComposer {
    prompts: HashMap<ContentType, Template>,
    canned: HashMap<&'static str, CannedTemplate>,
}

impl PromptComposer {
    /// Parse and validate all prompt and canned templates.
    ///
    /// # Errors
    ///
    /// Returns a prompt error naming the first template with an undeclared
    /// field or an unterminated placeholder.
    #[tracing::instrument]
    pub fn new() -> GmbResult<Self> {
        let prompts = prompt_sources()
            .into_iter()
            .map(|(content_type, source)| {
                Template::parse(format!("prompt.{content_type}"), source)
                    .map(|template| (content_type, template))
            })
            .collect::<GmbResult<HashMap<_, _>>>()?;

        let canned = CANNED_SOURCES
            .iter()
            .map(|(id, source)| CannedTemplate::parse(id, source).map(|template| (*id, template)))
            .collect::<GmbResult<HashMap<_, _>>>()?;

        tracing::debug!(
            prompts = prompts.len(),
            canned = canned.len(),
            "Parsed prompt templates"
        );
        Ok(Self { prompts, canned })
    }

    /// Prompt asking for three listing posts.
    pub fn build_post_prompt(
        &self,
        business: &BusinessInfo,
        post_kind: PostKind,
        tone: Tone,
        language: Language,
    ) -> String {
        self.compose(&GenerationRequest::new(
            ContentKind::Post { kind: post_kind },
            business.clone(),
            tone,
            language,
        ))
    }

    /// Prompt asking for one business description, default tone, no highlights.
    pub fn build_description_prompt(&self, business: &BusinessInfo, language: Language) -> String {
        self.compose(&GenerationRequest::new(
            ContentKind::Description { highlights: vec![] },
            business.clone(),
            Tone::default(),
            language,
        ))
    }

    /// Prompt asking for one reply to `review_text`.
    pub fn build_review_reply_prompt(
        &self,
        business: &BusinessInfo,
        review_text: &str,
        language: Language,
    ) -> String {
        self.compose(&GenerationRequest::new(
            ContentKind::ReviewReply {
                review_kind: ReviewKind::default(),
                review_text: review_text.to_string(),
            },
            business.clone(),
            Tone::default(),
            language,
        ))
    }

    /// Prompt asking for five Q&A pairs on the default topics.
    pub fn build_qa_prompt(&self, business: &BusinessInfo, language: Language) -> String {
        self.compose(&GenerationRequest::new(
            ContentKind::Qa { topics: vec![] },
            business.clone(),
            Tone::default(),
            language,
        ))
    }

    /// Prompt for any request, including tone and per-type extras.
    #[tracing::instrument(skip(self, request), fields(content_type = %request.content_type()))]
    pub fn compose(&self, request: &GenerationRequest) -> String {
        let context = TemplateContext::new(request);
        match self.prompts.get(&request.content_type()) {
            Some(template) => template.render(&context),
            // Unreachable once `new` succeeded: every content type has a prompt
            None => String::new(),
        }
    }

    /// Canned example content for `request`.
    #[tracing::instrument(skip(self, request), fields(content_type = %request.content_type()))]
    pub fn canned(&self, request: &GenerationRequest) -> GeneratedContent {
        let content_type = request.content_type();
        let id = canned_id(request);

        let body = match self.canned.get(id.as_str()) {
            Some(template) => template.render(&TemplateContext::new(request)),
            None => {
                tracing::warn!(%id, "No canned content for request");
                ContentBody::Placeholder(request.language.empty_result_placeholder().to_string())
            }
        };

        GeneratedContent::example(content_type, body)
    }

    /// See [`parse_response`].
    pub fn parse_response(
        &self,
        content_type: ContentType,
        text: &str,
        language: Language,
    ) -> ContentBody {
        parse_response(content_type, text, language)
    }
}
