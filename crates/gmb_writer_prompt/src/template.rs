//! `{{field}}` template parsing and rendering.

use crate::{TemplateContext, TemplateField};
use gmb_writer_error::{GmbResult, PromptError, PromptErrorKind};
use std::str::FromStr;

const PLACEHOLDER_PATTERN: &str = r"\{\{([^{}]*)\}\}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(TemplateField),
}

/// A parsed template, ready to render.
///
/// # Examples
///
/// ```
/// use gmb_writer_prompt::{Template, TemplateField};
///
/// let template = Template::parse("greeting", "Hello from {{ business_name }}!").unwrap();
/// assert_eq!(template.fields(), vec![TemplateField::BusinessName]);
///
/// assert!(Template::parse("typo", "Hello {{busines_name}}").is_err());
/// assert!(Template::parse("open", "Hello {{business_name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, validating every placeholder against [`TemplateField`].
    ///
    /// # Errors
    ///
    /// - `UndeclaredField` if a placeholder names an unknown field
    /// - `UnterminatedPlaceholder` if `{{` is left without a closing `}}`
    pub fn parse(id: impl Into<String>, source: &str) -> GmbResult<Self> {
        let id = id.into();
        let re = regex::Regex::new(PLACEHOLDER_PATTERN)
            .map_err(|e| PromptError::new(PromptErrorKind::InvalidPattern(e.to_string())))?;

        let mut segments = Vec::new();
        let mut cursor = 0;

        for cap in re.captures_iter(source) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };

            let literal = &source[cursor..whole.start()];
            check_literal(&id, literal)?;
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_string()));
            }

            let name = name.as_str().trim();
            let field = TemplateField::from_str(name).map_err(|_| {
                PromptError::new(PromptErrorKind::UndeclaredField {
                    template: id.clone(),
                    field: name.to_string(),
                })
            })?;
            segments.push(Segment::Field(field));
            cursor = whole.end();
        }

        let tail = &source[cursor..];
        check_literal(&id, tail)?;
        if !tail.is_empty() {
            segments.push(Segment::Literal(tail.to_string()));
        }

        Ok(Self { id, segments })
    }

    /// Template identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fields referenced, in order of appearance.
    pub fn fields(&self) -> Vec<TemplateField> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(field) => Some(*field),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `context`.
    pub fn render(&self, context: &TemplateContext<'_>) -> String {
        self.segments
            .iter()
            .fold(String::new(), |mut out, segment| {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Field(field) => out.push_str(&context.value(*field)),
                }
                out
            })
    }
}

fn check_literal(id: &str, literal: &str) -> GmbResult<()> {
    if literal.contains("{{") {
        return Err(PromptError::new(PromptErrorKind::UnterminatedPlaceholder(id.to_string())).into());
    }
    Ok(())
}
