//! Prompt composition for gmb_writer.
//!
//! Prompts and canned example content are static templates with
//! `{{field}}` placeholders drawn from a fixed [`TemplateField`] schema.
//! Every template is parsed once when the [`PromptComposer`] is built, so a
//! typo in a placeholder fails construction instead of leaking into a
//! prompt.
//!
//! The composer also owns the reverse direction: turning raw model text
//! back into a [`ContentBody`](gmb_writer_core::ContentBody) per content
//! type.

#![warn(missing_docs)]

mod canned;
mod composer;
mod field;
mod parse;
mod prompts;
mod template;

pub use composer::PromptComposer;
pub use field::{DEFAULT_QA_TOPICS, NOT_AVAILABLE, TemplateContext, TemplateField};
pub use parse::parse_response;
pub use template::Template;
