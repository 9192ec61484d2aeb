//! Core data types for gmb_writer.
//!
//! This crate holds the vocabulary shared by every other crate: the business
//! facts collected from the user, the content types that can be generated,
//! and the shape of generated results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod business;
mod content;
mod language;
mod request;
mod theme;
mod tone;

pub use business::{BusinessInfo, BusinessInfoBuilder, BusinessInfoBuilderError};
pub use content::{ContentBody, ContentSource, ContentType, GeneratedContent, PostKind, QaPair, ReviewKind};
pub use language::Language;
pub use request::{ContentKind, GenerationRequest};
pub use theme::Theme;
pub use tone::Tone;
