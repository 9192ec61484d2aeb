//! Google Gemini backend.

mod client;
mod dto;
mod settings;

pub use client::GeminiClient;
pub use settings::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, GeminiSettings, GeminiSettingsBuilder,
    GeminiSettingsBuilderError,
};
