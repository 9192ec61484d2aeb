//! Generative model backends for gmb_writer.
//!
//! The dispatcher only sees the [`GenerativeBackend`] trait: a prompt and an
//! API key go in, raw model text comes out. [`GeminiClient`] is the one
//! production backend, speaking the Gemini `generateContent` REST API.

#![warn(missing_docs)]

mod backend;
mod gemini;

pub use backend::GenerativeBackend;
pub use gemini::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiSettings,
    GeminiSettingsBuilder, GeminiSettingsBuilderError,
};
