//! Backend trait.

use async_trait::async_trait;
use gmb_writer_error::GmbResult;

/// A text generation service.
///
/// The API key is passed per call rather than held by the backend, because
/// the user can set or clear it at any time.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate text for `prompt`, returning the model's raw output.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response without generated text.
    async fn generate(&self, api_key: &str, prompt: &str) -> GmbResult<String>;

    /// Provider identifier, e.g. `"gemini"`.
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}
