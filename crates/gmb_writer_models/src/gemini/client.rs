//! Gemini REST client.

use super::GeminiSettings;
use super::dto::{GenerateContentRequest, GenerateContentResponse, error_message};
use crate::GenerativeBackend;
use async_trait::async_trait;
use gmb_writer_error::{GeminiError, GeminiErrorKind, GmbResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Creates a client for the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %settings.model()))]
    pub fn new(settings: GeminiSettings) -> GmbResult<Self> {
        let mut builder = Client::builder().gzip(true);
        if let Some(secs) = settings.request_timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, settings })
    }

    /// Settings in use.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    #[instrument(skip(self, api_key, prompt), fields(model = %self.settings.model(), prompt_len = prompt.len()))]
    async fn generate(&self, api_key: &str, prompt: &str) -> GmbResult<String> {
        let url = self.settings.generate_url();
        let body = GenerateContentRequest::new(prompt, &self.settings);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = error_message(&error_text);
            tracing::warn!(status = status.as_u16(), %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = parsed.first_text().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(
                "missing candidates[0].content.parts[0].text".to_string(),
            ))
        })?;

        debug!(response_len = text.len(), "Received Gemini response");
        Ok(text.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}
