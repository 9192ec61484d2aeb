//! Gemini request settings.

use derive_builder::Builder;
use derive_getters::Getters;
use gmb_writer_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};

/// Base URL of the Gemini models API.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used unless configured otherwise.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Endpoint, model and sampling parameters for Gemini calls.
///
/// Deserializes from the `[gemini]` configuration section; every field has
/// a default. The builder rejects a blank model, a temperature outside
/// `0.0..=2.0` and a `top_p` outside `(0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use gmb_writer_models::GeminiSettings;
///
/// let settings = GeminiSettings::builder().model("gemini-1.5-flash").build().unwrap();
/// assert_eq!(settings.model(), "gemini-1.5-flash");
/// assert_eq!(*settings.top_k(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct GeminiSettings {
    /// Models API base URL, without trailing slash
    #[builder(default = "DEFAULT_GEMINI_ENDPOINT.to_string()")]
    endpoint: String,
    /// Model identifier
    #[builder(default = "DEFAULT_GEMINI_MODEL.to_string()")]
    model: String,
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
    /// Top-k sampling
    #[builder(default = "40")]
    top_k: u32,
    /// Nucleus sampling
    #[builder(default = "0.95")]
    top_p: f32,
    /// Output token cap
    #[builder(default = "2048")]
    max_output_tokens: u32,
    /// Whole-request timeout; none by default
    #[builder(default)]
    request_timeout_secs: Option<u64>,
}

impl GeminiSettings {
    /// Creates a new builder for `GeminiSettings`.
    pub fn builder() -> GeminiSettingsBuilder {
        GeminiSettingsBuilder::default()
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl GeminiSettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.model.as_ref().is_some_and(|model| model.trim().is_empty()) {
            return Err("model must not be blank".to_string());
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!("temperature {temperature} is outside 0.0..=2.0"));
            }
        }
        if let Some(top_p) = self.top_p {
            if top_p <= 0.0 || top_p > 1.0 {
                return Err(format!("top_p {top_p} is outside (0.0, 1.0]"));
            }
        }
        Ok(())
    }
}

impl From<GeminiSettingsBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: GeminiSettingsBuilderError) -> Self {
        match err {
            GeminiSettingsBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            GeminiSettingsBuilderError::ValidationError(message) => {
                BuilderError::new(BuilderErrorKind::ValidationFailed(message))
            }
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
            request_timeout_secs: None,
        }
    }
}
