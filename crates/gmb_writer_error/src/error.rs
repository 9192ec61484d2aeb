//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, JsonError, PromptError, StorageError};

/// Every error condition the workspace can produce.
///
/// # Examples
///
/// ```
/// use gmb_writer_error::{GmbError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1");
/// let err: GmbError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GmbErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Profile store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Prompt template error
    #[from(PromptError)]
    Prompt(PromptError),
}

/// gmb_writer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use gmb_writer_error::{ConfigError, GmbErrorKind, GmbResult};
///
/// fn might_fail() -> GmbResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), GmbErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("gmb_writer Error: {}", _0)]
pub struct GmbError(Box<GmbErrorKind>);

impl GmbError {
    /// Create a new error from a kind.
    pub fn new(kind: GmbErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GmbErrorKind {
        &self.0
    }

    /// Short message for user-facing notices.
    ///
    /// Upstream API errors keep the API's own wording; everything else
    /// falls back to the kind's display text.
    pub fn user_message(&self) -> String {
        match self.kind() {
            GmbErrorKind::Gemini(e) => e.kind.user_message(),
            other => other.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to GmbErrorKind
impl<T> From<T> for GmbError
where
    T: Into<GmbErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for gmb_writer operations.
pub type GmbResult<T> = std::result::Result<T, GmbError>;
