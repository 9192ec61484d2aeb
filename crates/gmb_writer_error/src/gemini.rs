//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Failed to build the underlying HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response (DNS, TLS, connection reset, timeout)
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the response envelope, or the raw body
        message: String,
    },
    /// Response body did not contain `candidates[0].content.parts[0].text`
    #[display("Invalid API response: {}", _0)]
    InvalidResponse(String),
}

impl GeminiErrorKind {
    /// Message suitable for showing to the user.
    ///
    /// Prefers the upstream message when the API returned one.
    pub fn user_message(&self) -> String {
        match self {
            GeminiErrorKind::HttpError { message, .. } if !message.is_empty() => {
                format!("API error: {}", message)
            }
            GeminiErrorKind::HttpError { status_code, .. } => {
                format!("API error: HTTP {}", status_code)
            }
            other => other.to_string(),
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use gmb_writer_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 400,
///     message: "API key not valid".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 400"));
/// assert_eq!(err.kind.user_message(), "API error: API key not valid");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
