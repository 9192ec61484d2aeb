//! Prompt template error types.

/// Template problems detected when a template is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptErrorKind {
    /// Placeholder names a field outside the template schema
    #[display("Template '{}' references undeclared field '{}'", template, field)]
    UndeclaredField {
        /// Template identifier
        template: String,
        /// The unknown field name
        field: String,
    },
    /// `{{` without a matching `}}`
    #[display("Template '{}' has an unterminated placeholder", _0)]
    UnterminatedPlaceholder(String),
    /// The placeholder pattern itself failed to compile
    #[display("Invalid placeholder pattern: {}", _0)]
    InvalidPattern(String),
}

/// Prompt error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The kind of error that occurred
    pub kind: PromptErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PromptError {
    /// Create a new prompt error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
