//! Error types for contract generation

use thiserror::Error;

/// Result type alias for generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The output sink failed; the pass stops where the sink stopped
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured template is malformed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Generator configuration could not be decoded
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}

/// A template string that cannot be compiled for its placeholder count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{` opened a placeholder that never closes
    #[error("unclosed placeholder at byte {position} in template {template:?}")]
    UnclosedPlaceholder { template: String, position: usize },

    /// A lone `}` outside any placeholder
    #[error("unmatched '}}' at byte {position} in template {template:?}")]
    UnmatchedClosingBrace { template: String, position: usize },

    /// Placeholder body is not a plain argument index
    #[error("invalid placeholder {{{placeholder}}} in template {template:?}")]
    InvalidPlaceholder {
        template: String,
        placeholder: String,
    },

    /// Placeholder refers to an argument the template site never supplies
    #[error(
        "placeholder {{{index}}} is out of range in template {template:?} (takes {arity} argument(s))"
    )]
    PlaceholderOutOfRange {
        template: String,
        index: usize,
        arity: usize,
    },
}

impl TemplateError {
    /// The template text that failed to compile
    pub fn template(&self) -> &str {
        match self {
            TemplateError::UnclosedPlaceholder { template, .. }
            | TemplateError::UnmatchedClosingBrace { template, .. }
            | TemplateError::InvalidPlaceholder { template, .. }
            | TemplateError::PlaceholderOutOfRange { template, .. } => template,
        }
    }
}
