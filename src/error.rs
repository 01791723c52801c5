//! Error types for response normalization and the browse API.

use thiserror::Error;

/// Main error type for all YouTube Music operations.
#[derive(Debug, Error)]
pub enum YtMusicError {
    /// A key or index requested during extraction is not in the container.
    #[error("Shape mismatch: {0} not found")]
    ShapeMismatch(String),

    /// Extraction expected one kind of value and found another.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Singleton collapse did not terminate within the depth guard.
    #[error("Malformed input: more than {0} nested single-element wrappers")]
    MalformedInput(usize),

    /// The top-level mapping matched none of the known response shapes.
    #[error("Unrecognized response shape with keys {0:?}")]
    UnrecognizedShape(Vec<String>),

    /// A run fragment lacked its text field.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The captured curl request could not be parsed.
    #[error("Invalid auth file: {0}")]
    InvalidAuthFile(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic API error with message.
    #[error("API error: {0}")]
    ApiError(String),

    /// Every attempt allowed by the retry policy failed.
    #[error("Exceeded {attempts} attempts, last error: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl YtMusicError {
    /// Whether this is a list-versus-mapping mismatch.
    ///
    /// The page builder only falls back to alternate extraction paths on this kind.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, YtMusicError::TypeMismatch { .. })
    }
}

/// Result type alias for YouTube Music operations.
pub type Result<T> = std::result::Result<T, YtMusicError>;
