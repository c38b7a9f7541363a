//! Error types for textfall.
//!
//! All fallible operations in the crate return [`Result`]. Two rules apply
//! throughout:
//!
//! - IO errors bubble up unchanged via `#[from]` so real system problems
//!   stay visible.
//! - Extraction strategies may fail with any variant, but the dispatcher
//!   converts every failure into an `Unavailable` outcome string. Callers of
//!   [`crate::core::dispatcher::extract`] never see an `Err` for a supported
//!   format.

use thiserror::Error;

/// Result type alias using `TextfallError`.
pub type Result<T> = std::result::Result<T, TextfallError>;

/// Main error type for all textfall operations.
#[derive(Debug, Error)]
pub enum TextfallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Other(String),
}

impl TextfallError {
    /// Create a Parsing error.
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Parsing error with source.
    pub fn parsing_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an Ocr error.
    pub fn ocr<S: Into<String>>(message: S) -> Self {
        Self::Ocr {
            message: message.into(),
            source: None,
        }
    }

    /// Create an Ocr error with source.
    pub fn ocr_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Ocr {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }
}

impl From<calamine::Error> for TextfallError {
    fn from(err: calamine::Error) -> Self {
        TextfallError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for TextfallError {
    fn from(err: lopdf::Error) -> Self {
        TextfallError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for TextfallError {
    fn from(err: serde_json::Error) -> Self {
        TextfallError::Other(err.to_string())
    }
}
