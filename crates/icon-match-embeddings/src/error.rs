//! Error type for word-vector loading, catalog building and storage.
//!
//! | Category | Variants |
//! |----------|----------|
//! | Input files | Io, Csv, Parse |
//! | Validation | InvalidDimension, DuplicateIcon, EmptyVocabulary |
//! | Serialization | SerializationError |
//!
//! Every variant converts into [`CoreError`] so collaborators can be used
//! behind the core's `Embedder` trait.

use icon_match_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The associations CSV could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A line of a word-vector file is malformed.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A vector has the wrong number of components.
    #[error("Invalid dimension in {context}: expected {expected}, got {actual}")]
    InvalidDimension {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// The associations file lists the same icon twice.
    #[error("Duplicate icon in associations: {icon}")]
    DuplicateIcon { icon: String },

    /// A word-vector file contains no vectors.
    #[error("Word-vector file contains no vectors")]
    EmptyVocabulary,

    /// Catalog JSON could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl From<serde_json::Error> for EmbeddingError {
    fn from(err: serde_json::Error) -> Self {
        EmbeddingError::SerializationError {
            message: err.to_string(),
        }
    }
}

impl From<EmbeddingError> for CoreError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::Io(e) => CoreError::Io(e.to_string()),
            EmbeddingError::InvalidDimension {
                expected, actual, ..
            } => CoreError::DimensionMismatch { expected, actual },
            EmbeddingError::DuplicateIcon { icon } => CoreError::DuplicateLabel { label: icon },
            EmbeddingError::SerializationError { message } => CoreError::SerializationError(message),
            other => CoreError::Embedding(other.to_string()),
        }
    }
}

/// Result alias for this crate.
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
