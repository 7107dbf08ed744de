//! Error types for icon-match-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the crate, along with the [`CoreResult<T>`] type alias.
//!
//! Two degenerate situations are deliberately *not* errors: ranking against
//! an empty catalog returns an empty candidate list, and a zero-norm vector
//! scores `0.0` against everything.
//!
//! # Examples
//!
//! ```rust
//! use icon_match_core::CoreError;
//!
//! fn check_dimension(actual: usize) -> Result<(), CoreError> {
//!     if actual != 300 {
//!         return Err(CoreError::DimensionMismatch { expected: 300, actual });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_dimension(768).is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Kind of identifier named by [`CoreError::UnknownReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A query identifier outside the expected set of queries.
    Query,
    /// A catalog label that the catalog does not contain.
    Label,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Label => f.write_str("label"),
        }
    }
}

/// Top-level error type for icon-match-core operations.
///
/// # Examples
///
/// ```rust
/// use icon_match_core::CoreError;
///
/// let error = CoreError::DimensionMismatch {
///     expected: 300,
///     actual: 768,
/// };
///
/// match &error {
///     CoreError::DimensionMismatch { expected, actual } => {
///         assert_eq!(*expected, 300);
///         assert_eq!(*actual, 768);
///     }
///     _ => panic!("unexpected variant"),
/// }
///
/// assert!(error.to_string().contains("300"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// A vector does not have the catalog's fixed dimension.
    ///
    /// # When This Occurs
    ///
    /// - Ranking a query vector produced by a different embedding model
    /// - Adding a catalog entry whose vector length differs from the catalog
    /// - Pairing an embedder with a catalog built from another model
    ///
    /// Raised before any score is computed.
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the catalog (or the left-hand vector)
        expected: usize,
        /// Dimension that was provided
        actual: usize,
    },

    /// Arbitration input names a query or label outside the known universe.
    ///
    /// Rejected before arbitration begins, never silently dropped.
    #[error("Unknown {kind} reference: {id}")]
    UnknownReference {
        /// Whether the identifier is a query id or a catalog label
        kind: ReferenceKind,
        /// The offending identifier
        id: String,
    },

    /// A catalog was constructed with the same label twice.
    #[error("Duplicate catalog label: {label}")]
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// A ranking batch contains the same query identifier twice.
    #[error("Duplicate query id: {id}")]
    DuplicateQuery {
        /// The repeated query identifier
        id: String,
    },

    /// A field value failed validation constraints.
    ///
    /// # When This Occurs
    ///
    /// - NaN or infinite vector components or scores
    /// - A catalog dimension of zero
    /// - The same label listed twice in one query's candidate list
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The embedding collaborator failed.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Reading or writing a collaborator file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::ValidationError`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
