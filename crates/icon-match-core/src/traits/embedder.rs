//! Embedding capability.
//!
//! The core never loads a model itself. Whatever turns words into vectors is
//! passed in explicitly as an [`Embedder`] and borrowed for the duration of a
//! ranking run.

use crate::error::CoreResult;
use crate::types::Vector;

/// Turns a list of words into one vector of fixed dimension.
///
/// # Contract
///
/// - Every returned vector has exactly [`dimension()`](Self::dimension)
///   components.
/// - An empty word list yields the zero vector, not an error. Stop-word
///   filtering can legitimately reduce a passage to nothing.
///
/// # Example
///
/// ```rust
/// use icon_match_core::{CoreResult, Embedder, Vector};
///
/// struct LengthEmbedder;
///
/// impl Embedder for LengthEmbedder {
///     fn dimension(&self) -> usize {
///         1
///     }
///
///     fn embed(&self, words: &[String]) -> CoreResult<Vector> {
///         if words.is_empty() {
///             return Ok(vec![0.0]);
///         }
///         let total: usize = words.iter().map(String::len).sum();
///         Ok(vec![total as f32 / words.len() as f32])
///     }
/// }
///
/// let embedder = LengthEmbedder;
/// assert_eq!(embedder.embed(&[]).unwrap(), vec![0.0]);
/// ```
pub trait Embedder: Send + Sync {
    /// Output dimension D.
    fn dimension(&self) -> usize;

    /// Embed `words` into a single vector of dimension D.
    fn embed(&self, words: &[String]) -> CoreResult<Vector>;

    /// Model identifier, for logs and reports.
    fn model_id(&self) -> &str {
        "unknown"
    }
}
