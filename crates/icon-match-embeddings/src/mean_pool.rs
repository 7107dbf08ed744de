//! Mean-pooled word-vector embedder.

use std::sync::Arc;

use icon_match_core::{CoreResult, Embedder, Vector};
use tracing::trace;

use crate::word_vectors::WordVectorTable;

/// Embeds a word list as the mean of its known word vectors.
///
/// Words are trimmed and blank ones dropped. Words missing from the table
/// are skipped. When nothing is left the zero vector is returned.
///
/// # Example
///
/// ```rust
/// use icon_match_core::Embedder;
/// use icon_match_embeddings::{MeanPoolEmbedder, WordVectorTable};
///
/// let table = WordVectorTable::from_pairs(
///     2,
///     vec![("gear", vec![1.0, 0.0]), ("rocket", vec![0.0, 1.0])],
/// )
/// .unwrap();
/// let embedder = MeanPoolEmbedder::new(table);
///
/// let words = vec!["gear".to_string(), "rocket".to_string()];
/// assert_eq!(embedder.embed(&words).unwrap(), vec![0.5, 0.5]);
/// assert_eq!(embedder.embed(&[]).unwrap(), vec![0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct MeanPoolEmbedder {
    table: Arc<WordVectorTable>,
    model_id: String,
}

impl MeanPoolEmbedder {
    pub fn new(table: WordVectorTable) -> Self {
        Self::from_shared(Arc::new(table))
    }

    pub fn from_shared(table: Arc<WordVectorTable>) -> Self {
        let model_id = format!("word-vectors-mean-d{}", table.dimension());
        Self { table, model_id }
    }

    /// Override the identifier reported in logs.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn table(&self) -> &WordVectorTable {
        &self.table
    }
}

impl Embedder for MeanPoolEmbedder {
    fn dimension(&self) -> usize {
        self.table.dimension()
    }

    fn embed(&self, words: &[String]) -> CoreResult<Vector> {
        let mut sum = vec![0.0f32; self.table.dimension()];
        let mut found = 0usize;

        for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
            match self.table.get(word) {
                Some(vector) => {
                    for (acc, v) in sum.iter_mut().zip(vector) {
                        *acc += v;
                    }
                    found += 1;
                }
                None => trace!(word, "out-of-vocabulary word skipped"),
            }
        }

        if found > 1 {
            let count = found as f32;
            sum.iter_mut().for_each(|v| *v /= count);
        }
        Ok(sum)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedder() -> MeanPoolEmbedder {
        MeanPoolEmbedder::new(
            WordVectorTable::from_pairs(
                3,
                vec![
                    ("gear", vec![1.0, 0.0, 0.0]),
                    ("cog", vec![0.0, 1.0, 0.0]),
                    ("rocket", vec![0.0, 0.0, 3.0]),
                ],
            )
            .unwrap(),
        )
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_mean_of_known_words() {
        let v = embedder().embed(&words(&["gear", "cog", "rocket"])).unwrap();
        assert_eq!(v, vec![1.0 / 3.0, 1.0 / 3.0, 1.0]);
    }

    #[test]
    fn test_unknown_and_blank_words_skipped() {
        let v = embedder().embed(&words(&[" gear ", "", "unicorn"])).unwrap();
        assert_eq!(v, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_and_unknown_only_yield_zero_vector() {
        let e = embedder();
        assert_eq!(e.embed(&[]).unwrap(), vec![0.0; 3]);
        assert_eq!(e.embed(&words(&["unicorn"])).unwrap(), vec![0.0; 3]);
    }

    #[test]
    fn test_model_id() {
        let e = embedder();
        assert_eq!(e.model_id(), "word-vectors-mean-d3");
        assert_eq!(e.with_model_id("cc.en.300").model_id(), "cc.en.300");
    }
}
