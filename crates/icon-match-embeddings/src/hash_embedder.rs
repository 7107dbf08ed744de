//! Deterministic hash-based embedder for tests and offline development.
//!
//! Each word gets a pseudo-random unit vector seeded from its hash; a word
//! list is embedded as the mean of its word vectors. Identical words always
//! produce identical vectors, so passages sharing words score higher than
//! passages that do not. The vectors carry no semantics beyond that.
//!
//! NOT for production matching: use [`MeanPoolEmbedder`](crate::MeanPoolEmbedder)
//! over real word vectors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use icon_match_core::{CoreResult, Embedder, Vector};

/// # Example
///
/// ```rust
/// use icon_match_core::Embedder;
/// use icon_match_embeddings::HashEmbedder;
///
/// let embedder = HashEmbedder::with_dimension(64);
/// let words = vec!["gear".to_string()];
/// assert_eq!(embedder.embed(&words).unwrap(), embedder.embed(&words).unwrap());
/// assert_eq!(embedder.embed(&[]).unwrap(), vec![0.0; 64]);
/// ```
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
    model_id: String,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::with_dimension(300)
    }
}

impl HashEmbedder {
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            model_id: format!("hash-embedding-v1-d{}", dimension),
        }
    }

    /// Unit vector for one word.
    ///
    /// 1. Hash the word to u64
    /// 2. Seed an LCG (Knuth MMIX parameters) with the hash
    /// 3. Draw `dimension` values in [-1, 1] and normalize
    pub fn word_vector(&self, word: &str) -> Vector {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        let mut seed = hasher.finish();

        let mut vector: Vector = (0..self.dimension)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((seed as f64 / u64::MAX as f64) * 2.0 - 1.0) as f32
            })
            .collect();

        let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            vector.iter_mut().for_each(|v| *v /= magnitude);
        }
        vector
    }
}

impl Embedder for HashEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, words: &[String]) -> CoreResult<Vector> {
        let mut sum = vec![0.0f32; self.dimension];
        let mut count = 0usize;
        for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
            for (acc, v) in sum.iter_mut().zip(self.word_vector(word)) {
                *acc += v;
            }
            count += 1;
        }
        if count > 1 {
            let count = count as f32;
            sum.iter_mut().for_each(|v| *v /= count);
        }
        Ok(sum)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
