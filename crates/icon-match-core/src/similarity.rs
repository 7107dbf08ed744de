//! Cosine similarity between embedding vectors.
//!
//! `cos(a, b) = dot(a, b) / (|a| * |b|)`
//!
//! # Zero-vector fallback
//!
//! A vector whose L2 norm is below `f32::EPSILON` on either side scores
//! `0.0`. This is expected input: the embedder returns the zero vector when a
//! passage is reduced to nothing by stop-word filtering, so it is never an
//! error and never a division by zero.

use crate::error::{CoreError, CoreResult};

/// Dot product of two equal-length slices.
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// L2 norm of a vector.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Finish a cosine computation from a precomputed dot product and norms.
///
/// Applies the zero-norm fallback and clamps into `[-1, 1]` to absorb
/// floating-point drift. A zero result is always `+0.0`, so scores that are
/// equal under `==` also compare equal under `total_cmp`.
#[inline]
pub fn cosine_from_parts(dot: f32, norm_a: f32, norm_b: f32) -> f32 {
    if norm_a < f32::EPSILON || norm_b < f32::EPSILON {
        return 0.0;
    }
    let score = (dot / (norm_a * norm_b)).clamp(-1.0, 1.0);
    if score == 0.0 {
        0.0
    } else {
        score
    }
}

/// Compute cosine similarity between two vectors of the same dimension.
///
/// Callers must pass equal-length slices; a length mismatch is a contract
/// violation and is checked with `debug_assert!` only. Use
/// [`try_cosine_similarity`] when the lengths are not already known to agree.
///
/// # Performance
/// O(n) where n is the embedding dimension (typically 300).
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "cosine_similarity dimension mismatch");

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    cosine_from_parts(dot, norm_a.sqrt(), norm_b.sqrt())
}

/// Checked cosine similarity.
///
/// # Errors
///
/// Returns `CoreError::DimensionMismatch` if the slices differ in length.
pub fn try_cosine_similarity(a: &[f32], b: &[f32]) -> CoreResult<f32> {
    if a.len() != b.len() {
        return Err(CoreError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(cosine_similarity(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    fn sample_vectors() -> Vec<Vec<f32>> {
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![1.0, 1.0, 1.0],
            vec![-3.0, 0.5, 2.0],
            vec![0.25, -0.75, 0.1],
            vec![-1.0, -1.0, -1.0],
        ]
    }

    #[test]
    fn test_identical_vectors_score_one() {
        for v in sample_vectors() {
            let sim = cosine_similarity(&v, &v);
            assert!((sim - 1.0).abs() < TOLERANCE, "sim(v, v) = {} for {:?}", sim, v);
        }
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let vectors = sample_vectors();
        for a in &vectors {
            for b in &vectors {
                let ab = cosine_similarity(a, b);
                let ba = cosine_similarity(b, a);
                assert!((ab - ba).abs() < TOLERANCE, "asymmetric: {} vs {}", ab, ba);
                assert!((-1.0..=1.0).contains(&ab), "out of bounds: {}", ab);
            }
        }
    }

    #[test]
    fn test_orthogonal_and_opposite() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < TOLERANCE);

        let sim = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
        assert!((sim + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_vector_falls_back_to_zero() {
        let zero = vec![0.0; 3];
        assert_eq!(cosine_similarity(&zero, &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0, 3.0], &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_orthogonal_negative_products_score_positive_zero() {
        // Products are all -0.0, and an iterator sum starts at -0.0.
        let a = [-1.0f32, 0.0];
        let b = [0.0f32, 1.0];
        let score = cosine_from_parts(dot(&a, &b), l2_norm(&a), l2_norm(&b));
        assert_eq!(score.to_bits(), 0.0f32.to_bits());
        assert_eq!(cosine_similarity(&a, &b).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_try_cosine_rejects_mismatch() {
        let err = try_cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_scaling_does_not_change_score() {
        let a = [0.3, -1.2, 4.0];
        let b = [1.0, 1.0, 0.5];
        let scaled: Vec<f32> = a.iter().map(|x| x * 17.0).collect();
        let s1 = cosine_similarity(&a, &b);
        let s2 = cosine_similarity(&scaled, &b);
        assert!((s1 - s2).abs() < 1e-5);
    }
}
