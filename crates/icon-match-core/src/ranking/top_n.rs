//! Top-N ranker.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{CoreError, CoreResult};
use crate::types::{Candidate, CandidateList, Catalog};

/// Rank the `n` catalog entries most similar to `query`.
///
/// All catalog scores come from one batched [`Catalog::score_all`] call.
/// The best `n` are partially selected, then sorted by score descending with
/// ties broken by label ascending, so the result is reproducible.
///
/// - An empty catalog yields an empty list.
/// - `n == 0` yields an empty list; `n` larger than the catalog yields every
///   entry.
/// - A zero query vector scores `0.0` against everything, so the list is in
///   label order.
///
/// # Errors
///
/// - `DimensionMismatch` if `query` does not have the catalog's dimension
/// - `ValidationError` if `query` contains NaN or infinity
///
/// # Example
///
/// ```rust
/// use icon_match_core::{rank, Catalog};
///
/// let catalog = Catalog::from_entries(
///     2,
///     vec![
///         ("gear".to_string(), vec![1.0, 0.0]),
///         ("rocket".to_string(), vec![0.0, 1.0]),
///     ],
/// )
/// .unwrap();
///
/// let ranked = rank(&[0.1, 1.0], &catalog, 5).unwrap();
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].label, "rocket");
/// ```
pub fn rank(query: &[f32], catalog: &Catalog, n: usize) -> CoreResult<CandidateList> {
    catalog.check_dimension(query)?;
    if let Some(pos) = query.iter().position(|v| !v.is_finite()) {
        return Err(CoreError::validation(
            "query",
            format!("component {} is not finite", pos),
        ));
    }

    if catalog.is_empty() || n == 0 {
        return Ok(Vec::new());
    }

    let scores = catalog.score_all(query)?;
    let mut rows: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();

    // Rows are stored in label order, so row index doubles as the label tie-break.
    let by_rank = |a: &(usize, f32), b: &(usize, f32)| -> Ordering {
        b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
    };

    if n < rows.len() {
        rows.select_nth_unstable_by(n - 1, by_rank);
        rows.truncate(n);
    }
    rows.sort_unstable_by(by_rank);

    trace!(
        catalog_size = catalog.len(),
        n,
        returned = rows.len(),
        "ranked query against catalog"
    );

    Ok(rows
        .into_iter()
        .filter_map(|(row, score)| catalog.label_at(row).map(|label| Candidate::new(label, score)))
        .collect())
}
