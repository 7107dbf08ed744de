//! Batch query ranker.

use std::collections::HashSet;
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use super::rank;
use crate::error::{CoreError, CoreResult};
use crate::types::{CandidateList, CandidateLists, Catalog, Query, QueryId};

/// Rank every query independently against the catalog.
///
/// Queries are ranked in parallel with rayon: each one only reads the shared
/// catalog and fills its own output slot. The whole batch is validated before
/// any ranking starts and either fully succeeds or fails, so callers never
/// see partial results.
///
/// # Errors
///
/// - `DuplicateQuery` if two queries share an id
/// - `DimensionMismatch` if any query vector has the wrong dimension
/// - `ValidationError` if any query vector has a non-finite component
pub fn rank_batch(queries: &[Query], catalog: &Catalog, n: usize) -> CoreResult<CandidateLists> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(queries.len());
    for query in queries {
        if !seen.insert(query.id.as_str()) {
            return Err(CoreError::DuplicateQuery {
                id: query.id.to_string(),
            });
        }
        catalog.check_dimension(&query.vector)?;
    }

    let start = Instant::now();
    let ranked: Vec<(QueryId, CandidateList)> = queries
        .par_iter()
        .map(|query| rank(&query.vector, catalog, n).map(|list| (query.id.clone(), list)))
        .collect::<CoreResult<_>>()?;

    debug!(
        queries = queries.len(),
        catalog_size = catalog.len(),
        n,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "ranked query batch"
    );

    Ok(ranked.into_iter().collect())
}
