//! Passage matching pipeline.
//!
//! ```text
//! passage ─► Preprocessor::words ─► Embedder::embed ─► Query
//!   all queries ─► rank_batch ─► arbitrate (when ranking.unique) ─► MatchReport
//! ```
//!
//! One call to [`PassageMatcher::match_passages`] is one unit of work: it
//! either returns the full report or an error, never a partial result.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::arbitration::Arbiter;
use crate::config::RankingConfig;
use crate::error::{CoreError, CoreResult};
use crate::ranking::rank_batch;
use crate::text::Preprocessor;
use crate::traits::Embedder;
use crate::types::{Candidate, CandidateList, CandidateLists, Catalog, Query, QueryId};

/// Result for one passage.
#[derive(Debug, Clone, Serialize)]
pub struct PassageMatch {
    pub id: QueryId,
    pub text: String,
    /// Words left after preprocessing
    pub words: Vec<String>,
    /// Top-N candidates, best first
    pub candidates: CandidateList,
    /// Final icon for this passage
    pub assigned: Option<Candidate>,
}

/// Result for a batch of passages, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub passages: Vec<PassageMatch>,
    /// Whether arbitration was applied
    pub unique: bool,
    pub passes: usize,
    pub steps: usize,
    pub elapsed_ms: f64,
}

impl MatchReport {
    pub fn assigned_count(&self) -> usize {
        self.passages.iter().filter(|p| p.assigned.is_some()).count()
    }
}

/// Matches passages to catalog entries with an injected embedder.
pub struct PassageMatcher<'a, E: Embedder + ?Sized> {
    embedder: &'a E,
    catalog: &'a Catalog,
    preprocessor: Preprocessor,
    ranking: RankingConfig,
}

impl<'a, E: Embedder + ?Sized> PassageMatcher<'a, E> {
    /// # Errors
    ///
    /// - `DimensionMismatch` if the embedder and catalog dimensions differ
    /// - `ConfigError` if `ranking.top_n == 0`
    pub fn new(embedder: &'a E, catalog: &'a Catalog, ranking: RankingConfig) -> CoreResult<Self> {
        if embedder.dimension() != catalog.dimension() {
            return Err(CoreError::DimensionMismatch {
                expected: catalog.dimension(),
                actual: embedder.dimension(),
            });
        }
        if ranking.top_n == 0 {
            return Err(CoreError::ConfigError(
                "ranking.top_n must be greater than 0".into(),
            ));
        }
        Ok(Self {
            embedder,
            catalog,
            preprocessor: Preprocessor::new(),
            ranking,
        })
    }

    /// Replace the default preprocessor.
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Preprocess and embed each passage. Passage `i` becomes `"Paragraph {i+1}"`.
    pub fn embed_passages<S: AsRef<str> + Sync>(&self, passages: &[S]) -> CoreResult<Vec<(Query, Vec<String>)>> {
        passages
            .par_iter()
            .enumerate()
            .map(|(index, passage)| {
                let words = self.preprocessor.words(passage.as_ref());
                let vector = self.embedder.embed(&words)?;
                Ok((Query::new(QueryId::paragraph(index), vector), words))
            })
            .collect()
    }

    /// Top-N candidates per passage, without arbitration.
    pub fn rank_passages<S: AsRef<str> + Sync>(&self, passages: &[S]) -> CoreResult<CandidateLists> {
        let queries: Vec<Query> = self
            .embed_passages(passages)?
            .into_iter()
            .map(|(query, _)| query)
            .collect();
        rank_batch(&queries, self.catalog, self.ranking.top_n)
    }

    /// Rank every passage, then resolve competing claims when
    /// `ranking.unique` is set. Otherwise each passage takes its own best
    /// candidate.
    pub fn match_passages<S: AsRef<str> + Sync>(&self, passages: &[S]) -> CoreResult<MatchReport> {
        let start = Instant::now();

        let embedded = self.embed_passages(passages)?;
        let empty = embedded.iter().filter(|(_, words)| words.is_empty()).count();
        if empty > 0 {
            debug!(empty, "passages reduced to no words, using zero vectors");
        }

        let (queries, words): (Vec<Query>, Vec<Vec<String>>) = embedded.into_iter().unzip();
        let mut lists = rank_batch(&queries, self.catalog, self.ranking.top_n)?;

        let (assignment, passes, steps) = if self.ranking.unique {
            let assignment = Arbiter::new(self.catalog)
                .with_queries(queries.iter().map(|q| q.id.clone()))
                .arbitrate(&lists)?;
            let (passes, steps) = (assignment.passes(), assignment.steps());
            (Some(assignment), passes, steps)
        } else {
            (None, 0, 0)
        };

        let matches: Vec<PassageMatch> = queries
            .into_iter()
            .zip(words)
            .zip(passages)
            .map(|((query, words), text)| {
                let candidates = lists.remove(&query.id).unwrap_or_default();
                let assigned = match &assignment {
                    Some(assignment) => assignment.get(query.id.as_str()).cloned(),
                    None => candidates.first().cloned(),
                };
                PassageMatch {
                    id: query.id,
                    text: text.as_ref().to_string(),
                    words,
                    candidates,
                    assigned,
                }
            })
            .collect();

        let report = MatchReport {
            passages: matches,
            unique: self.ranking.unique,
            passes,
            steps,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        info!(
            passages = report.passages.len(),
            assigned = report.assigned_count(),
            model = self.embedder.model_id(),
            elapsed_ms = report.elapsed_ms,
            "matched passages"
        );

        Ok(report)
    }
}
