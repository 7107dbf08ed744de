//! Uniqueness arbitration.
//!
//! Turns independently ranked candidate lists into an [`Assignment`] where
//! every label is held by at most one query.
//!
//! # Algorithm
//!
//! ```text
//! 1. Invert lists into one proposal queue per label:
//!      label -> [(query, score)]  score desc, query id asc
//! 2. Pass loop while any label is open:
//!      visit open labels by head score desc, label asc
//!        head query unassigned -> commit label, close it
//!        head query assigned   -> consume head only
//!        queue now empty       -> close unclaimed
//! 3. Queries without a commit end with None
//! ```
//!
//! Every visit either closes a label or consumes one proposal, so the number
//! of visits is bounded by the total number of proposals.
//!
//! # Known limitation
//!
//! Labels propose to the query that ranked them highest, and a query keeps
//! the first label it accepts even if a better proposal for a different label
//! arrives later. This commits early and is deterministic, but it is not a
//! maximum-weight matching: an assignment with a higher total similarity may
//! exist that this procedure does not find.
//!
//! Each commit changes the outcome of later visits, so the passes run
//! sequentially. Parallelizing them would require different tie-break
//! semantics.

mod proposals;


use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, info, trace};

use self::proposals::{Proposal, ProposalQueue};
use crate::error::{CoreError, CoreResult, ReferenceKind};
use crate::types::{Assignment, Candidate, CandidateLists, Catalog, QueryId};

/// Arbitrate candidate lists whose keys are the full set of queries.
///
/// # Errors
///
/// See [`Arbiter::arbitrate`].
pub fn arbitrate(lists: &CandidateLists, catalog: &Catalog) -> CoreResult<Assignment> {
    Arbiter::new(catalog).arbitrate(lists)
}

/// Arbitration configured with the expected universe of labels and queries.
///
/// # Example
///
/// ```rust
/// use icon_match_core::{Arbiter, Candidate, CandidateLists, Catalog, QueryId};
///
/// let catalog = Catalog::from_entries(
///     1,
///     vec![("gear".to_string(), vec![1.0])],
/// )
/// .unwrap();
///
/// let mut lists = CandidateLists::new();
/// lists.insert(QueryId::from("a"), vec![Candidate::new("gear", 0.9)]);
///
/// let assignment = Arbiter::new(&catalog)
///     .with_queries(["a", "b"])
///     .arbitrate(&lists)
///     .unwrap();
///
/// assert_eq!(assignment.label_for("a"), Some("gear"));
/// assert_eq!(assignment.label_for("b"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Arbiter<'a> {
    catalog: &'a Catalog,
    queries: Option<BTreeSet<QueryId>>,
}

impl<'a> Arbiter<'a> {
    /// Labels are checked against `catalog`; queries default to the keys of
    /// the lists being arbitrated.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            queries: None,
        }
    }

    /// Declare the expected query universe explicitly.
    ///
    /// Lists keyed by any other id are rejected; declared queries without a
    /// list end unassigned.
    pub fn with_queries<I, Q>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QueryId>,
    {
        self.queries = Some(queries.into_iter().map(Into::into).collect());
        self
    }

    /// Resolve `lists` into a unique-per-label assignment.
    ///
    /// # Errors
    ///
    /// All raised before the first pass:
    /// - `UnknownReference` for a query id outside the universe or a label
    ///   missing from the catalog
    /// - `ValidationError` for a non-finite score or a label listed twice
    ///   by the same query
    pub fn arbitrate(&self, lists: &CandidateLists) -> CoreResult<Assignment> {
        self.validate(lists)?;

        let universe: Vec<QueryId> = match &self.queries {
            Some(queries) => queries.iter().cloned().collect(),
            None => lists.keys().cloned().collect(),
        };
        let mut queues = build_queues(lists, &universe);
        let total_proposals: usize = queues.iter().map(ProposalQueue::remaining).sum();
        let label_count = queues.len();

        let mut holders: Vec<Option<Candidate>> = vec![None; universe.len()];
        let mut passes = 0usize;
        let mut steps = 0usize;

        while !queues.is_empty() {
            passes += 1;
            queues.sort_by(ProposalQueue::visit_cmp);

            let mut still_open = Vec::with_capacity(queues.len());
            for mut queue in queues.drain(..) {
                let Some(head) = queue.head() else {
                    continue;
                };
                steps += 1;

                if holders[head.query].is_none() {
                    debug!(
                        label = queue.label(),
                        query = %universe[head.query],
                        score = head.score,
                        pass = passes,
                        "committed label"
                    );
                    holders[head.query] = Some(Candidate::new(queue.label(), head.score));
                    continue;
                }

                queue.advance();
                if queue.is_exhausted() {
                    trace!(label = queue.label(), "label closed unclaimed");
                } else {
                    still_open.push(queue);
                }
            }
            queues = still_open;
        }

        debug_assert!(steps <= total_proposals);

        let slots: BTreeMap<QueryId, Option<Candidate>> = universe.into_iter().zip(holders).collect();
        let assignment = Assignment::new(slots, passes, steps);

        info!(
            queries = assignment.len(),
            labels = label_count,
            proposals = total_proposals,
            assigned = assignment.assigned_count(),
            passes,
            steps,
            "arbitration complete"
        );

        Ok(assignment)
    }

    fn validate(&self, lists: &CandidateLists) -> CoreResult<()> {
        for (query, list) in lists {
            if let Some(universe) = &self.queries {
                if !universe.contains(query) {
                    return Err(CoreError::UnknownReference {
                        kind: ReferenceKind::Query,
                        id: query.to_string(),
                    });
                }
            }

            let mut seen: HashSet<&str> = HashSet::with_capacity(list.len());
            for candidate in list {
                if !self.catalog.contains(&candidate.label) {
                    return Err(CoreError::UnknownReference {
                        kind: ReferenceKind::Label,
                        id: candidate.label.clone(),
                    });
                }
                if !candidate.score.is_finite() {
                    return Err(CoreError::validation(
                        format!("candidates[{}]", query),
                        format!("score for '{}' is not finite", candidate.label),
                    ));
                }
                if !seen.insert(candidate.label.as_str()) {
                    return Err(CoreError::validation(
                        format!("candidates[{}]", query),
                        format!("label '{}' listed more than once", candidate.label),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Invert per-query lists into per-label queues. `universe` must be sorted
/// and contain every key of `lists`.
fn build_queues<'l>(lists: &'l CandidateLists, universe: &[QueryId]) -> Vec<ProposalQueue<'l>> {
    let mut by_label: BTreeMap<&'l str, Vec<Proposal>> = BTreeMap::new();

    for (query, list) in lists {
        let Ok(query_index) = universe.binary_search(query) else {
            continue;
        };
        for candidate in list {
            by_label
                .entry(candidate.label.as_str())
                .or_default()
                .push(Proposal {
                    query: query_index,
                    score: candidate.score,
                });
        }
    }

    by_label
        .into_iter()
        .map(|(label, proposals)| ProposalQueue::new(label, proposals))
        .collect()
}
