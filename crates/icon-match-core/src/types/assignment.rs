use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::{Candidate, QueryId};

/// Outcome of arbitration: at most one candidate per query.
///
/// Every query in the arbitration universe has a slot; `None` means its
/// candidates were all claimed by others. No label appears in two slots.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assignment {
    slots: BTreeMap<QueryId, Option<Candidate>>,
    passes: usize,
    steps: usize,
}

impl Assignment {
    pub(crate) fn new(slots: BTreeMap<QueryId, Option<Candidate>>, passes: usize, steps: usize) -> Self {
        Self {
            slots,
            passes,
            steps,
        }
    }

    /// Candidate committed to `query`, if any.
    pub fn get(&self, query: &str) -> Option<&Candidate> {
        self.slots.get(query).and_then(Option::as_ref)
    }

    /// Label committed to `query`, if any.
    pub fn label_for(&self, query: &str) -> Option<&str> {
        self.get(query).map(|c| c.label.as_str())
    }

    /// Whether `query` belongs to the arbitration universe.
    pub fn contains_query(&self, query: &str) -> bool {
        self.slots.contains_key(query)
    }

    /// All slots in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&QueryId, Option<&Candidate>)> {
        self.slots.iter().map(|(id, slot)| (id, slot.as_ref()))
    }

    /// Queries that ended without a label.
    pub fn unassigned(&self) -> impl Iterator<Item = &QueryId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.is_none())
            .map(|(id, _)| id)
    }

    /// Number of queries in the universe.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_some()).count()
    }

    /// Sum of committed scores.
    pub fn total_score(&self) -> f32 {
        self.slots.values().flatten().map(|c| c.score).sum()
    }

    /// True when no label is held by two queries.
    pub fn is_unique(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.slots.len());
        self.slots
            .values()
            .flatten()
            .all(|c| seen.insert(c.label.as_str()))
    }

    /// Arbitration passes performed.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Label visits performed (each commits or consumes one proposal).
    pub fn steps(&self) -> usize {
        self.steps
    }
}
