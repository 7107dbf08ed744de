use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::QueryId;

/// A (label, score) pairing: one query's interest in one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub score: f32,
}

impl Candidate {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Ranking order: score descending, then label ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Candidates for one query, best first, at most N long.
pub type CandidateList = Vec<Candidate>;

/// Ranked candidate lists keyed by query.
pub type CandidateLists = BTreeMap<QueryId, CandidateList>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_cmp_orders_by_score_then_label() {
        let mut list = vec![
            Candidate::new("rocket", 0.3),
            Candidate::new("gear", 0.9),
            Candidate::new("cog", 0.3),
        ];
        list.sort_by(Candidate::rank_cmp);
        let labels: Vec<&str> = list.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["gear", "cog", "rocket"]);
    }
}
