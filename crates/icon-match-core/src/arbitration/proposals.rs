//! Per-label proposal queues.
//!
//! Each label owns its proposals sorted best first and a cursor into them.
//! Consuming a proposal moves the cursor; nothing is removed from a shared
//! collection while it is being iterated.

use std::cmp::Ordering;

/// One query's claim on a label. `query` indexes the sorted query universe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Proposal {
    pub query: usize,
    pub score: f32,
}

#[derive(Debug)]
pub(crate) struct ProposalQueue<'a> {
    label: &'a str,
    proposals: Vec<Proposal>,
    cursor: usize,
}

impl<'a> ProposalQueue<'a> {
    /// Sorts by score descending, then by query index (= query id order).
    pub fn new(label: &'a str, mut proposals: Vec<Proposal>) -> Self {
        proposals.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.query.cmp(&b.query)));
        Self {
            label,
            proposals,
            cursor: 0,
        }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Current best remaining proposal.
    pub fn head(&self) -> Option<Proposal> {
        self.proposals.get(self.cursor).copied()
    }

    /// Discard the current head.
    pub fn advance(&mut self) {
        if self.cursor < self.proposals.len() {
            self.cursor += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.proposals.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.proposals.len()
    }

    /// Visit order within a pass: best head score first, then label.
    pub fn visit_cmp(&self, other: &Self) -> Ordering {
        let score = |q: &Self| q.head().map_or(f32::NEG_INFINITY, |p| p.score);
        score(other)
            .total_cmp(&score(self))
            .then_with(|| self.label.cmp(other.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_sorted_with_query_tie_break() {
        let queue = ProposalQueue::new(
            "gear",
            vec![
                Proposal { query: 2, score: 0.5 },
                Proposal { query: 1, score: 0.9 },
                Proposal { query: 0, score: 0.5 },
            ],
        );
        assert_eq!(queue.head(), Some(Proposal { query: 1, score: 0.9 }));
        assert_eq!(queue.remaining(), 3);
    }

    #[test]
    fn test_advance_until_exhausted() {
        let mut queue = ProposalQueue::new(
            "gear",
            vec![Proposal { query: 0, score: 0.4 }, Proposal { query: 1, score: 0.2 }],
        );
        queue.advance();
        assert_eq!(queue.head().map(|p| p.query), Some(1));
        queue.advance();
        assert!(queue.is_exhausted());
        assert!(queue.head().is_none());
        queue.advance();
        assert_eq!(queue.remaining(), 0);
    }
}
