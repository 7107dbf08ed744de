//! Domain types for ranking and arbitration.
//!
//! - [`Catalog`]: immutable labeled vectors, stored as a contiguous matrix
//! - [`Query`] / [`QueryId`]: one embedded passage
//! - [`Candidate`] / [`CandidateList`]: a query's ranked interest in labels
//! - [`Assignment`]: the arbitration outcome, at most one label per query

mod assignment;
mod candidate;
mod catalog;
mod query;

pub use assignment::Assignment;
pub use candidate::{Candidate, CandidateList, CandidateLists};
pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use query::{Query, QueryId};

/// A dense embedding vector of the catalog's fixed dimension.
pub type Vector = Vec<f32>;
