//! Similarity ranking of queries against the catalog.
//!
//! - [`rank`]: Top-N entries for one query vector
//! - [`rank_batch`]: [`rank`] applied independently to every query, in parallel
//!
//! Queries never influence each other here; cross-query interaction is left
//! entirely to [`crate::arbitration`].

mod batch;
mod top_n;

pub use batch::rank_batch;
pub use top_n::rank;
