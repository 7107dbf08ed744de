//! Icon Match Core Library
//!
//! Matches short text passages to the most relevant entries of a fixed
//! catalog of labeled vectors, then resolves competing claims so that each
//! passage receives a distinct entry where possible.
//!
//! # Architecture
//!
//! ```text
//! passages ──► text::Preprocessor ──► traits::Embedder ──► Query vectors
//!                                                               │
//!              ranking::rank_batch (rayon, one slot per query) ◄┘
//!                      │  uses ranking::rank ─► Catalog::score_all
//!                      ▼
//!              CandidateLists ──► arbitration::arbitrate ──► Assignment
//! ```
//!
//! This crate defines:
//! - Domain types (`Catalog`, `Query`, `Candidate`, `Assignment`)
//! - The cosine scorer and the Top-N / batch rankers
//! - The uniqueness arbitration engine
//! - The `Embedder` capability trait and the passage pipeline
//! - Error types and configuration structures
//!
//! # Example
//!
//! ```
//! use icon_match_core::{arbitrate, rank_batch, Catalog, Query};
//!
//! let catalog = Catalog::from_entries(
//!     2,
//!     vec![
//!         ("gear".to_string(), vec![1.0, 0.0]),
//!         ("rocket".to_string(), vec![0.0, 1.0]),
//!     ],
//! )
//! .unwrap();
//!
//! let queries = vec![
//!     Query::new("Paragraph 1", vec![1.0, 0.1]),
//!     Query::new("Paragraph 2", vec![0.9, 0.2]),
//! ];
//!
//! let lists = rank_batch(&queries, &catalog, 2).unwrap();
//! let assignment = arbitrate(&lists, &catalog).unwrap();
//! assert!(assignment.is_unique());
//! assert_eq!(assignment.assigned_count(), 2);
//! ```

pub mod arbitration;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod similarity;
pub mod text;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use arbitration::{arbitrate, Arbiter};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use pipeline::{MatchReport, PassageMatch, PassageMatcher};
pub use ranking::{rank, rank_batch};
pub use similarity::{cosine_similarity, try_cosine_similarity};
pub use text::{preprocess_text, Preprocessor};
pub use traits::Embedder;
pub use types::{Assignment, Candidate, CandidateList, CandidateLists, Catalog, Query, QueryId, Vector};
