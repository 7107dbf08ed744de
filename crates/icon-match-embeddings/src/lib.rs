//! Embedding collaborators for Icon Match.
//!
//! Everything here sits outside the ranking core and plugs into it through
//! [`icon_match_core::Embedder`] and [`icon_match_core::Catalog`]:
//!
//! - [`WordVectorTable`]: word vectors loaded from the fastText `.vec` format
//! - [`MeanPoolEmbedder`]: mean of word vectors, zero vector for no words
//! - [`HashEmbedder`]: deterministic stand-in for tests and offline work
//! - [`associations`]: icon associations CSV and catalog building
//! - [`store`]: catalog JSON persistence
//! - [`audit`]: icons missing from the associations file
//!
//! # Example
//!
//! ```rust
//! use icon_match_embeddings::{build_catalog, parse_associations, HashEmbedder};
//!
//! let records = parse_associations("gear,cog,machine\nrocket,launch,space\n".as_bytes()).unwrap();
//! let catalog = build_catalog(&records, &HashEmbedder::with_dimension(32)).unwrap();
//! assert_eq!(catalog.len(), 2);
//! ```

pub mod associations;
pub mod audit;
pub mod error;
pub mod hash_embedder;
pub mod mean_pool;
pub mod store;
pub mod word_vectors;

pub use associations::{build_catalog, parse_associations, read_associations, IconAssociations};
pub use audit::{find_missing_icons, read_icon_list};
pub use error::{EmbeddingError, EmbeddingResult};
pub use hash_embedder::HashEmbedder;
pub use mean_pool::MeanPoolEmbedder;
pub use store::{load_catalog, save_catalog};
pub use word_vectors::WordVectorTable;
