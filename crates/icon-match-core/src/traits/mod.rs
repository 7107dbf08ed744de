//! Capability traits implemented outside the core.

mod embedder;

pub use embedder::Embedder;
