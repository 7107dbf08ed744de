//! CLI command handlers
//!
//! Handlers take their clap `Args` plus the loaded [`Config`] and return a
//! process exit code.

pub mod build_catalog;
pub mod match_cmd;
pub mod missing;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use icon_match_core::Config;
use icon_match_embeddings::{MeanPoolEmbedder, WordVectorTable};
use tracing::debug;

/// Load `path` when given, otherwise the layered default configuration.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Config::load().context("loading configuration"),
    }
}

/// Load word vectors from `path` (or the configured path) into a mean-pool embedder.
///
/// The table dimension must match `embedding.dimension`.
pub fn load_embedder(
    path: Option<&Path>,
    max_words: Option<usize>,
    config: &Config,
) -> anyhow::Result<MeanPoolEmbedder> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.embedding.vectors_path));

    let table = WordVectorTable::load(&path, max_words)
        .with_context(|| format!("loading word vectors {}", path.display()))?;

    if table.dimension() != config.embedding.dimension {
        bail!(
            "word vectors in {} have dimension {}, config expects {}",
            path.display(),
            table.dimension(),
            config.embedding.dimension
        );
    }

    Ok(MeanPoolEmbedder::new(table))
}

/// One passage per non-blank line, trimmed.
pub fn read_passages<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut passages = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading passages")?;
        let passage = line.trim();
        if !passage.is_empty() {
            passages.push(passage.to_string());
        }
    }
    debug!(passages = passages.len(), "read passages");
    Ok(passages)
}
