//! `build-catalog`: associations CSV + word vectors -> catalog JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use icon_match_core::{Config, Embedder};
use icon_match_embeddings::{build_catalog, read_associations, save_catalog};
use tracing::info;

use super::load_embedder;
use crate::error::{report, CliExitCode};

/// Arguments for the build-catalog command.
#[derive(Args, Debug)]
pub struct BuildCatalogArgs {
    /// Associations CSV: `icon,word,word,...` per line
    #[arg(long)]
    pub associations: Option<PathBuf>,

    /// Word vectors in fastText `.vec` format
    #[arg(long)]
    pub vectors: Option<PathBuf>,

    /// Load at most this many word vectors
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Output catalog JSON
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the build-catalog command.
///
/// Paths not given on the command line come from the `catalog` and
/// `embedding` config sections.
pub fn handle_build_catalog(args: BuildCatalogArgs, config: &Config) -> i32 {
    match run(args, config) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => report(&e),
    }
}

fn run(args: BuildCatalogArgs, config: &Config) -> anyhow::Result<()> {
    let associations_path = args
        .associations
        .unwrap_or_else(|| PathBuf::from(&config.catalog.associations_path));
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));

    let embedder = load_embedder(args.vectors.as_deref(), args.max_words, config)?;
    let records = read_associations(&associations_path)
        .with_context(|| format!("reading associations {}", associations_path.display()))?;

    let catalog = build_catalog(&records, &embedder).context("building catalog")?;
    save_catalog(&catalog, Some(embedder.model_id()), &out)
        .with_context(|| format!("writing catalog {}", out.display()))?;

    info!(icons = catalog.len(), out = %out.display(), "catalog ready");
    Ok(())
}
