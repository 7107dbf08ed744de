//! `match`: rank passages against a catalog and assign icons.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use icon_match_core::config::RankingConfig;
use icon_match_core::{Config, MatchReport, PassageMatcher, Preprocessor};
use icon_match_embeddings::load_catalog;
use tracing::{info, warn};

use super::{load_embedder, read_passages};
use crate::error::{report, CliExitCode};

/// Arguments for the match command.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Catalog JSON written by `build-catalog`
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Word vectors in fastText `.vec` format
    #[arg(long)]
    pub vectors: Option<PathBuf>,

    /// Load at most this many word vectors
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Passages file, one per line (default: stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Candidates kept per passage
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Let passages share icons (each takes its own best candidate)
    #[arg(long)]
    pub no_unique: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the match command.
pub fn handle_match(args: MatchArgs, config: &Config) -> i32 {
    let json = args.json;
    let result = run(args, config).and_then(|match_report| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if json {
            serde_json::to_writer_pretty(&mut out, &match_report).context("writing JSON report")?;
            writeln!(out)?;
        } else {
            write_text_report(&mut out, &match_report)?;
        }
        Ok(())
    });

    match result {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => report(&e),
    }
}

fn run(args: MatchArgs, config: &Config) -> anyhow::Result<MatchReport> {
    let catalog_path = args
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    let catalog = load_catalog(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let embedder = load_embedder(args.vectors.as_deref(), args.max_words, config)?;

    let passages = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening passages {}", path.display()))?;
            read_passages(BufReader::new(file))?
        }
        None => read_passages(io::stdin().lock())?,
    };
    if passages.is_empty() {
        warn!("no passages to match");
    }

    let ranking = RankingConfig {
        top_n: args.top_n.unwrap_or(config.ranking.top_n),
        unique: config.ranking.unique && !args.no_unique,
    };
    let preprocessor =
        Preprocessor::new().with_extra_stop_words(config.text.extra_stop_words.iter().cloned());

    let matcher = PassageMatcher::new(&embedder, &catalog, ranking)
        .context("preparing matcher")?
        .with_preprocessor(preprocessor);
    let report = matcher.match_passages(&passages).context("matching passages")?;

    info!(
        passages = report.passages.len(),
        assigned = report.assigned_count(),
        "match complete"
    );
    Ok(report)
}

/// Human-readable report: each passage with its ranked candidates, then the
/// final assignment.
pub fn write_text_report<W: Write>(out: &mut W, report: &MatchReport) -> io::Result<()> {
    for passage in &report.passages {
        writeln!(out, "{}: {}", passage.id, passage.text)?;
        if passage.candidates.is_empty() {
            writeln!(out, "  (no candidates)")?;
        }
        for (rank, candidate) in passage.candidates.iter().enumerate() {
            writeln!(out, "  {}. {} ({:.4})", rank + 1, candidate.label, candidate.score)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Assignment ({}):",
        if report.unique { "unique" } else { "best per passage" }
    )?;
    for passage in &report.passages {
        match &passage.assigned {
            Some(candidate) => {
                writeln!(out, "  {} -> {} ({:.4})", passage.id, candidate.label, candidate.score)?
            }
            None => writeln!(out, "  {} -> (none)", passage.id)?,
        }
    }
    Ok(())
}
