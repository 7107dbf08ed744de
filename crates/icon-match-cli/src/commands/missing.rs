//! `missing`: icons in a reference list with no associations record.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use icon_match_core::Config;
use icon_match_embeddings::{find_missing_icons, read_associations, read_icon_list};
use tracing::info;

use crate::error::{report, CliExitCode};

/// Arguments for the missing command.
#[derive(Args, Debug)]
pub struct MissingArgs {
    /// Icon names, one per line
    #[arg(long)]
    pub icons: PathBuf,

    /// Associations CSV (default: catalog.associations_path)
    #[arg(long)]
    pub associations: Option<PathBuf>,
}

/// Execute the missing command. Missing icons go to stdout, one per line.
pub fn handle_missing(args: MissingArgs, config: &Config) -> i32 {
    match run(args, config) {
        Ok(missing) => {
            for icon in missing {
                println!("{}", icon);
            }
            CliExitCode::Success.into()
        }
        Err(e) => report(&e),
    }
}

fn run(args: MissingArgs, config: &Config) -> anyhow::Result<Vec<String>> {
    let associations_path = args
        .associations
        .unwrap_or_else(|| PathBuf::from(&config.catalog.associations_path));

    let file = File::open(&args.icons)
        .with_context(|| format!("opening icon list {}", args.icons.display()))?;
    let icons = read_icon_list(BufReader::new(file)).context("reading icon list")?;
    let records = read_associations(&associations_path)
        .with_context(|| format!("reading associations {}", associations_path.display()))?;

    let missing = find_missing_icons(&icons, &records);
    info!(
        listed = icons.len(),
        associated = records.len(),
        missing = missing.len(),
        "icon audit complete"
    );
    Ok(missing)
}
