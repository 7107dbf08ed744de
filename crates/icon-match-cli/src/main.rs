//! Icon Match CLI
//!
//! # Commands
//!
//! - `build-catalog`: embed an associations CSV into a catalog JSON file
//! - `match`: rank passages against a catalog and assign distinct icons
//! - `missing`: list icons that have no associations record
//!
//! Exit code 0 on success, 1 on any failure. Failures are logged to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use icon_match_core::Config;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// Icon Match - match text passages to icons
#[derive(Parser)]
#[command(name = "icon-match")]
#[command(version)]
#[command(about = "Match text passages to icons by embedding similarity")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML config file (default: config/default.toml + ICON_MATCH__* env)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an icon catalog from an associations CSV and word vectors
    BuildCatalog(commands::build_catalog::BuildCatalogArgs),
    /// Match passages (one per line) to icons
    ///
    /// Each passage gets its top-N candidate icons. Unless --no-unique is
    /// given, competing passages are arbitrated so no icon is used twice.
    Match(commands::match_cmd::MatchArgs),
    /// List icons from a reference list that have no associations
    Missing(commands::missing::MissingArgs),
}

fn main() {
    let cli = Cli::parse();

    let loaded = commands::load_config(cli.config.as_deref());
    let default_level = loaded
        .as_ref()
        .map(|c| c.logging.level.to_lowercase())
        .unwrap_or_else(|_| "warn".to_string());

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config: Config = match loaded {
        Ok(config) => config,
        Err(e) => std::process::exit(error::report(&e)),
    };

    let exit_code = match cli.command {
        Commands::BuildCatalog(args) => commands::build_catalog::handle_build_catalog(args, &config),
        Commands::Match(args) => commands::match_cmd::handle_match(args, &config),
        Commands::Missing(args) => commands::missing::handle_missing(args, &config),
    };

    std::process::exit(exit_code);
}
