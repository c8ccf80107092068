//! Qzene - recipe catalog filtering from the command line
//!
//! # Overview
//!
//! This binary is a thin front end over the `qzene` library. It initializes:
//! - Configuration ([`ConfigManager`]): `Qzene Settings.yaml` plus `QZENE_*`
//!   environment overrides
//! - Logging infrastructure (daily rotating file, optional stderr mirror)
//! - The recipe catalog (configured file or the bundled dataset)
//! - A [`FilterSession`] for the requested view
//!
//! # Execution Flow
//!
//! 1. Parse command-line flags
//! 2. Load settings from `Qzene Data/` (or `--config-dir`)
//! 3. Initialize logging → logs/qzene.<date>, then record where settings
//!    came from
//! 4. Load and ingest the catalog, skipping malformed entries
//! 5. Run the subcommand and print its output

use anyhow::Result;
use clap::Parser;
use qzene::cli::{self, Cli, Commands};
use qzene::{APP_NAME, ConfigManager, FilterSession, VERSION};

fn main() -> Result<()> {
    let args = Cli::parse();

    let config_manager = ConfigManager::new(&args.config_dir)?;
    let mut settings = config_manager.load_settings()?;

    if args.debug {
        settings.debug_mode = true;
        settings.console_logging = true;
    }

    // Held until exit so buffered log lines are flushed
    let _log_guard = qzene::logging::setup_from_settings(&settings)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    config_manager.log_settings_source();

    let report = config_manager.load_catalog(&settings, args.catalog.as_deref())?;
    if !report.rejected.is_empty() {
        tracing::warn!(
            "{} catalog entries were rejected during ingestion",
            report.rejected.len()
        );
    }

    let mut session = FilterSession::new(report.catalog);

    let output = match &args.command {
        Commands::List(list_args) => cli::run_list(&mut session, list_args),
        Commands::Cuisines => cli::run_cuisines(&session),
        Commands::Admin { tab, search } => cli::run_admin(&session, *tab, search),
    };

    print!("{}", output);

    tracing::info!("Done");
    Ok(())
}
