//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and output
//! formatting.

use crate::error::CliError;
use courtside::config::OutputFormat;
use courtside::database::{resolve_data_dir, DATABASE_FILE};
use courtside::{
    Config, ConfigBuilder, Database, DatabaseConfig, ReservationManager, ReservationSnapshot,
    SystemClock,
};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Override the configured output format.
    pub format: Option<OutputFormat>,
}

/// A manager over the CLI's database.
pub type Manager<'a> = ReservationManager<&'a Database, &'a Database, SystemClock>;

/// Resolve the data directory: global option, then `COURTSIDE_DATA_DIR`,
/// then `~/.courtside`.
pub fn resolve_data_directory(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The configuration file in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_directory(global)?;
    log::debug!("loading configuration from {}", data_dir.display());

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_directory(global)?.join(DATABASE_FILE);
    let disable_autoinit = global.disable_autoinit || config.disable_autoinit.unwrap_or(false);

    if !db_path.exists() && disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    log::debug!("opening database at {}", db_path.display());
    let mut db_config = DatabaseConfig::new(db_path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Build a reservation manager priced and refunding per `config`.
pub fn build_manager<'a>(db: &'a Database, config: &Config) -> Result<Manager<'a>, CliError> {
    let manager = ReservationManager::new(db, db, SystemClock)
        .with_config(config)
        .map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!(
        "Booking price {} with {} refund tiers",
        manager.price(),
        manager.policy().tiers().len()
    );
    Ok(manager)
}

/// The output format: global flag, then configuration, then text.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global
        .format
        .or(config.output_format)
        .unwrap_or_default()
}

/// Print a snapshot on stdout in the selected format.
pub fn print_snapshot(snapshot: &ReservationSnapshot, format: OutputFormat) -> Result<(), CliError> {
    println!("{}", format.create_formatter().format_snapshot(snapshot)?);
    Ok(())
}

/// Print a plan preview on stderr.
pub fn print_dry_run(global: &GlobalOptions, result: &courtside::ExecutionResult) {
    if global.quiet {
        return;
    }
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in result.actions_taken.iter().enumerate() {
        eprintln!("  {}. {action}", i + 1);
    }
    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("  - {warning}");
        }
    }
}
