//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the courtside data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_directory, GlobalOptions};
use clap::Args;
use courtside::config::CONFIG_FILE;
use courtside::database::DATABASE_FILE;
use courtside::{Config, Database, DatabaseConfig, RefundPolicy, RESERVATION_PRICE};
use std::fs;
use std::path::Path;

/// Initialize courtside data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

/// The configuration written by `--with-config`: the built-in price and
/// refund table spelled out.
fn default_config() -> Config {
    Config {
        reservation_price: Some(RESERVATION_PRICE),
        refund_policy: Some(RefundPolicy::standard().tiers().to_vec()),
        ..Default::default()
    }
}

fn write_default_config(path: &Path) -> Result<(), CliError> {
    let yaml =
        serde_yaml::to_string(&default_config()).map_err(|e| CliError::Config(e.to_string()))?;
    fs::write(path, yaml)?;
    Ok(())
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here; creating the database is the
    /// point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_directory(global)?;
        let db_path = data_dir.join(DATABASE_FILE);
        let config_path = data_dir.join(CONFIG_FILE);

        if db_path.exists() && !self.overwrite {
            return Err(CliError::InvalidArguments(format!(
                "database already exists (use --overwrite to replace): {}",
                db_path.display()
            )));
        }

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!("Would initialize courtside in: {}", data_dir.display());
            if !data_dir.exists() {
                println!("  - Create data directory: {}", data_dir.display());
            }
            if db_path.exists() {
                println!("  - Remove existing database: {}", db_path.display());
            }
            println!("  - Create database: {}", db_path.display());
            if self.with_config && !config_path.exists() {
                println!("  - Create configuration file: {}", config_path.display());
            }
            return Ok(());
        }

        let data_dir_created = !data_dir.exists();
        fs::create_dir_all(&data_dir)?;

        let database_replaced = db_path.exists();
        if database_replaced {
            fs::remove_file(&db_path)?;
            for suffix in ["-wal", "-shm"] {
                let sidecar = data_dir.join(format!("{DATABASE_FILE}{suffix}"));
                if sidecar.exists() {
                    fs::remove_file(sidecar)?;
                }
            }
        }
        Database::open(DatabaseConfig::new(&db_path))?;

        let config_created = self.with_config && !config_path.exists();
        if config_created {
            write_default_config(&config_path)?;
        }

        println!("Initialized courtside in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_replaced {
            println!("  - Recreated database");
        } else {
            println!("  - Created database");
        }
        if config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
