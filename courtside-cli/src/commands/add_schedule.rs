//! Add-schedule command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, GlobalOptions};
use chrono::{DateTime, Utc};
use clap::Args;
use courtside::config::OutputFormat;

/// Add a bookable schedule.
#[derive(Args)]
pub struct AddScheduleCommand {
    /// When play starts (RFC 3339, e.g. 2026-07-01T18:00:00Z)
    #[arg(long, value_name = "TIME")]
    pub start: String,
}

impl AddScheduleCommand {
    /// Execute the add-schedule command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start = DateTime::parse_from_rfc3339(&self.start)
            .map_err(|e| CliError::InvalidArguments(format!("--start '{}': {e}", self.start)))?
            .with_timezone(&Utc);

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let schedule = db.add_schedule(start)?;

        match output_format(global, &config) {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&schedule)
                    .map_err(std::io::Error::from)?
            ),
            OutputFormat::Text => println!("{}", schedule.id),
        }
        Ok(())
    }
}
