//! Schedules command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, GlobalOptions};
use clap::Args;
use courtside::config::OutputFormat;
use courtside::Schedule;

/// List bookable schedules.
#[derive(Args)]
pub struct SchedulesCommand {}

fn format_text(schedules: &[Schedule]) -> String {
    let mut lines = vec![format!("{:<6} START", "ID")];
    lines.extend(
        schedules
            .iter()
            .map(|s| format!("{:<6} {}", s.id.to_string(), s.start_time.to_rfc3339())),
    );
    lines.join("\n")
}

impl SchedulesCommand {
    /// Execute the schedules command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let schedules = db.list_schedules()?;

        let output = match output_format(global, &config) {
            OutputFormat::Json => serde_json::to_string_pretty(&schedules)
                .map_err(std::io::Error::from)?,
            OutputFormat::Text => format_text(&schedules),
        };
        println!("{output}");
        Ok(())
    }
}
