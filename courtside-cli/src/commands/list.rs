//! List command implementation.

use crate::error::CliError;
use crate::utils::{build_manager, load_configuration, open_database, output_format, GlobalOptions};
use clap::Args;

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Only show reservations for this guest
    #[arg(long, value_name = "ID")]
    pub guest: Option<i64>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let manager = build_manager(&db, &config)?;

        let mut snapshots = manager.list_reservations()?;
        if let Some(guest) = self.guest {
            snapshots.retain(|s| s.guest_id.value() == guest);
        }

        let formatter = output_format(global, &config).create_formatter();
        println!("{}", formatter.format_list(&snapshots)?);
        Ok(())
    }
}
