//! Show command implementation.

use crate::error::CliError;
use crate::utils::{
    build_manager, load_configuration, open_database, output_format, print_snapshot,
    GlobalOptions,
};
use clap::Args;
use courtside::ReservationId;

/// Show a reservation and the reservations it replaced.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation to show
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let manager = build_manager(&db, &config)?;

        let snapshot = manager.find_reservation(ReservationId::new(self.id))?;
        print_snapshot(&snapshot, output_format(global, &config))
    }
}
