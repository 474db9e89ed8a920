//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{
    build_manager, load_configuration, open_database, output_format, print_dry_run,
    print_snapshot, GlobalOptions,
};
use clap::Args;
use courtside::ReservationId;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation to cancel
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let manager = build_manager(&db, &config)?;
        let id = ReservationId::new(self.id);

        if self.dry_run {
            let result = manager.execute_cancel(id, true)?;
            print_dry_run(global, &result);
            return Ok(());
        }

        let snapshot = manager.cancel_reservation(id)?;
        if !global.quiet {
            eprintln!("Refunded {} for reservation {id}", snapshot.refund_value);
        }
        print_snapshot(&snapshot, output_format(global, &config))
    }
}
