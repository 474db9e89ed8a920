//! Reschedule command implementation.

use crate::error::CliError;
use crate::utils::{
    build_manager, load_configuration, open_database, output_format, print_dry_run,
    print_snapshot, GlobalOptions,
};
use clap::Args;
use courtside::{ReservationId, ScheduleId};

/// Move a reservation to another schedule.
#[derive(Args)]
pub struct RescheduleCommand {
    /// Reservation to move
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Schedule to move it to
    #[arg(value_name = "SCHEDULE_ID")]
    pub schedule_id: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RescheduleCommand {
    /// Execute the reschedule command.
    ///
    /// Prints the replacement reservation, with the original nested under it.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let manager = build_manager(&db, &config)?;
        let id = ReservationId::new(self.id);
        let schedule = ScheduleId::new(self.schedule_id);

        if self.dry_run {
            let result = manager.execute_reschedule(id, schedule, true)?;
            print_dry_run(global, &result);
            return Ok(());
        }

        let snapshot = manager.reschedule_reservation(id, schedule)?;
        print_snapshot(&snapshot, output_format(global, &config))
    }
}
