//! Book command implementation.

use crate::error::CliError;
use crate::utils::{
    build_manager, load_configuration, open_database, output_format, print_dry_run,
    print_snapshot, GlobalOptions,
};
use clap::Args;
use courtside::config::OutputFormat;
use courtside::{GuestId, ScheduleId};

/// Book a schedule for a guest.
#[derive(Args)]
pub struct BookCommand {
    /// Guest making the booking
    #[arg(long, value_name = "ID")]
    pub guest: i64,

    /// Schedule to book
    #[arg(long, value_name = "ID")]
    pub schedule: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    ///
    /// Text output is just the new reservation id, so scripts can capture it.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let manager = build_manager(&db, &config)?;

        let guest = GuestId::new(self.guest);
        let schedule = ScheduleId::new(self.schedule);

        if self.dry_run {
            let result = manager.execute_book(guest, schedule, true)?;
            print_dry_run(global, &result);
            return Ok(());
        }

        let snapshot = manager.book_reservation(guest, schedule)?;
        match output_format(global, &config) {
            OutputFormat::Json => print_snapshot(&snapshot, OutputFormat::Json)?,
            OutputFormat::Text => {
                if let Some(id) = snapshot.id {
                    println!("{id}");
                }
            }
        }

        Ok(())
    }
}
