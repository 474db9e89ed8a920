//! Main entry point for the courtside CLI.
//!
//! This is the command-line interface for the courtside reservation system.
//! It provides commands for managing court reservations:
//! - `book`: Book a schedule for a guest
//! - `show`: Show a reservation
//! - `cancel`: Cancel a reservation for a refund
//! - `reschedule`: Move a reservation to another schedule
//! - `list`: List reservations

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    courtside::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Reschedule(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::AddSchedule(cmd) => cmd.execute(&global),
        cli::Command::Schedules(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
