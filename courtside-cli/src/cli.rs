//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddScheduleCommand, BookCommand, CancelCommand, InitCommand, ListCommand, RescheduleCommand,
    SchedulesCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use courtside::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for managing tennis court reservations.
#[derive(Parser)]
#[command(name = "courtside")]
#[command(version, about = "Manage tennis court reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "COURTSIDE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a schedule for a guest
    Book(BookCommand),

    /// Show a reservation and the reservations it replaced
    Show(ShowCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Move a reservation to another schedule
    Reschedule(RescheduleCommand),

    /// List all reservations
    List(ListCommand),

    /// Add a bookable schedule
    AddSchedule(AddScheduleCommand),

    /// List bookable schedules
    Schedules(SchedulesCommand),

    /// Initialize the data directory and database
    Init(InitCommand),
}
