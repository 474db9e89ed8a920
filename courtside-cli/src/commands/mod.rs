//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a schedule for a guest
//! - `show`: Show a reservation with its history
//! - `cancel`: Cancel a reservation for a refund
//! - `reschedule`: Move a reservation to another schedule
//! - `list`: List all reservations
//! - `add_schedule`: Add a bookable schedule
//! - `schedules`: List bookable schedules
//! - `init`: Initialize the data directory

pub mod add_schedule;
pub mod book;
pub mod cancel;
pub mod init;
pub mod list;
pub mod reschedule;
pub mod schedules;
pub mod show;

pub use add_schedule::AddScheduleCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reschedule::RescheduleCommand;
pub use schedules::SchedulesCommand;
pub use show::ShowCommand;
