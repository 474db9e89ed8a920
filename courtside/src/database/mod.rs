//! SQLite-backed persistence for reservations and schedules.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use courtside::database::{Database, DatabaseConfig};
//! use courtside::{GuestId, Reservation, ReservationStore, RESERVATION_PRICE};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/courtside.db")).unwrap();
//! let schedule = db.add_schedule(Utc::now() + Duration::days(1)).unwrap();
//!
//! let reservation =
//!     Reservation::builder(GuestId::new(1), schedule.id, schedule.start_time, RESERVATION_PRICE)
//!         .build()
//!         .unwrap();
//! db.save(&reservation).unwrap();
//!
//! for reservation in db.list_all().unwrap() {
//!     println!("{:?}", reservation);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
mod test_util;
mod transaction;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE,
    DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
