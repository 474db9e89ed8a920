//! Shared helpers for database unit tests.

use chrono::{DateTime, TimeZone, Utc};
use tempfile::{tempdir, TempDir};

use crate::database::{Database, DatabaseConfig};
use crate::{GuestId, Reservation, ScheduleId, RESERVATION_PRICE};

/// Opens a fresh database as `test.db` in a temporary directory.
///
/// The directory is returned so it lives as long as the test needs it.
pub fn create_test_database() -> (Database, TempDir) {
    let dir = tempdir().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
    (db, dir)
}

pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 3, 17, 0, 0).unwrap()
}

/// A ready-to-play reservation for `guest` on schedule 1, not yet saved.
pub fn test_reservation(guest: i64) -> Reservation {
    Reservation::builder(
        GuestId::new(guest),
        ScheduleId::new(1),
        test_start(),
        RESERVATION_PRICE,
    )
    .created_at(test_start() - chrono::Duration::days(3))
    .build()
    .unwrap()
}
