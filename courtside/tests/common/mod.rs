//! Common test utilities for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use courtside::{Database, DatabaseConfig};
use tempfile::TempDir;

/// The instant every scenario treats as "now".
#[allow(dead_code)]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap()
}

/// Opens a fresh database in a temporary directory.
///
/// The directory is returned so the file outlives the test body.
#[allow(dead_code)]
pub fn create_test_database() -> (Database, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
    (db, dir)
}

/// Opens another connection to the database inside `dir`.
#[allow(dead_code)]
pub fn reopen(dir: &TempDir) -> Database {
    Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap()
}
