//! Schema initialization and version checks.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_GUEST_INDEX, CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE,
    CREATE_SCHEDULES_TABLE, CREATE_SCHEDULE_INDEX, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

/// Creates all tables and indices and records the schema version.
///
/// # Errors
///
/// Returns an error if any statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use courtside::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_SCHEDULES_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_SCHEDULE_INDEX, [])?;
    conn.execute(CREATE_GUEST_INDEX, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Returns the recorded schema version, or 0 for an uninitialized database.
///
/// # Errors
///
/// Returns an error if the query fails for any reason other than a missing
/// metadata table or row.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(ref failure, Some(ref message)))
            if failure.code == rusqlite::ErrorCode::Unknown
                && message.contains("no such table") =>
        {
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Initializes a fresh database or verifies an existing one matches
/// [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
///
/// Returns `UnsupportedSchemaVersion` when the stored version differs, or a
/// database error.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        return initialize_schema(conn);
    }

    if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_schema_creates_tables() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        for table in ["reservations", "schedules"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 0, "{table} should start empty");
        }
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        // Idempotent on an initialized database.
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            }
        ));
    }

    #[test]
    fn test_schema_creates_indices() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_reservations_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 2);
    }

    #[test]
    fn test_status_check_constraint() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO reservations (guest_id, schedule_id, schedule_start, status, value, refund_value, created_at)
             VALUES (1, 1, 0, 'PLAYED', '10', '0', 0)",
            [],
        );
        assert!(result.is_err());
    }
}
