//! Database connection management.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A `SQLite` connection holding reservations and schedules.
///
/// Implements [`ReservationStore`](crate::ReservationStore) and
/// [`ScheduleLookup`](crate::ScheduleLookup). Several processes may open the
/// same file; writers are serialized by `SQLite` and wait up to the
/// configured busy timeout.
///
/// # Examples
///
/// ```no_run
/// use courtside::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/courtside.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    pub(super) config: DatabaseConfig,
}

impl Database {
    /// Opens the database described by `config`.
    ///
    /// Creates the parent directory when `auto_create` is set, switches to
    /// WAL journaling, applies the busy timeout and initializes or verifies
    /// the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist and `auto_create` is disabled
    /// - The file or its parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - The schema version is not supported
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if !config.auto_create {
                return Err(Error::DataDirectoryNotFound {
                    path: config.path.clone(),
                });
            }
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        if !config.read_only {
            // journal_mode reports the resulting mode as a row.
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
            super::migrations::check_schema_compatibility(&conn)?;
        }

        log::debug!("opened database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns the configuration the database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
