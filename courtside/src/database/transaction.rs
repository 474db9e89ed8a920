//! Immediate-mode transactions and lock contention handling.

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Runs `f` inside a `BEGIN IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, so a concurrent writer blocks here
    /// (up to the busy timeout) rather than failing halfway through `f`.
    /// The transaction commits when `f` succeeds and rolls back otherwise.
    ///
    /// # Errors
    ///
    /// Returns `LockTimeout` if the write lock cannot be acquired in time,
    /// the closure's own error, or a database error from commit.
    pub fn immediate_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(|e| self.lock_error(e))?;

        // Dropping `tx` without commit rolls back.
        let value = f(self)?;
        tx.commit().map_err(|e| self.lock_error(e))?;
        Ok(value)
    }

    fn lock_error(&self, err: rusqlite::Error) -> Error {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, _)
                if matches!(
                    failure.code,
                    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
                ) =>
            {
                log::warn!(
                    "gave up waiting for the database lock on {}",
                    self.config.path.display()
                );
                Error::LockTimeout {
                    seconds: self.config.busy_timeout.as_secs(),
                }
            }
            other => other.into(),
        }
    }
}
