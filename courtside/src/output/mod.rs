//! Output formatting for reservation snapshots.
//!
//! Snapshots render either as human-readable text or as JSON using the
//! camelCase field names of [`ReservationSnapshot`].

mod formatters;

use crate::config::OutputFormat;
use crate::{ReservationSnapshot, Result};

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting reservation snapshots.
pub trait OutputFormatter {
    /// Format a single snapshot, including its previous-reservation chain.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_snapshot(&self, snapshot: &ReservationSnapshot) -> Result<String>;

    /// Format a list of snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_list(&self, snapshots: &[ReservationSnapshot]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtside::config::OutputFormat;
    ///
    /// let formatter = OutputFormat::Json.create_formatter();
    /// assert_eq!(formatter.format_list(&[]).unwrap(), "[]");
    /// ```
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
