//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from several
//! sources can be merged; unset fields fall back to built-in defaults.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::refund::RefundTier;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use courtside::config::{Config, OutputFormat};
/// use rust_decimal::Decimal;
///
/// let config = Config {
///     reservation_price: Some(Decimal::new(15, 0)),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert!(config.refund_policy.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Price charged for a new booking.
    pub reservation_price: Option<Decimal>,

    /// Refund tiers replacing the standard table.
    pub refund_policy: Option<Vec<RefundTier>>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for printed reservations.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

/// Output format for printed reservations.
///
/// # Examples
///
/// ```
/// use courtside::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(OutputFormat::default().to_string(), "text");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON snapshots.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}
