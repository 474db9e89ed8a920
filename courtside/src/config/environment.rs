//! Environment variable handling for configuration overrides.
//!
//! `COURTSIDE_*` variables override values from configuration files.

use std::env;

use rust_decimal::Decimal;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides [`Config::reservation_price`].
pub const RESERVATION_PRICE_ENV: &str = "COURTSIDE_RESERVATION_PRICE";
/// Overrides [`Config::maximum_lock_wait_seconds`].
pub const MAXIMUM_LOCK_WAIT_SECONDS_ENV: &str = "COURTSIDE_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "COURTSIDE_OUTPUT_FORMAT";
/// Overrides [`Config::disable_autoinit`].
pub const DISABLE_AUTOINIT_ENV: &str = "COURTSIDE_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use courtside::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a malformed price or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(price) = env::var(RESERVATION_PRICE_ENV) {
            config.reservation_price = Some(
                price
                    .trim()
                    .parse::<Decimal>()
                    .map_err(|e| Error::Validation {
                        field: RESERVATION_PRICE_ENV.into(),
                        message: format!("Invalid decimal '{price}': {e}"),
                    })?,
            );
        }

        if let Ok(seconds) = env::var(MAXIMUM_LOCK_WAIT_SECONDS_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: MAXIMUM_LOCK_WAIT_SECONDS_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(
                    format
                        .parse::<OutputFormat>()
                        .map_err(|message| Error::Validation {
                            field: OUTPUT_FORMAT_ENV.into(),
                            message,
                        })?,
                );
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
