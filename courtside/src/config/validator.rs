//! Configuration validation.

use rust_decimal::Decimal;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::refund::{RefundPolicy, RefundTier};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use courtside::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative price, a zero lock timeout,
    /// or a refund table [`RefundPolicy::new`] rejects.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(price) = config.reservation_price {
            Self::validate_price(price)?;
        }

        if let Some(ref tiers) = config.refund_policy {
            Self::validate_refund_policy(tiers)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_price(price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(Error::Validation {
                field: "reservation_price".into(),
                message: format!("Price cannot be negative: {price}"),
            });
        }
        Ok(())
    }

    fn validate_refund_policy(tiers: &[RefundTier]) -> Result<()> {
        RefundPolicy::new(tiers.to_vec())?;
        Ok(())
    }
}
