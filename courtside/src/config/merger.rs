//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use courtside::config::{Config, ConfigMerger};
/// use rust_decimal::Decimal;
///
/// let low = Config { reservation_price: Some(Decimal::ONE), ..Default::default() };
/// let high = Config { reservation_price: Some(Decimal::TWO), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.reservation_price, Some(Decimal::TWO));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Refund policy: complete replacement, tiers are never mixed
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.reservation_price.is_some() {
            target.reservation_price = source.reservation_price;
        }

        if source.refund_policy.is_some() {
            target.refund_policy.clone_from(&source.refund_policy);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
