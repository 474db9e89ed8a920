//! Reservation pricing and the time-based refund policy.
//!
//! The refund owed on cancellation depends on how much notice the guest
//! gives before the slot starts. Notice is compared against each tier's
//! threshold with a strict "more than", so a cancellation exactly 24 hours
//! ahead falls into the 12-24 hour tier.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// The fixed amount charged for a booking unless configured otherwise.
pub const RESERVATION_PRICE: Decimal = Decimal::TEN;

/// One row of the refund table.
///
/// Applies when the notice is strictly greater than `min_notice_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefundTier {
    /// Exclusive lower bound on the notice, in hours.
    pub min_notice_hours: u32,
    /// Share of the current value refunded, 0 to 100.
    pub percent: u32,
}

impl RefundTier {
    /// Creates a tier.
    #[must_use]
    pub const fn new(min_notice_hours: u32, percent: u32) -> Self {
        Self {
            min_notice_hours,
            percent,
        }
    }

    fn threshold(self) -> Duration {
        Duration::hours(i64::from(self.min_notice_hours))
    }
}

/// An ordered refund table.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use courtside::{RefundPolicy, RESERVATION_PRICE};
/// use rust_decimal::Decimal;
///
/// let policy = RefundPolicy::standard();
/// assert_eq!(policy.refund_for(RESERVATION_PRICE, Duration::hours(48)), Decimal::TEN);
/// assert_eq!(policy.refund_for(RESERVATION_PRICE, Duration::hours(20)), Decimal::new(75, 1));
/// assert_eq!(policy.refund_for(RESERVATION_PRICE, Duration::hours(5)), Decimal::new(5, 0));
/// assert_eq!(policy.refund_for(RESERVATION_PRICE, Duration::minutes(90)), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundPolicy {
    // Sorted by descending threshold.
    tiers: Vec<RefundTier>,
}

impl RefundPolicy {
    /// The standard table: more than 24h 100%, more than 12h 75%, more than
    /// 2h 50%, otherwise nothing.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RefundTier::new(24, 100),
                RefundTier::new(12, 75),
                RefundTier::new(2, 50),
            ],
        }
    }

    /// Builds a policy from tiers in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tier refunds more than 100%
    /// - Two tiers share a threshold
    /// - A shorter notice would earn a larger refund than a longer one
    pub fn new(mut tiers: Vec<RefundTier>) -> Result<Self, ValidationError> {
        if let Some(tier) = tiers.iter().find(|t| t.percent > 100) {
            return Err(ValidationError {
                field: "refund_policy".into(),
                message: format!(
                    "tier above {}h refunds {}%, which exceeds 100%",
                    tier.min_notice_hours, tier.percent
                ),
            });
        }

        tiers.sort_by(|a, b| b.min_notice_hours.cmp(&a.min_notice_hours));

        for pair in tiers.windows(2) {
            let (longer, shorter) = (pair[0], pair[1]);
            if longer.min_notice_hours == shorter.min_notice_hours {
                return Err(ValidationError {
                    field: "refund_policy".into(),
                    message: format!("duplicate tier for {}h", longer.min_notice_hours),
                });
            }
            if shorter.percent > longer.percent {
                return Err(ValidationError {
                    field: "refund_policy".into(),
                    message: format!(
                        "tier above {}h refunds more than tier above {}h",
                        shorter.min_notice_hours, longer.min_notice_hours
                    ),
                });
            }
        }

        Ok(Self { tiers })
    }

    /// Returns the tiers, longest notice first.
    #[must_use]
    pub fn tiers(&self) -> &[RefundTier] {
        &self.tiers
    }

    /// Returns the refunded percentage for the given notice.
    #[must_use]
    pub fn percent_for(&self, notice: Duration) -> u32 {
        self.tiers
            .iter()
            .find(|tier| notice > tier.threshold())
            .map_or(0, |tier| tier.percent)
    }

    /// Returns the refund owed on `value` for the given notice.
    #[must_use]
    pub fn refund_for(&self, value: Decimal, notice: Duration) -> Decimal {
        let percent = self.percent_for(notice);
        if percent == 0 {
            return Decimal::ZERO;
        }
        // The factor is at most one, so the product cannot overflow.
        value * (Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// Returns the refund owed on `value` for a slot starting at `start`,
    /// as seen at `now`.
    #[must_use]
    pub fn refund_at(&self, value: Decimal, start: DateTime<Utc>, now: DateTime<Utc>) -> Decimal {
        let refund = self.refund_for(value, start - now);
        log::debug!("refund of {refund} on {value} with {} of notice", start - now);
        refund
    }
}

impl Default for RefundPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod proptests;
