//! Property-based tests for the refund policy.

use super::{RefundPolicy, RESERVATION_PRICE};
use chrono::Duration;
use proptest::prelude::*;
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;

// Strategy for generating reservation values with cents
fn value_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // More than a day of notice refunds everything
    #[test]
    fn full_refund_beyond_a_day(extra in 1i64..(30 * 24 * MINUTES_PER_HOUR), value in value_strategy()) {
        let notice = Duration::hours(24) + Duration::minutes(extra);
        prop_assert_eq!(RefundPolicy::standard().refund_for(value, notice), value);
    }

    // (12h, 24h] refunds three quarters
    #[test]
    fn three_quarters_between_twelve_and_twenty_four(minutes in 1i64..=(12 * MINUTES_PER_HOUR), value in value_strategy()) {
        let notice = Duration::hours(12) + Duration::minutes(minutes);
        let expected = value * Decimal::new(75, 2);
        prop_assert_eq!(RefundPolicy::standard().refund_for(value, notice), expected);
    }

    // (2h, 12h] refunds half
    #[test]
    fn half_between_two_and_twelve(minutes in 1i64..=(10 * MINUTES_PER_HOUR), value in value_strategy()) {
        let notice = Duration::hours(2) + Duration::minutes(minutes);
        let expected = value / Decimal::TWO;
        prop_assert_eq!(RefundPolicy::standard().refund_for(value, notice), expected);
    }

    // (0h, 2h] refunds nothing
    #[test]
    fn nothing_within_two_hours(minutes in 1i64..=(2 * MINUTES_PER_HOUR)) {
        let notice = Duration::minutes(minutes);
        prop_assert_eq!(RefundPolicy::standard().refund_for(RESERVATION_PRICE, notice), Decimal::ZERO);
    }

    // Refund never exceeds the value and never goes negative
    #[test]
    fn refund_bounded_by_value(minutes in -(48 * MINUTES_PER_HOUR)..(96 * MINUTES_PER_HOUR), value in value_strategy()) {
        let refund = RefundPolicy::standard().refund_for(value, Duration::minutes(minutes));
        prop_assert!(refund >= Decimal::ZERO);
        prop_assert!(refund <= value);
    }

    // More notice never earns a smaller refund
    #[test]
    fn refund_monotonic_in_notice(a in 0i64..(72 * MINUTES_PER_HOUR), b in 0i64..(72 * MINUTES_PER_HOUR)) {
        let policy = RefundPolicy::standard();
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            policy.percent_for(Duration::minutes(short)) <= policy.percent_for(Duration::minutes(long))
        );
    }
}
