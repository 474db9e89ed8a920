//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::refund::RefundTier;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(price_strategy()),
        prop::option::of(1u64..=600),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(price, lock_wait, format, autoinit)| Config {
            reservation_price: price,
            maximum_lock_wait_seconds: lock_wait,
            output_format: format,
            disable_autoinit: autoinit,
            ..Default::default()
        })
}

// Distinct thresholds with percents that never grow as notice shrinks.
fn monotone_tiers_strategy() -> impl Strategy<Value = Vec<RefundTier>> {
    prop::collection::btree_set(0u32..=720, 1..6).prop_flat_map(|hours| {
        let count = hours.len();
        prop::collection::vec(0u32..=100, count).prop_map(move |mut percents| {
            percents.sort_unstable();
            hours
                .iter()
                .zip(percents)
                .map(|(&h, p)| RefundTier::new(h, p))
                .collect()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set fields from the higher-precedence config always win
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.reservation_price, high.reservation_price.or(low.reservation_price));
        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Generated configs are always valid
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Monotone tables validate whatever order they are listed in
    #[test]
    fn monotone_tiers_validate_in_any_order(mut tiers in monotone_tiers_strategy()) {
        tiers.reverse();
        let config = Config { refund_policy: Some(tiers), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Any tier above 100% is rejected
    #[test]
    fn oversized_percent_rejected(hours in 0u32..=720, percent in 101u32..=1000) {
        let config = Config {
            refund_policy: Some(vec![RefundTier::new(hours, percent)]),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}
