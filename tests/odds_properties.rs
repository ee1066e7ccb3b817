//! Property tests for conversion invariants

mod common;

use common::{continued_fraction_factory, fp, standard_ladder_factory};
use odds_formatter::{
    FixedPointDecimal, MoneylineMode, OddsFactory, OddsLadder, StandardOddsLadder, STANDARD_LADDER,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Prices 1.00 through 1000.00 as scaled integers
fn scaled_price() -> impl Strategy<Value = i64> {
    100i64..=100_000
}

fn render(scaled: i64) -> String {
    format!("{}.{:02}", scaled / 100, scaled % 100)
}

fn moneyline_value(line: &str) -> Decimal {
    line.trim_start_matches('+').parse().unwrap()
}

proptest! {
    #[test]
    fn prop_moneyline_round_trip(scaled in scaled_price()) {
        let factory = continued_fraction_factory();
        let odds = factory.from_decimal(&render(scaled)).unwrap();
        let back = factory.from_moneyline(odds.moneyline()).unwrap();
        prop_assert_eq!(back.decimal(), odds.decimal());

        let derived = OddsFactory::new().moneyline_mode(MoneylineMode::Derived);
        let back = derived.from_moneyline(odds.moneyline()).unwrap();
        prop_assert_eq!(back.moneyline(), odds.moneyline());
    }

    #[test]
    fn prop_normalization_is_idempotent(whole in 1u32..1000, fraction in 0u32..10_000) {
        let input = format!("{}.{:04}", whole, fraction);
        let once = fp(&input).to_string();
        let twice = fp(&once).to_string();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.split('.').nth(1).map(str::len), Some(2));
    }

    // 1.00 quotes as 0 and sits outside the ordering
    #[test]
    fn prop_moneyline_is_non_decreasing(a in 101i64..=100_000, b in 101i64..=100_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let factory = continued_fraction_factory();
        let low = factory.from_decimal(&render(low)).unwrap();
        let high = factory.from_decimal(&render(high)).unwrap();
        prop_assert!(moneyline_value(low.moneyline()) <= moneyline_value(high.moneyline()));
    }

    #[test]
    fn prop_moneyline_sign_follows_evens(scaled in scaled_price()) {
        let odds = continued_fraction_factory().from_decimal(&render(scaled)).unwrap();
        let line = odds.moneyline();
        if scaled == 100 {
            prop_assert_eq!(line, "0");
        } else if scaled >= 200 {
            prop_assert!(line.starts_with('+'), "{} -> {}", scaled, line);
        } else {
            prop_assert!(line.starts_with('-'), "{} -> {}", scaled, line);
        }
    }

    #[test]
    fn prop_ladder_boundaries(index in 0usize..46) {
        let rung = &STANDARD_LADDER.rungs()[index];
        let at = StandardOddsLadder.decimal_to_fractional(rung.threshold);
        prop_assert_eq!(at.as_str(), &*rung.fractional);

        let below = FixedPointDecimal::from_scaled(rung.threshold.scaled() - 1).unwrap();
        let quoted = StandardOddsLadder.decimal_to_fractional(below);
        let position = STANDARD_LADDER
            .rungs()
            .iter()
            .position(|r| r.fractional == quoted.as_str())
            .unwrap();
        prop_assert!(position <= index);
    }

    #[test]
    fn prop_ladder_misses_use_floor(scaled in 1001i64..=100_000) {
        let odds = standard_ladder_factory().from_decimal(&render(scaled)).unwrap();
        prop_assert_eq!(odds.fractional(), format!("{}/1", (scaled - 100) / 100));
    }

    #[test]
    fn prop_probability_bounds(scaled in scaled_price()) {
        let odds = continued_fraction_factory().from_decimal(&render(scaled)).unwrap();
        let probability = odds.probability();
        prop_assert!(probability > Decimal::ZERO);
        prop_assert!(probability <= Decimal::ONE_HUNDRED);
        prop_assert_eq!(probability.scale(), 2);

        let expected = (Decimal::from(10_000) / Decimal::from(scaled))
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(probability, expected);
    }

    #[test]
    fn prop_continued_fraction_within_tolerance(scaled in 101i64..=100_000) {
        let odds = continued_fraction_factory().from_decimal(&render(scaled)).unwrap();
        let (numerator, denominator) = odds.fractional().split_once('/').unwrap();
        let h: i128 = numerator.parse().unwrap();
        let k: i128 = denominator.parse().unwrap();
        let profit = i128::from(scaled - 100);

        // |h/k - profit/100| <= (profit/100) * 1e-6
        prop_assert!((h * 100 - profit * k).abs() * 1_000_000 <= profit * k);
        prop_assert!(k <= 100);
    }

    #[test]
    fn prop_fractional_input_keeps_text(numerator in 0i64..500, denominator in 1i64..500) {
        let factory = continued_fraction_factory();
        let odds = factory.from_fractional(numerator, denominator).unwrap();
        prop_assert_eq!(odds.fractional(), format!("{}/{}", numerator, denominator));

        let expected = Decimal::from(numerator) / Decimal::from(denominator) + Decimal::ONE;
        let expected = FixedPointDecimal::from_decimal(expected).unwrap();
        prop_assert_eq!(odds.decimal(), expected);
    }
}
