//! Common test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use odds_formatter::{
    CustomOddsLadder, FallbackRule, FixedPointDecimal, LadderRung, LadderTable, Odds, OddsFactory,
    StandardOddsLadder,
};
use tempfile::NamedTempFile;

/// Factory with the continued-fraction strategy
pub fn continued_fraction_factory() -> OddsFactory {
    OddsFactory::new()
}

/// Factory quoting from the 46-rung market ladder
pub fn standard_ladder_factory() -> OddsFactory {
    OddsFactory::with_ladder(Arc::new(StandardOddsLadder))
}

/// Factory quoting from the compact ladder with the floor fallback
pub fn compact_ladder_factory() -> OddsFactory {
    OddsFactory::with_ladder(Arc::new(CustomOddsLadder::default()))
}

/// Every factory flavour, labelled
pub fn all_factories() -> Vec<(&'static str, OddsFactory)> {
    vec![
        ("continued_fraction", continued_fraction_factory()),
        ("standard", standard_ladder_factory()),
        ("compact", compact_ladder_factory()),
    ]
}

pub fn fp(decimal: &str) -> FixedPointDecimal {
    FixedPointDecimal::parse(decimal).unwrap()
}

/// A three-rung ladder that quotes 1.90 as 10/11
pub fn short_ladder(fallback: FallbackRule) -> CustomOddsLadder {
    let table = LadderTable::new(vec![
        LadderRung::new(fp("1.50"), "1/2"),
        LadderRung::new(fp("1.91"), "10/11"),
        LadderRung::new(fp("2.00"), "evens"),
    ])
    .unwrap();
    CustomOddsLadder::new(table, fallback)
}

/// Assert all four rendered fields of a result
pub fn assert_odds(odds: &Odds, decimal: &str, fractional: &str, moneyline: &str, probability: &str) {
    pretty_assertions::assert_eq!(
        (
            odds.decimal().to_string(),
            odds.fractional(),
            odds.moneyline(),
            odds.probability().to_string(),
        ),
        (decimal.to_string(), fractional, moneyline, probability.to_string())
    );
}

/// Write `contents` to a temporary `.toml` file
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Sample configuration files
pub mod configs {
    pub const STANDARD_LADDER: &str = r#"
[conversion]
strategy = "standard_ladder"
moneyline = "derived"

[settings]
log_level = "debug"
"#;

    pub const CUSTOM_LADDER: &str = r#"
[conversion]
strategy = "custom_ladder"

[ladder]
fallback = "rounded"

[[ladder.rungs]]
threshold = "1.50"
fractional = "1/2"

[[ladder.rungs]]
threshold = "1.91"
fractional = "10/11"

[[ladder.rungs]]
threshold = "2.00"
fractional = "evens"
"#;

    pub const LOOSE_TOLERANCE: &str = r#"
[conversion]
tolerance = "0.02"
"#;

    pub const UNORDERED_LADDER: &str = r#"
[conversion]
strategy = "custom_ladder"

[[ladder.rungs]]
threshold = "2.00"
fractional = "1/1"

[[ladder.rungs]]
threshold = "1.50"
fractional = "1/2"
"#;

    pub const UNKNOWN_STRATEGY: &str = r#"
[conversion]
strategy = "nearest_guess"
"#;
}
