//! Odds Formatter Library
//!
//! Converts betting odds between decimal, fractional and moneyline form and
//! derives the implied probability of each price.

pub mod common;
pub mod config;
pub mod odds;

// Re-export commonly used types
pub use common::bench::{BenchmarkStats, SpeedTest};
pub use common::errors::{OddsError, Result};
pub use config::types::{AppConfig, FractionalStrategy};
pub use odds::{
    ContinuedFractionApproximator, CustomOddsLadder, FallbackRule, FixedPointDecimal, Fraction,
    FractionBar, LadderRung, LadderTable, Moneyline, MoneylineMode, MoneylineTransform, Odds,
    OddsFactory, OddsLadder, SharedOddsLadder, StandardOddsLadder, COMPACT_LADDER, STANDARD_LADDER,
};
