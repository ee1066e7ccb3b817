//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::odds::{FallbackRule, LadderRung, MoneylineMode, DEFAULT_TOLERANCE};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// How odds are converted
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Ladder used by the `custom_ladder` strategy
    #[serde(default)]
    pub ladder: LadderConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Source of the fractional representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionalStrategy {
    /// Continued-fraction approximation of `decimal - 1`
    #[default]
    ContinuedFraction,
    /// The 46-rung market ladder
    StandardLadder,
    /// The `[ladder]` section, or the compact ladder when it has no rungs
    CustomLadder,
}

/// Conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Fractional strategy
    #[serde(default)]
    pub strategy: FractionalStrategy,
    /// Relative tolerance of the continued-fraction approximation
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Moneyline shown by `from_moneyline` results
    #[serde(default)]
    pub moneyline: MoneylineMode,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strategy: FractionalStrategy::default(),
            tolerance: default_tolerance(),
            moneyline: MoneylineMode::default(),
        }
    }
}

fn default_tolerance() -> Decimal {
    DEFAULT_TOLERANCE
}

/// Custom ladder definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Rule for prices above the last rung
    #[serde(default)]
    pub fallback: FallbackRule,
    /// Rungs in strictly increasing threshold order
    #[serde(default)]
    pub rungs: Vec<LadderRung>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Iterations per strategy for `odds bench`
    #[serde(default = "default_bench_iterations")]
    pub bench_iterations: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            bench_iterations: default_bench_iterations(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bench_iterations() -> usize {
    50_000
}
