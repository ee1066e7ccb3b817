//! Builds [`Odds`] from any one of the three representations

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::errors::{OddsError, Result};
use crate::config::types::{ConversionConfig, FractionalStrategy, LadderConfig};
use crate::odds::fixed_point::FixedPointDecimal;
use crate::odds::fraction::{ContinuedFractionApproximator, Fraction};
use crate::odds::ladder::{
    CustomOddsLadder, LadderTable, OddsLadder, SharedOddsLadder, StandardOddsLadder,
    COMPACT_LADDER,
};
use crate::odds::moneyline::{Moneyline, MoneylineTransform};
use crate::odds::value::Odds;

/// How `from_moneyline` renders the moneyline of its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneylineMode {
    /// Caller's value, formatted with the moneyline rules (`150` -> `+150`)
    #[default]
    Echo,
    /// Recomputed from the normalized decimal
    Derived,
}

/// Odds factory
///
/// The fractional strategy is fixed when the factory is built: an injected
/// ladder, or the continued-fraction approximation when none is given. The
/// factory holds no mutable state and can be shared across threads.
///
/// # Example
///
/// ```
/// use odds_formatter::OddsFactory;
///
/// let factory = OddsFactory::new();
/// let odds = factory.from_decimal("1.50").unwrap();
///
/// assert_eq!(odds.fractional(), "1/2");
/// assert_eq!(odds.moneyline(), "-200");
/// assert_eq!(odds.probability().to_string(), "66.67");
/// ```
#[derive(Clone)]
pub struct OddsFactory {
    ladder: Option<SharedOddsLadder>,
    approximator: ContinuedFractionApproximator,
    moneyline_mode: MoneylineMode,
}

impl OddsFactory {
    /// Factory using the continued-fraction approximation
    pub fn new() -> Self {
        Self {
            ladder: None,
            approximator: ContinuedFractionApproximator::default(),
            moneyline_mode: MoneylineMode::default(),
        }
    }

    /// Factory quoting fractions from the given ladder
    pub fn with_ladder(ladder: SharedOddsLadder) -> Self {
        Self {
            ladder: Some(ladder),
            ..Self::new()
        }
    }

    /// Replace the continued-fraction tolerance
    pub fn tolerance(mut self, tolerance: Decimal) -> Self {
        self.approximator = ContinuedFractionApproximator::new(tolerance);
        self
    }

    pub fn moneyline_mode(mut self, mode: MoneylineMode) -> Self {
        self.moneyline_mode = mode;
        self
    }

    /// Build the factory described by configuration
    pub fn from_config(conversion: &ConversionConfig, ladder: &LadderConfig) -> Result<Self> {
        if conversion.tolerance <= Decimal::ZERO {
            return Err(OddsError::Configuration(format!(
                "tolerance must be positive, got {}",
                conversion.tolerance
            )));
        }

        let base = match conversion.strategy {
            FractionalStrategy::ContinuedFraction => Self::new(),
            FractionalStrategy::StandardLadder => Self::with_ladder(Arc::new(StandardOddsLadder)),
            FractionalStrategy::CustomLadder => {
                let table = if ladder.rungs.is_empty() {
                    COMPACT_LADDER.clone()
                } else {
                    LadderTable::new(ladder.rungs.clone())?
                };
                let custom = CustomOddsLadder::new(table, ladder.fallback);
                Self::with_ladder(Arc::new(custom))
            }
        };

        let factory = base
            .tolerance(conversion.tolerance)
            .moneyline_mode(conversion.moneyline);

        debug!(
            strategy = factory.strategy_name(),
            tolerance = %conversion.tolerance,
            moneyline = ?conversion.moneyline,
            "Odds factory configured"
        );

        Ok(factory)
    }

    /// Name of the fractional strategy in use
    pub fn strategy_name(&self) -> &str {
        match &self.ladder {
            Some(ladder) => ladder.name(),
            None => "continued_fraction",
        }
    }

    pub fn from_decimal(&self, decimal: &str) -> Result<Odds> {
        let decimal = FixedPointDecimal::parse(decimal)?;
        Ok(self.from_fixed_point(decimal))
    }

    /// Same as [`OddsFactory::from_decimal`] for an already normalized price
    pub fn from_fixed_point(&self, decimal: FixedPointDecimal) -> Odds {
        let fractional = self.decimal_to_fractional(decimal);
        let moneyline = MoneylineTransform::decimal_to_moneyline(decimal);
        Odds::from_parts(decimal, fractional, moneyline.to_string())
    }

    /// Odds from `numerator/denominator`, keeping the fraction as written
    pub fn from_fractional(&self, numerator: i64, denominator: i64) -> Result<Odds> {
        self.from_fraction(&Fraction::new(numerator, denominator)?)
    }

    /// Odds from fractional text such as `5/2` or `5-2`
    pub fn from_fractional_str(&self, fractional: &str) -> Result<Odds> {
        self.from_fraction(&fractional.parse()?)
    }

    pub fn from_fraction(&self, fraction: &Fraction) -> Result<Odds> {
        let decimal = fraction.to_decimal()?;
        let moneyline = MoneylineTransform::decimal_to_moneyline(decimal);
        Ok(Odds::from_parts(decimal, fraction.to_string(), moneyline.to_string()))
    }

    pub fn from_moneyline(&self, moneyline: &str) -> Result<Odds> {
        let moneyline = Moneyline::parse(moneyline)?;
        let decimal = MoneylineTransform::moneyline_to_decimal(moneyline)?;
        let fractional = self.decimal_to_fractional(decimal);

        let shown = match self.moneyline_mode {
            MoneylineMode::Echo => moneyline,
            MoneylineMode::Derived => MoneylineTransform::decimal_to_moneyline(decimal),
        };

        Ok(Odds::from_parts(decimal, fractional, shown.to_string()))
    }

    fn decimal_to_fractional(&self, decimal: FixedPointDecimal) -> String {
        match &self.ladder {
            Some(ladder) => ladder.decimal_to_fractional(decimal),
            None => self.approximator.approximate(decimal).to_string(),
        }
    }
}

impl Default for OddsFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OddsFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OddsFactory")
            .field("strategy", &self.strategy_name())
            .field("tolerance", &self.approximator.tolerance())
            .field("moneyline_mode", &self.moneyline_mode)
            .finish()
    }
}
