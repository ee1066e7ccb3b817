//! The immutable odds aggregate

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::common::errors::Result;
use crate::odds::fixed_point::{FixedPointDecimal, DECIMAL_PRECISION, SCALE_FACTOR};

/// One price in all three representations plus its implied probability
///
/// The decimal is always normalized to two places; the probability is derived
/// from that normalized decimal, never from raw input. The fractional and
/// moneyline strings are kept exactly as computed or supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Odds {
    decimal: FixedPointDecimal,
    fractional: String,
    moneyline: String,
    probability: Decimal,
}

impl Odds {
    /// Build from caller-supplied representations
    ///
    /// Only the decimal is validated and normalized; the fractional and
    /// moneyline strings are trusted as given.
    pub fn new(
        decimal: &str,
        fractional: impl Into<String>,
        moneyline: impl Into<String>,
    ) -> Result<Self> {
        let decimal = FixedPointDecimal::parse(decimal)?;
        Ok(Self::from_parts(decimal, fractional, moneyline))
    }

    pub(crate) fn from_parts(
        decimal: FixedPointDecimal,
        fractional: impl Into<String>,
        moneyline: impl Into<String>,
    ) -> Self {
        Self {
            decimal,
            fractional: fractional.into(),
            moneyline: moneyline.into(),
            probability: implied_probability(decimal),
        }
    }

    pub fn decimal(&self) -> FixedPointDecimal {
        self.decimal
    }

    pub fn fractional(&self) -> &str {
        &self.fractional
    }

    pub fn moneyline(&self) -> &str {
        &self.moneyline
    }

    /// Implied probability as a percentage with exactly two decimal places
    pub fn probability(&self) -> Decimal {
        self.probability
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}%",
            self.decimal, self.fractional, self.moneyline, self.probability
        )
    }
}

/// `round(100 / decimal, 2)`, computed as `10000 / scaled`
fn implied_probability(decimal: FixedPointDecimal) -> Decimal {
    let mut probability = (Decimal::from(SCALE_FACTOR * SCALE_FACTOR)
        / Decimal::from(decimal.scaled()))
    .round_dp_with_strategy(DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    probability.rescale(DECIMAL_PRECISION);
    probability
}
