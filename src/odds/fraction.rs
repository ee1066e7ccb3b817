//! Fractional odds and the continued-fraction approximator

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{OddsError, Result};
use crate::odds::fixed_point::{FixedPointDecimal, SCALE_FACTOR};

/// Default tolerance, relative to `decimal - 1`
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.000001);

/// Upper bound on expansion steps
pub const MAX_ITERATIONS: usize = 64;

/// Separator between numerator and denominator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionBar {
    /// `5/2`
    #[default]
    Slash,
    /// `5-2`
    Dash,
}

impl FractionBar {
    pub fn as_char(&self) -> char {
        match self {
            FractionBar::Slash => '/',
            FractionBar::Dash => '-',
        }
    }
}

/// Fractional odds: profit `numerator` per `denominator` staked
///
/// Not necessarily in lowest terms; `4/6` and `40/85` are legitimate market
/// prices and keep their written form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
    bar: FractionBar,
}

impl Fraction {
    /// Validate and build a fraction written with `/`
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        let numerator =
            u64::try_from(numerator).map_err(|_| OddsError::InvalidNumerator(numerator))?;
        if denominator < 1 {
            return Err(OddsError::InvalidDenominator(denominator));
        }

        Ok(Self {
            numerator,
            denominator: denominator as u64,
            bar: FractionBar::Slash,
        })
    }

    /// `0/1`, the fraction for a price of 1.00
    pub fn zero() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
            bar: FractionBar::Slash,
        }
    }

    fn from_parts(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
            bar: FractionBar::Slash,
        }
    }

    /// Same value written with another separator
    pub fn with_bar(self, bar: FractionBar) -> Self {
        Self { bar, ..self }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn bar(&self) -> FractionBar {
        self.bar
    }

    /// Decimal price `numerator / denominator + 1`, normalized to two places
    pub fn to_decimal(&self) -> Result<FixedPointDecimal> {
        let ratio = Decimal::from(self.numerator)
            .checked_div(Decimal::from(self.denominator))
            .and_then(|r| r.checked_add(Decimal::ONE))
            .ok_or_else(|| OddsError::InvalidFraction(self.to_string()))?;

        FixedPointDecimal::from_decimal(ratio).map_err(|_| OddsError::InvalidFraction(self.to_string()))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.numerator, self.bar.as_char(), self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = OddsError;

    /// Parse `n/d` or `n-d`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OddsError::InvalidFraction(s.to_string());
        let trimmed = s.trim();

        let (bar, (numerator, denominator)) = match trimmed.split_once('/') {
            Some(parts) => (FractionBar::Slash, parts),
            None => (FractionBar::Dash, trimmed.split_once('-').ok_or_else(invalid)?),
        };

        let numerator: i64 = numerator.trim().parse().map_err(|_| invalid())?;
        let denominator: i64 = denominator.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(numerator, denominator)?.with_bar(bar))
    }
}

/// Simplest fraction approximating `decimal - 1` within a relative tolerance
///
/// Expands the exact rational `(scaled - 100) / 100` into continued-fraction
/// convergents using integer arithmetic only, stopping at the first
/// convergent `h/k` with `|v - h/k| <= v * tolerance`, at an exact remainder,
/// or after `max_iterations` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuedFractionApproximator {
    tolerance: Decimal,
    max_iterations: usize,
}

impl ContinuedFractionApproximator {
    pub fn new(tolerance: Decimal) -> Self {
        Self {
            tolerance,
            max_iterations: MAX_ITERATIONS,
        }
    }

    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    pub fn approximate(&self, value: FixedPointDecimal) -> Fraction {
        let p = i128::from(value.profit_scaled());
        let q = i128::from(SCALE_FACTOR);

        if p == 0 {
            return Fraction::zero();
        }

        // Convergent recurrences seeded with h(-1)=1, h(-2)=0, k(-1)=0, k(-2)=1
        let (mut h1, mut h2) = (1i128, 0i128);
        let (mut k1, mut k2) = (0i128, 1i128);
        // Current remainder b = num / den, starting at v itself
        let (mut num, mut den) = (p, q);

        for _ in 0..self.max_iterations {
            let a = num / den;
            let h = a * h1 + h2;
            let k = a * k1 + k2;
            h2 = h1;
            h1 = h;
            k2 = k1;
            k1 = k;

            if self.within_tolerance(p, q, h, k) {
                break;
            }

            let rest = num - a * den;
            if rest == 0 {
                break;
            }
            num = den;
            den = rest;
        }

        Fraction::from_parts(h1 as u64, k1 as u64)
    }

    /// `|p/q - h/k| <= (p/q) * tolerance`, cross-multiplied to stay exact
    fn within_tolerance(&self, p: i128, q: i128, h: i128, k: i128) -> bool {
        let error = Decimal::from_i128_with_scale((p * k - q * h).abs(), 0);
        Decimal::from_i128_with_scale(p * k, 0)
            .checked_mul(self.tolerance)
            .map_or(true, |bound| error <= bound)
    }
}

impl Default for ContinuedFractionApproximator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
