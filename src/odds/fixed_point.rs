//! Two-decimal fixed-point representation of decimal odds
//!
//! Every decimal price is held as an integer scaled by [`SCALE_FACTOR`], so
//! comparisons, ladder lookups and the moneyline transform never touch a
//! binary float and repeated conversions cannot drift.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::common::errors::{OddsError, Result};

/// Number of decimal places carried by every normalized odds value
pub const DECIMAL_PRECISION: u32 = 2;

/// Scale between a decimal price and its fixed-point integer
pub const SCALE_FACTOR: i64 = 100;

/// Decimal odds normalized to exactly two decimal places
///
/// Invariant: `scaled >= 100`, i.e. the price is at least 1.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FixedPointDecimal {
    scaled: i64,
}

impl FixedPointDecimal {
    /// 1.00, the smallest valid price (no profit)
    pub const ONE: Self = Self {
        scaled: SCALE_FACTOR,
    };

    /// 2.00, evens
    pub const EVENS: Self = Self {
        scaled: 2 * SCALE_FACTOR,
    };

    /// Build from a scaled integer known to be >= 100 (static tables only)
    pub(crate) const fn from_scaled_unchecked(scaled: i64) -> Self {
        Self { scaled }
    }

    /// Build from an integer already scaled by 100 (`250` is 2.50)
    pub fn from_scaled(scaled: i64) -> Result<Self> {
        if scaled < SCALE_FACTOR {
            return Err(OddsError::InvalidDecimal(
                Decimal::new(scaled, DECIMAL_PRECISION).to_string(),
            ));
        }
        Ok(Self { scaled })
    }

    /// Parse and normalize a textual decimal price
    ///
    /// The minimum is checked on the exact parsed value, before scaling, so
    /// `0.999` is rejected even though it would round to 1.00.
    pub fn parse(input: &str) -> Result<Self> {
        let value =
            parse_numeric(input).ok_or_else(|| OddsError::InvalidDecimal(input.to_string()))?;
        Self::normalize(value, input)
    }

    /// Normalize a float price
    ///
    /// The float goes through its shortest round-trip text form, so `2.005`
    /// normalizes the same way as the string `"2.005"`.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(OddsError::InvalidDecimal(value.to_string()));
        }
        Self::parse(&value.to_string())
    }

    /// Normalize an arbitrary-precision decimal
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        Self::normalize(value, &value.to_string())
    }

    fn normalize(value: Decimal, original: &str) -> Result<Self> {
        let invalid = || OddsError::InvalidDecimal(original.to_string());

        if value < Decimal::ONE {
            return Err(invalid());
        }

        let scaled = value
            .checked_mul(Decimal::from(SCALE_FACTOR))
            .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|v| v.to_i64())
            .ok_or_else(invalid)?;

        Ok(Self { scaled })
    }

    /// The price multiplied by 100
    pub fn scaled(&self) -> i64 {
        self.scaled
    }

    /// The profit part `(decimal - 1)` multiplied by 100
    pub fn profit_scaled(&self) -> i64 {
        self.scaled - SCALE_FACTOR
    }

    /// Exact decimal value with two decimal places
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.scaled, DECIMAL_PRECISION)
    }

    /// Whether this is 1.00 (no profit)
    pub fn is_one(&self) -> bool {
        self.scaled == SCALE_FACTOR
    }
}

impl fmt::Display for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.scaled / SCALE_FACTOR,
            self.scaled % SCALE_FACTOR
        )
    }
}

impl FromStr for FixedPointDecimal {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FixedPointDecimal {
    type Error = OddsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<FixedPointDecimal> for String {
    fn from(value: FixedPointDecimal) -> Self {
        value.to_string()
    }
}

impl From<FixedPointDecimal> for Decimal {
    fn from(value: FixedPointDecimal) -> Self {
        value.to_decimal()
    }
}

/// Parse a numeric string the way odds are written by people
///
/// Accepts surrounding whitespace, one optional leading sign and scientific
/// notation. Digit separators and anything else non-numeric yield `None`.
pub(crate) fn parse_numeric(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if unsigned.is_empty() || unsigned.contains('_') {
        return None;
    }
    if unsigned.len() != trimmed.len() && unsigned.starts_with(['+', '-']) {
        return None;
    }

    if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(unsigned).ok()
    } else {
        Decimal::from_str(unsigned).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fp(s: &str) -> FixedPointDecimal {
        FixedPointDecimal::parse(s).unwrap()
    }

    #[test]
    fn test_normalizes_to_two_places() {
        assert_eq!(fp("2").to_string(), "2.00");
        assert_eq!(fp("2.5").to_string(), "2.50");
        assert_eq!(fp("1.123").to_string(), "1.12");
        assert_eq!(fp("10.00").to_string(), "10.00");
        assert_eq!(fp("101").to_string(), "101.00");
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(fp("2.005").to_string(), "2.01");
        assert_eq!(fp("1.019").to_string(), "1.02");
        assert_eq!(fp("1.004").to_string(), "1.00");
        assert_eq!(fp("1.015").scaled(), 102);
    }

    #[test]
    fn test_scaled_integer_representation() {
        assert_eq!(fp("1.00").scaled(), 100);
        assert_eq!(fp("1.50").scaled(), 150);
        assert_eq!(fp("10.00").scaled(), 1000);
        assert_eq!(fp("2.50").profit_scaled(), 150);
        assert_eq!(fp("2.50").to_decimal(), dec!(2.50));
    }

    #[test]
    fn test_rejects_below_one_and_non_numeric() {
        for input in ["0.5", "0", "-2.0", "0.999", "abc", "", "  ", "1_000", "+-2", "2.0.1"] {
            let err = FixedPointDecimal::parse(input).unwrap_err();
            assert_eq!(err, OddsError::InvalidDecimal(input.to_string()), "input {input:?}");
        }
    }

    #[test]
    fn test_accepts_sign_whitespace_and_exponent() {
        assert_eq!(fp(" 2.5 ").to_string(), "2.50");
        assert_eq!(fp("+3").to_string(), "3.00");
        assert_eq!(fp("1.5e1").to_string(), "15.00");
    }

    #[test]
    fn test_rejects_values_beyond_range() {
        assert!(FixedPointDecimal::parse("1e30").is_err());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(FixedPointDecimal::from_f64(2.005).unwrap().to_string(), "2.01");
        assert_eq!(FixedPointDecimal::from_f64(1.1).unwrap().scaled(), 110);
        assert!(FixedPointDecimal::from_f64(f64::NAN).is_err());
        assert!(FixedPointDecimal::from_f64(0.99).is_err());
    }

    #[test]
    fn test_from_scaled() {
        assert_eq!(FixedPointDecimal::from_scaled(250).unwrap().to_string(), "2.50");
        assert_eq!(
            FixedPointDecimal::from_scaled(99).unwrap_err(),
            OddsError::InvalidDecimal("0.99".to_string())
        );
    }

    #[test]
    fn test_idempotent() {
        for input in ["1.00", "1.01", "2.99", "3.33", "1000.00"] {
            let once = fp(input).to_string();
            assert_eq!(fp(&once).to_string(), once);
        }
    }

    #[test]
    fn test_ordering_is_integer_ordering() {
        assert!(fp("1.99") < fp("2.00"));
        assert!(fp("2.005") > fp("2.00"));
        assert_eq!(fp("2.50"), fp("2.5"));
        assert!(FixedPointDecimal::ONE.is_one());
        assert_eq!(FixedPointDecimal::EVENS, fp("2"));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&fp("2.5")).unwrap();
        assert_eq!(json, "\"2.50\"");

        let parsed: FixedPointDecimal = serde_json::from_str("\"1.333\"").unwrap();
        assert_eq!(parsed.to_string(), "1.33");

        assert!(serde_json::from_str::<FixedPointDecimal>("\"0.5\"").is_err());
    }
}
