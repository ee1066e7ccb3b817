//! Moneyline (American) odds and the decimal <-> moneyline transform

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::common::errors::{OddsError, Result};
use crate::odds::fixed_point::{parse_numeric, FixedPointDecimal, DECIMAL_PRECISION, SCALE_FACTOR};

/// Signed moneyline value, held rounded to two decimal places
///
/// Renders with a leading `+` when positive, without a fractional part when
/// integral, and with exactly two decimals otherwise: `+100`, `-200`,
/// `-111.11`, `+150.50`, `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moneyline {
    value: Decimal,
}

impl Moneyline {
    /// Moneyline of a 1.00 price
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    pub fn new(value: Decimal) -> Self {
        Self {
            value: value.round_dp_with_strategy(DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Parse a moneyline with or without its `+` sign
    pub fn parse(input: &str) -> Result<Self> {
        parse_numeric(input)
            .map(Self::new)
            .ok_or_else(|| OddsError::InvalidMoneyline(input.to_string()))
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for Moneyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value.is_sign_positive() && !self.value.is_zero() {
            "+"
        } else {
            ""
        };

        if self.value.fract().is_zero() {
            write!(f, "{}{}", sign, self.value.trunc().normalize())
        } else {
            let mut shown = self.value;
            shown.rescale(DECIMAL_PRECISION);
            write!(f, "{}{}", sign, shown)
        }
    }
}

impl FromStr for Moneyline {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Decimal <-> moneyline conversion
///
/// Prices of 2.00 and above map to a positive line (profit per 100 staked),
/// prices below 2.00 to a negative line (stake needed to win 100), and 1.00
/// to zero.
pub struct MoneylineTransform;

impl MoneylineTransform {
    /// Moneyline for a normalized decimal price
    ///
    /// Works on the scaled integer: `100 * (d - 1)` is exactly
    /// `profit_scaled`, and `-100 / (d - 1)` is `-10000 / profit_scaled`.
    pub fn decimal_to_moneyline(decimal: FixedPointDecimal) -> Moneyline {
        if decimal.is_one() {
            return Moneyline::ZERO;
        }

        let profit = Decimal::from(decimal.profit_scaled());
        if decimal >= FixedPointDecimal::EVENS {
            Moneyline::new(profit)
        } else {
            Moneyline::new(Decimal::from(-SCALE_FACTOR * SCALE_FACTOR) / profit)
        }
    }

    /// Decimal price for a moneyline, normalized through the fixed-point type
    pub fn moneyline_to_decimal(moneyline: Moneyline) -> Result<FixedPointDecimal> {
        let hundred = Decimal::from(SCALE_FACTOR);
        let value = moneyline.value();
        let invalid = || OddsError::InvalidMoneyline(moneyline.to_string());

        let decimal = if value.is_zero() {
            Some(Decimal::ONE)
        } else if value.is_sign_positive() {
            value.checked_div(hundred).and_then(|v| v.checked_add(Decimal::ONE))
        } else {
            (-hundred).checked_div(value).and_then(|v| v.checked_add(Decimal::ONE))
        }
        .ok_or_else(invalid)?;

        FixedPointDecimal::from_decimal(decimal).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn to_line(decimal: &str) -> String {
        let decimal = FixedPointDecimal::parse(decimal).unwrap();
        MoneylineTransform::decimal_to_moneyline(decimal).to_string()
    }

    fn to_decimal(line: &str) -> String {
        let line = Moneyline::parse(line).unwrap();
        MoneylineTransform::moneyline_to_decimal(line).unwrap().to_string()
    }

    #[test]
    fn test_decimal_to_moneyline_positive() {
        assert_eq!(to_line("2.00"), "+100");
        assert_eq!(to_line("3.00"), "+200");
        assert_eq!(to_line("2.51"), "+151");
        assert_eq!(to_line("101.00"), "+10000");
    }

    #[test]
    fn test_decimal_to_moneyline_negative() {
        assert_eq!(to_line("1.50"), "-200");
        assert_eq!(to_line("1.90"), "-111.11");
        assert_eq!(to_line("1.33"), "-303.03");
        assert_eq!(to_line("1.99"), "-101.01");
        assert_eq!(to_line("1.01"), "-10000");
        assert_eq!(to_line("1.80"), "-125");
    }

    #[test]
    fn test_decimal_to_moneyline_zero() {
        assert_eq!(to_line("1.00"), "0");
        assert!(MoneylineTransform::decimal_to_moneyline(FixedPointDecimal::ONE).is_zero());
    }

    #[test]
    fn test_moneyline_to_decimal() {
        assert_eq!(to_decimal("0"), "1.00");
        assert_eq!(to_decimal("100"), "2.00");
        assert_eq!(to_decimal("+150"), "2.50");
        assert_eq!(to_decimal("150.50"), "2.51");
        assert_eq!(to_decimal("10000"), "101.00");
        assert_eq!(to_decimal("-200"), "1.50");
        assert_eq!(to_decimal("-110"), "1.91");
        assert_eq!(to_decimal("-10000"), "1.01");
    }

    #[test]
    fn test_moneyline_rendering() {
        assert_eq!(Moneyline::parse("150").unwrap().to_string(), "+150");
        assert_eq!(Moneyline::parse("+150").unwrap().to_string(), "+150");
        assert_eq!(Moneyline::parse("150.5").unwrap().to_string(), "+150.50");
        assert_eq!(Moneyline::parse("-111.111").unwrap().to_string(), "-111.11");
        assert_eq!(Moneyline::parse("-110.00").unwrap().to_string(), "-110");
        assert_eq!(Moneyline::parse("0.001").unwrap().to_string(), "0");
        assert_eq!(Moneyline::parse("-0.001").unwrap().to_string(), "0");
        assert_eq!(Moneyline::new(dec!(-111.115)).to_string(), "-111.12");
    }

    #[test]
    fn test_moneyline_parse_rejects_non_numeric() {
        for input in ["abc", "", "+", "1,000", "--5"] {
            assert_eq!(
                Moneyline::parse(input).unwrap_err(),
                OddsError::InvalidMoneyline(input.to_string())
            );
        }
    }

    #[test]
    fn test_moneyline_out_of_range() {
        let line = Moneyline::parse("1e26").unwrap();
        assert!(matches!(
            MoneylineTransform::moneyline_to_decimal(line),
            Err(OddsError::InvalidMoneyline(_))
        ));
    }
}
