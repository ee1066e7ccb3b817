//! Error types for the odds engine

use thiserror::Error;

/// Result type alias using our OddsError
pub type Result<T> = std::result::Result<T, OddsError>;

/// Main error type for odds conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// Decimal odds that are non-numeric, below 1.00 or out of range
    #[error("Invalid decimal value provided: {0}. Min value: 1.0")]
    InvalidDecimal(String),

    /// Negative or out of range fractional numerator
    #[error("Invalid numerator provided: {0}")]
    InvalidNumerator(i64),

    /// Fractional denominator below 1
    #[error("Invalid denominator provided: {0}")]
    InvalidDenominator(i64),

    /// Fractional text that cannot be split into numerator and denominator
    #[error("Invalid fractional value provided: {0}")]
    InvalidFraction(String),

    /// Non-numeric or out of range moneyline
    #[error("Invalid moneyline value provided: {0}")]
    InvalidMoneyline(String),

    /// Odds ladder table that is empty or not strictly increasing
    #[error("Invalid odds ladder: {0}")]
    InvalidLadder(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OddsError {
    /// Whether this error rejects a caller-supplied odds value.
    ///
    /// Every variant except ladder and configuration problems belongs to the
    /// invalid-odds family.
    pub fn is_invalid_odds(&self) -> bool {
        matches!(
            self,
            OddsError::InvalidDecimal(_)
                | OddsError::InvalidNumerator(_)
                | OddsError::InvalidDenominator(_)
                | OddsError::InvalidFraction(_)
                | OddsError::InvalidMoneyline(_)
        )
    }
}

impl From<config::ConfigError> for OddsError {
    fn from(err: config::ConfigError) -> Self {
        OddsError::Configuration(err.to_string())
    }
}
