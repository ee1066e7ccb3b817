//! Odds conversion engine
//!
//! Converts between decimal, fractional and moneyline odds and derives the
//! implied probability, with every decimal held as a two-place fixed-point
//! integer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  OddsFactory::from_decimal / from_fractional / from_moneyline│
//! ├─────────────────────────────────────────────────────────────┤
//! │  input                                                      │
//! │    │                                                        │
//! │    ▼                                                        │
//! │  FixedPointDecimal (decimal × 100, half-up)                 │
//! │    │                                                        │
//! │    ├──► fractional: OddsLadder (if injected)                │
//! │    │                or ContinuedFractionApproximator        │
//! │    │                                                        │
//! │    ├──► moneyline:  MoneylineTransform                      │
//! │    │                                                        │
//! │    ▼                                                        │
//! │  Odds { decimal, fractional, moneyline, probability }       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`FixedPointDecimal`]: normalized decimal price
//! - [`ContinuedFractionApproximator`]: simplest fraction for `decimal - 1`
//! - [`OddsLadder`]: market lookup table capability, with
//!   [`StandardOddsLadder`] and [`CustomOddsLadder`]
//! - [`MoneylineTransform`]: decimal <-> moneyline
//! - [`Odds`]: the immutable result
//! - [`OddsFactory`]: picks the strategy and assembles [`Odds`]

mod factory;
mod fixed_point;
mod fraction;
mod ladder;
mod moneyline;
mod value;

pub use factory::{MoneylineMode, OddsFactory};

pub use fixed_point::{FixedPointDecimal, DECIMAL_PRECISION, SCALE_FACTOR};

pub use fraction::{
    ContinuedFractionApproximator,
    Fraction,
    FractionBar,
    DEFAULT_TOLERANCE,
    MAX_ITERATIONS,
};

pub use ladder::{
    CustomOddsLadder,
    FallbackRule,
    LadderRung,
    LadderTable,
    OddsLadder,
    SharedOddsLadder,
    StandardOddsLadder,
    COMPACT_LADDER,
    STANDARD_LADDER,
};

pub use moneyline::{Moneyline, MoneylineTransform};

pub use value::Odds;
