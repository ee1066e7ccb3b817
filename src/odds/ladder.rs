//! Odds ladders
//!
//! A ladder maps decimal prices onto the fractional strings the market
//! actually quotes. The table is scanned in increasing threshold order and
//! the first rung whose threshold is not below the price wins, so a price
//! between two rungs takes the higher rung's fraction. Prices above the
//! last rung go through the ladder's fallback rule.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::errors::{OddsError, Result};
use crate::odds::fixed_point::{FixedPointDecimal, SCALE_FACTOR};

/// One `(threshold, fractional)` entry of a ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderRung {
    /// Highest decimal price quoted with this fraction
    pub threshold: FixedPointDecimal,
    /// Display string, not necessarily reduced (`4/6`)
    pub fractional: Cow<'static, str>,
}

impl LadderRung {
    pub fn new(threshold: FixedPointDecimal, fractional: impl Into<String>) -> Self {
        Self {
            threshold,
            fractional: Cow::Owned(fractional.into()),
        }
    }

    const fn from_static(scaled: i64, fractional: &'static str) -> Self {
        Self {
            threshold: FixedPointDecimal::from_scaled_unchecked(scaled),
            fractional: Cow::Borrowed(fractional),
        }
    }
}

/// Rungs ordered by strictly increasing threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderTable {
    rungs: Cow<'static, [LadderRung]>,
}

impl LadderTable {
    /// Validate a caller-supplied table
    pub fn new(rungs: Vec<LadderRung>) -> Result<Self> {
        if rungs.is_empty() {
            return Err(OddsError::InvalidLadder("table has no rungs".to_string()));
        }

        if let Some(rung) = rungs.iter().find(|r| r.fractional.trim().is_empty()) {
            return Err(OddsError::InvalidLadder(format!(
                "rung {} has an empty fractional value",
                rung.threshold
            )));
        }

        if let Some(pair) = rungs.windows(2).find(|w| w[1].threshold <= w[0].threshold) {
            return Err(OddsError::InvalidLadder(format!(
                "threshold {} does not increase after {}",
                pair[1].threshold, pair[0].threshold
            )));
        }

        Ok(Self {
            rungs: Cow::Owned(rungs),
        })
    }

    const fn from_static(rungs: &'static [LadderRung]) -> Self {
        Self {
            rungs: Cow::Borrowed(rungs),
        }
    }

    pub fn rungs(&self) -> &[LadderRung] {
        &self.rungs
    }

    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Fraction of the first rung with `decimal <= threshold`
    pub fn lookup(&self, decimal: FixedPointDecimal) -> Option<&str> {
        let index = self.rungs.partition_point(|rung| rung.threshold < decimal);
        self.rungs.get(index).map(|rung| &*rung.fractional)
    }

    /// Fraction quoted at exactly this threshold, if it is a rung
    pub fn get(&self, threshold: FixedPointDecimal) -> Option<&str> {
        self.rungs
            .binary_search_by(|rung| rung.threshold.cmp(&threshold))
            .ok()
            .map(|index| &*self.rungs[index].fractional)
    }
}

/// How a ladder quotes prices above its last rung
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackRule {
    /// `floor(decimal - 1)/1`: 11.50 quotes as 10/1
    #[default]
    Floor,
    /// `round_half_up(decimal - 1)/1`: 11.50 quotes as 11/1
    Rounded,
}

impl FallbackRule {
    pub fn apply(&self, decimal: FixedPointDecimal) -> String {
        let profit = decimal.profit_scaled();
        let whole = match self {
            FallbackRule::Floor => profit / SCALE_FACTOR,
            FallbackRule::Rounded => (profit + SCALE_FACTOR / 2) / SCALE_FACTOR,
        };
        format!("{}/1", whole)
    }
}

/// Ladder capability injected into the factory
///
/// Implementors supply a table and optionally a fallback; the lookup itself
/// is shared. Replacing the table or the fallback means supplying another
/// implementor, never mutating one.
///
/// # Example
///
/// ```
/// use odds_formatter::{FixedPointDecimal, LadderTable, OddsLadder, STANDARD_LADDER};
///
/// struct HighOddsLadder;
///
/// impl OddsLadder for HighOddsLadder {
///     fn name(&self) -> &str { "high_odds" }
///
///     fn table(&self) -> &LadderTable {
///         &STANDARD_LADDER
///     }
///
///     fn fallback(&self, decimal: FixedPointDecimal) -> String {
///         format!("{}/1", decimal.profit_scaled() / 100 + 1)
///     }
/// }
///
/// assert_eq!(HighOddsLadder.fractional_for("20.00").unwrap(), "20/1");
/// ```
pub trait OddsLadder: Send + Sync {
    /// Identifier used in logs and benchmark output
    fn name(&self) -> &str;

    /// The lookup table, strictly increasing in threshold
    fn table(&self) -> &LadderTable;

    /// Quote for prices above every threshold
    fn fallback(&self, decimal: FixedPointDecimal) -> String {
        FallbackRule::Floor.apply(decimal)
    }

    fn decimal_to_fractional(&self, decimal: FixedPointDecimal) -> String {
        match self.table().lookup(decimal) {
            Some(fractional) => fractional.to_string(),
            None => self.fallback(decimal),
        }
    }

    /// Same as [`OddsLadder::decimal_to_fractional`] for a textual price
    fn fractional_for(&self, decimal: &str) -> Result<String> {
        let decimal = FixedPointDecimal::parse(decimal)?;
        Ok(self.decimal_to_fractional(decimal))
    }
}

/// Ladder shared between factories and threads
pub type SharedOddsLadder = Arc<dyn OddsLadder>;

static STANDARD_RUNGS: [LadderRung; 46] = [
    LadderRung::from_static(102, "1/50"),
    LadderRung::from_static(103, "1/33"),
    LadderRung::from_static(104, "1/25"),
    LadderRung::from_static(105, "1/20"),
    LadderRung::from_static(106, "1/17"),
    LadderRung::from_static(107, "1/15"),
    LadderRung::from_static(108, "2/25"),
    LadderRung::from_static(109, "1/12"),
    LadderRung::from_static(110, "1/10"),
    LadderRung::from_static(111, "1/9"),
    LadderRung::from_static(113, "1/8"),
    LadderRung::from_static(114, "1/7"),
    LadderRung::from_static(117, "1/6"),
    LadderRung::from_static(120, "1/5"),
    LadderRung::from_static(122, "2/9"),
    LadderRung::from_static(125, "1/4"),
    LadderRung::from_static(129, "2/7"),
    LadderRung::from_static(133, "1/3"),
    LadderRung::from_static(136, "4/11"),
    LadderRung::from_static(140, "2/5"),
    LadderRung::from_static(144, "4/9"),
    LadderRung::from_static(150, "1/2"),
    LadderRung::from_static(157, "4/7"),
    LadderRung::from_static(162, "8/13"),
    LadderRung::from_static(167, "4/6"),
    LadderRung::from_static(173, "8/11"),
    LadderRung::from_static(180, "4/5"),
    LadderRung::from_static(191, "10/11"),
    LadderRung::from_static(200, "1/1"),
    LadderRung::from_static(210, "11/10"),
    LadderRung::from_static(220, "6/5"),
    LadderRung::from_static(238, "11/8"),
    LadderRung::from_static(250, "3/2"),
    LadderRung::from_static(262, "8/5"),
    LadderRung::from_static(275, "7/4"),
    LadderRung::from_static(300, "2/1"),
    LadderRung::from_static(325, "9/4"),
    LadderRung::from_static(350, "5/2"),
    LadderRung::from_static(400, "3/1"),
    LadderRung::from_static(450, "7/2"),
    LadderRung::from_static(500, "4/1"),
    LadderRung::from_static(600, "5/1"),
    LadderRung::from_static(700, "6/1"),
    LadderRung::from_static(800, "7/1"),
    LadderRung::from_static(900, "8/1"),
    LadderRung::from_static(1000, "9/1"),
];

static COMPACT_RUNGS: [LadderRung; 10] = [
    LadderRung::from_static(120, "1/5"),
    LadderRung::from_static(125, "1/4"),
    LadderRung::from_static(133, "1/3"),
    LadderRung::from_static(150, "1/2"),
    LadderRung::from_static(200, "1/1"),
    LadderRung::from_static(250, "3/2"),
    LadderRung::from_static(300, "2/1"),
    LadderRung::from_static(400, "3/1"),
    LadderRung::from_static(500, "4/1"),
    LadderRung::from_static(600, "5/1"),
];

/// The 46-rung market ladder, 1.02 (1/50) to 10.00 (9/1)
pub static STANDARD_LADDER: LadderTable = LadderTable::from_static(&STANDARD_RUNGS);

/// The compact 10-rung ladder, 1.20 (1/5) to 6.00 (5/1)
pub static COMPACT_LADDER: LadderTable = LadderTable::from_static(&COMPACT_RUNGS);

/// Standard market ladder with the floor fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardOddsLadder;

impl OddsLadder for StandardOddsLadder {
    fn name(&self) -> &str {
        "standard"
    }

    fn table(&self) -> &LadderTable {
        &STANDARD_LADDER
    }
}

/// Ladder with a caller-chosen table and fallback rule
///
/// `Default` gives the compact ladder with the floor fallback.
#[derive(Debug, Clone)]
pub struct CustomOddsLadder {
    table: LadderTable,
    fallback: FallbackRule,
}

impl CustomOddsLadder {
    pub fn new(table: LadderTable, fallback: FallbackRule) -> Self {
        Self { table, fallback }
    }

    pub fn fallback_rule(&self) -> FallbackRule {
        self.fallback
    }
}

impl Default for CustomOddsLadder {
    fn default() -> Self {
        Self::new(COMPACT_LADDER.clone(), FallbackRule::Floor)
    }
}

impl OddsLadder for CustomOddsLadder {
    fn name(&self) -> &str {
        "custom"
    }

    fn table(&self) -> &LadderTable {
        &self.table
    }

    fn fallback(&self, decimal: FixedPointDecimal) -> String {
        self.fallback.apply(decimal)
    }
}
