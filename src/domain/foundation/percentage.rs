//! Energy percentage value object (0-100 scale, 5-point granularity).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive, snapped to multiples of 5.
///
/// Construction never fails: out-of-range inputs clamp and everything
/// else rounds to the nearest 5-point stop, matching the slider the
/// renderer drives this with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct EnergyPercent(u8);

impl EnergyPercent {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new EnergyPercent, clamping to [0, 100] and snapping
    /// to the nearest multiple of 5.
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(0, 100);
        let snapped = ((clamped + 2) / 5) * 5;
        Self(snapped as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True if the value is above zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Default for EnergyPercent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for EnergyPercent {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<EnergyPercent> for u8 {
    fn from(pct: EnergyPercent) -> Self {
        pct.0
    }
}

impl fmt::Display for EnergyPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
