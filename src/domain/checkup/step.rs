//! Checkup steps and per-step validity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three screens of the checkup wizard, in order.
///
/// There is no terminal state: the visitor may revisit any step, so
/// navigation clamps at both ends instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CheckupStep {
    /// Step 1: which industries describe the business.
    Industry,
    /// Step 2: where the supply chain touches the map.
    SupplyChain,
    /// Step 3: the energy usage profile.
    Energy,
}

impl CheckupStep {
    /// All steps in wizard order.
    pub const ALL: [CheckupStep; 3] = [
        CheckupStep::Industry,
        CheckupStep::SupplyChain,
        CheckupStep::Energy,
    ];

    /// 1-based step index as shown to the visitor.
    pub fn index(&self) -> u8 {
        match self {
            CheckupStep::Industry => 1,
            CheckupStep::SupplyChain => 2,
            CheckupStep::Energy => 3,
        }
    }

    /// Maps a 1-based index back to a step, clamping out-of-range values.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 | 1 => CheckupStep::Industry,
            2 => CheckupStep::SupplyChain,
            _ => CheckupStep::Energy,
        }
    }

    /// The following step, clamped at the last one.
    pub fn next(&self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    /// The preceding step, clamped at the first one.
    pub fn previous(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// True for the first step.
    pub fn is_first(&self) -> bool {
        *self == CheckupStep::Industry
    }

    /// True for the last step.
    pub fn is_last(&self) -> bool {
        *self == CheckupStep::Energy
    }
}

impl From<u8> for CheckupStep {
    fn from(index: u8) -> Self {
        Self::from_index(index)
    }
}

impl From<CheckupStep> for u8 {
    fn from(step: CheckupStep) -> Self {
        step.index()
    }
}

impl fmt::Display for CheckupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            CheckupStep::Industry => "Your Industry",
            CheckupStep::SupplyChain => "Your Supply Chain",
            CheckupStep::Energy => "Your Energy Profile",
        };
        write!(f, "Step {}: {}", self.index(), title)
    }
}

/// Validity of a single step, derived on demand from wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepValidity {
    /// Which step this verdict is about.
    pub step: CheckupStep,
    /// Whether the step's predicate is satisfied.
    pub is_valid: bool,
    /// Renderer-facing hint; tells the visitor what is missing.
    pub message: String,
}

impl StepValidity {
    pub fn valid(step: CheckupStep) -> Self {
        Self {
            step,
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(step: CheckupStep, message: impl Into<String>) -> Self {
        Self {
            step,
            is_valid: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_one_based() {
        assert_eq!(CheckupStep::Industry.index(), 1);
        assert_eq!(CheckupStep::SupplyChain.index(), 2);
        assert_eq!(CheckupStep::Energy.index(), 3);
    }

    #[test]
    fn from_index_clamps_out_of_range() {
        assert_eq!(CheckupStep::from_index(0), CheckupStep::Industry);
        assert_eq!(CheckupStep::from_index(4), CheckupStep::Energy);
        assert_eq!(CheckupStep::from_index(255), CheckupStep::Energy);
    }

    #[test]
    fn next_clamps_at_last_step() {
        assert_eq!(CheckupStep::Industry.next(), CheckupStep::SupplyChain);
        assert_eq!(CheckupStep::SupplyChain.next(), CheckupStep::Energy);
        assert_eq!(CheckupStep::Energy.next(), CheckupStep::Energy);
    }

    #[test]
    fn previous_clamps_at_first_step() {
        assert_eq!(CheckupStep::Energy.previous(), CheckupStep::SupplyChain);
        assert_eq!(CheckupStep::SupplyChain.previous(), CheckupStep::Industry);
        assert_eq!(CheckupStep::Industry.previous(), CheckupStep::Industry);
    }

    #[test]
    fn serializes_as_index() {
        let json = serde_json::to_string(&CheckupStep::SupplyChain).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn deserializes_from_index_with_clamping() {
        let step: CheckupStep = serde_json::from_str("3").unwrap();
        assert_eq!(step, CheckupStep::Energy);

        let step: CheckupStep = serde_json::from_str("9").unwrap();
        assert_eq!(step, CheckupStep::Energy);
    }

    #[test]
    fn display_includes_index_and_title() {
        assert_eq!(
            format!("{}", CheckupStep::Industry),
            "Step 1: Your Industry"
        );
    }

    #[test]
    fn validity_constructors_set_flag() {
        let ok = StepValidity::valid(CheckupStep::Industry);
        assert!(ok.is_valid);
        assert!(ok.message.is_empty());

        let bad = StepValidity::invalid(CheckupStep::Industry, "Select at least one industry");
        assert!(!bad.is_valid);
        assert_eq!(bad.message, "Select at least one industry");
    }
}
