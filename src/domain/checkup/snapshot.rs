//! Persisted snapshot of the wizard.
//!
//! Written as one JSON blob under a fixed key after every mutation and
//! read back once at startup. The snapshot carries full records for
//! debuggability, but restore only trusts `selected` flags keyed by id
//! against the fixed catalogs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::energy::EnergyMix;
use super::selection::{IndustrySelection, RegionSelection};
use super::step::CheckupStep;
use super::wizard::CheckupWizard;

/// Serialized copy of the whole wizard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckupSnapshot {
    pub current_step: CheckupStep,
    pub industries: Vec<IndustrySelection>,
    pub regions: Vec<RegionSelection>,
    pub energy: EnergyMix,
    pub saved_at: Timestamp,
}

impl CheckupSnapshot {
    /// Captures the wizard as it stands.
    pub fn capture(wizard: &CheckupWizard) -> Self {
        Self {
            current_step: wizard.current_step(),
            industries: wizard.industries().to_vec(),
            regions: wizard.regions().to_vec(),
            energy: *wizard.energy(),
            saved_at: Timestamp::now(),
        }
    }

    /// Rebuilds a wizard from this snapshot.
    ///
    /// Selections are re-seeded from the catalogs; ids the catalogs do
    /// not know are dropped, so a stale snapshot can never violate the
    /// fixed-identity invariant.
    pub fn restore(&self) -> CheckupWizard {
        let selected_industries: Vec<String> = self
            .industries
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.id.clone())
            .collect();
        let selected_regions: Vec<String> = self
            .regions
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.clone())
            .collect();
        CheckupWizard::reconstitute(
            self.current_step,
            &selected_industries,
            &selected_regions,
            self.energy,
        )
    }

    /// Encodes the snapshot as the stored JSON blob.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a stored blob. Malformed payloads surface here so the
    /// caller can fall back to defaults.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkup::EnergyField;

    fn worked_wizard() -> CheckupWizard {
        let mut wizard = CheckupWizard::new();
        wizard.toggle_industry("logistics");
        wizard.toggle_region("oceania");
        wizard.go_to_next_step();
        wizard.set_energy(EnergyField::Transportation, 85);
        wizard
    }

    #[test]
    fn capture_then_restore_reproduces_the_wizard() {
        let wizard = worked_wizard();
        let snapshot = CheckupSnapshot::capture(&wizard);
        let restored = snapshot.restore();
        assert_eq!(restored, wizard);
    }

    #[test]
    fn json_round_trip_reproduces_the_wizard() {
        let wizard = worked_wizard();
        let json = CheckupSnapshot::capture(&wizard).to_json().unwrap();
        let restored = CheckupSnapshot::from_json(&json).unwrap().restore();
        assert_eq!(restored, wizard);
    }

    #[test]
    fn from_json_rejects_malformed_payloads() {
        assert!(CheckupSnapshot::from_json("not json at all").is_err());
        assert!(CheckupSnapshot::from_json("{\"current_step\": 2}").is_err());
    }

    #[test]
    fn restore_ignores_industries_the_catalog_does_not_know() {
        let wizard = worked_wizard();
        let mut snapshot = CheckupSnapshot::capture(&wizard);
        snapshot.industries.push(IndustrySelection {
            id: "mining".to_string(),
            display_name: "Mining".to_string(),
            icon: "⛏".to_string(),
            selected: true,
        });

        let restored = snapshot.restore();
        assert_eq!(restored.industries().len(), 6);
        assert_eq!(restored.selected_industry_count(), 1);
    }

    #[test]
    fn restore_clamps_an_out_of_range_step() {
        let json = CheckupSnapshot::capture(&worked_wizard()).to_json().unwrap();
        let tampered = json.replace("\"current_step\":2", "\"current_step\":7");
        let restored = CheckupSnapshot::from_json(&tampered).unwrap().restore();
        assert_eq!(restored.current_step(), CheckupStep::Energy);
    }
}
