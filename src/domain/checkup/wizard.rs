//! Checkup wizard aggregate.
//!
//! Owns all questionnaire state for one session. Every operation is total
//! over its clamped domain: unknown ids and out-of-range values are silent
//! no-ops or clamps, never errors.

use super::catalog::{industry_catalog, region_catalog};
use super::energy::{EnergyField, EnergyMix};
use super::selection::{IndustrySelection, RegionSelection};
use super::step::{CheckupStep, StepValidity};

/// Questionnaire state for one session.
///
/// # Invariants
///
/// - `current_step` is always one of the three wizard steps
/// - `industries` and `regions` always hold exactly their 6 catalog
///   identities; toggling flips `selected`, never adds or removes
/// - energy percentages are always in [0, 100] at 5-point granularity
#[derive(Debug, Clone, PartialEq)]
pub struct CheckupWizard {
    current_step: CheckupStep,
    industries: Vec<IndustrySelection>,
    regions: Vec<RegionSelection>,
    energy: EnergyMix,
}

impl CheckupWizard {
    /// Creates the default wizard: step 1, nothing selected, energy at
    /// the demo's starting slider positions.
    pub fn new() -> Self {
        Self {
            current_step: CheckupStep::Industry,
            industries: industry_catalog(),
            regions: region_catalog(),
            energy: EnergyMix::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the step the visitor is on.
    pub fn current_step(&self) -> CheckupStep {
        self.current_step
    }

    /// Returns the industry cards in catalog order.
    pub fn industries(&self) -> &[IndustrySelection] {
        &self.industries
    }

    /// Returns the region pins in catalog order.
    pub fn regions(&self) -> &[RegionSelection] {
        &self.regions
    }

    /// Returns the energy sliders.
    pub fn energy(&self) -> &EnergyMix {
        &self.energy
    }

    /// Number of selected industries.
    pub fn selected_industry_count(&self) -> usize {
        self.industries.iter().filter(|i| i.selected).count()
    }

    /// Number of selected regions.
    pub fn selected_region_count(&self) -> usize {
        self.regions.iter().filter(|r| r.selected).count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Flips the `selected` flag on the matching industry.
    ///
    /// Unknown ids are a silent no-op. Returns whether anything changed.
    pub fn toggle_industry(&mut self, id: &str) -> bool {
        match self.industries.iter_mut().find(|i| i.id == id) {
            Some(industry) => {
                industry.selected = !industry.selected;
                true
            }
            None => false,
        }
    }

    /// Flips the `selected` flag on the matching region.
    ///
    /// Unknown ids are a silent no-op. Returns whether anything changed.
    pub fn toggle_region(&mut self, id: &str) -> bool {
        match self.regions.iter_mut().find(|r| r.id == id) {
            Some(region) => {
                region.selected = !region.selected;
                true
            }
            None => false,
        }
    }

    /// Sets one energy slider, clamping the raw value into range.
    pub fn set_energy(&mut self, field: EnergyField, value: i64) {
        self.energy.set(field, value);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// True when the current step's predicate is satisfied, i.e. forward
    /// navigation would move.
    pub fn can_advance(&self) -> bool {
        self.validity(self.current_step).is_valid
    }

    /// Advances one step, clamped at step 3, only if the current step is
    /// valid. Returns whether the step changed.
    ///
    /// The one guarded transition in the wizard; going forward past an
    /// unsatisfied step is a silent no-op.
    pub fn go_to_next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let next = self.current_step.next();
        let moved = next != self.current_step;
        self.current_step = next;
        moved
    }

    /// Goes back one step, clamped at step 1. Never gated.
    pub fn go_to_previous_step(&mut self) -> bool {
        let previous = self.current_step.previous();
        let moved = previous != self.current_step;
        self.current_step = previous;
        moved
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values (computed on read, never stored)
    // ─────────────────────────────────────────────────────────────────────────

    /// Validity verdict for a step.
    pub fn validity(&self, step: CheckupStep) -> StepValidity {
        match step {
            CheckupStep::Industry => {
                if self.selected_industry_count() > 0 {
                    StepValidity::valid(step)
                } else {
                    StepValidity::invalid(step, "Select at least one industry")
                }
            }
            CheckupStep::SupplyChain => {
                if self.selected_region_count() > 0 {
                    StepValidity::valid(step)
                } else {
                    StepValidity::invalid(step, "Select at least one supply chain region")
                }
            }
            CheckupStep::Energy => {
                if self.energy.any_positive() {
                    StepValidity::valid(step)
                } else {
                    StepValidity::invalid(step, "Set at least one energy slider above zero")
                }
            }
        }
    }

    /// Validity verdict for the step the visitor is on.
    pub fn current_validity(&self) -> StepValidity {
        self.validity(self.current_step)
    }

    /// Completion percentage: satisfied steps out of three, independent
    /// of which step the visitor is looking at.
    pub fn overall_progress(&self) -> f64 {
        let satisfied = CheckupStep::ALL
            .iter()
            .filter(|step| self.validity(**step).is_valid)
            .count();
        satisfied as f64 / 3.0 * 100.0
    }

    /// Live CO₂ preview in tons per year.
    pub fn co2_preview(&self) -> u32 {
        self.energy.co2_preview()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence support
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuilds a wizard from persisted parts.
    ///
    /// Selections are re-seeded from the fixed catalogs and persisted
    /// `selected` flags are applied by id; ids the catalogs do not know
    /// are dropped. Stale snapshots cannot grow or shrink the lists.
    pub(super) fn reconstitute(
        current_step: CheckupStep,
        selected_industries: &[String],
        selected_regions: &[String],
        energy: EnergyMix,
    ) -> Self {
        let mut wizard = Self::new();
        wizard.current_step = current_step;
        wizard.energy = energy;
        for industry in &mut wizard.industries {
            industry.selected = selected_industries.iter().any(|id| *id == industry.id);
        }
        for region in &mut wizard.regions {
            region.selected = selected_regions.iter().any(|id| *id == region.id);
        }
        wizard
    }
}

impl Default for CheckupWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_energy_zero(wizard: &mut CheckupWizard) {
        wizard.set_energy(EnergyField::Electricity, 0);
        wizard.set_energy(EnergyField::Heating, 0);
        wizard.set_energy(EnergyField::Transportation, 0);
    }

    // Construction

    #[test]
    fn new_wizard_starts_on_step_one() {
        let wizard = CheckupWizard::new();
        assert_eq!(wizard.current_step(), CheckupStep::Industry);
    }

    #[test]
    fn new_wizard_has_nothing_selected() {
        let wizard = CheckupWizard::new();
        assert_eq!(wizard.selected_industry_count(), 0);
        assert_eq!(wizard.selected_region_count(), 0);
    }

    #[test]
    fn new_wizard_uses_default_energy_mix() {
        let wizard = CheckupWizard::new();
        assert_eq!(wizard.energy().electricity.value(), 50);
        assert_eq!(wizard.energy().heating.value(), 30);
        assert_eq!(wizard.energy().transportation.value(), 40);
    }

    // Toggling

    #[test]
    fn toggle_industry_flips_selected() {
        let mut wizard = CheckupWizard::new();
        assert!(wizard.toggle_industry("tech"));
        assert_eq!(wizard.selected_industry_count(), 1);

        assert!(wizard.toggle_industry("tech"));
        assert_eq!(wizard.selected_industry_count(), 0);
    }

    #[test]
    fn toggle_industry_unknown_id_is_noop() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.toggle_industry("mining"));
        assert_eq!(wizard.selected_industry_count(), 0);
        assert_eq!(wizard.industries().len(), 6);
    }

    #[test]
    fn toggle_region_flips_selected() {
        let mut wizard = CheckupWizard::new();
        assert!(wizard.toggle_region("europe"));
        assert_eq!(wizard.selected_region_count(), 1);
    }

    #[test]
    fn toggle_region_unknown_id_is_noop() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.toggle_region("antarctica"));
        assert_eq!(wizard.regions().len(), 6);
    }

    #[test]
    fn toggling_never_changes_list_identities() {
        let mut wizard = CheckupWizard::new();
        let ids: Vec<String> = wizard.industries().iter().map(|i| i.id.clone()).collect();

        for id in ["tech", "retail", "unknown", "tech", "food", "bogus"] {
            wizard.toggle_industry(id);
        }

        let after: Vec<String> = wizard.industries().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, after);
    }

    // Navigation

    #[test]
    fn next_step_is_noop_when_step_invalid() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.go_to_next_step());
        assert_eq!(wizard.current_step(), CheckupStep::Industry);
    }

    #[test]
    fn next_step_advances_when_step_valid() {
        let mut wizard = CheckupWizard::new();
        wizard.toggle_industry("tech");
        assert!(wizard.go_to_next_step());
        assert_eq!(wizard.current_step(), CheckupStep::SupplyChain);
    }

    #[test]
    fn next_step_clamps_at_step_three() {
        let mut wizard = CheckupWizard::new();
        wizard.toggle_industry("tech");
        wizard.toggle_region("asia");
        wizard.go_to_next_step();
        wizard.go_to_next_step();
        assert_eq!(wizard.current_step(), CheckupStep::Energy);

        // Energy defaults are positive, so step 3 is valid, but there is
        // nowhere further to go.
        assert!(wizard.can_advance());
        assert!(!wizard.go_to_next_step());
        assert_eq!(wizard.current_step(), CheckupStep::Energy);
    }

    #[test]
    fn previous_step_clamps_at_step_one() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.go_to_previous_step());
        assert_eq!(wizard.current_step(), CheckupStep::Industry);
    }

    #[test]
    fn previous_step_is_never_gated() {
        let mut wizard = CheckupWizard::new();
        wizard.toggle_industry("tech");
        wizard.go_to_next_step();

        // Undo the selection that got us here; going back still works.
        wizard.toggle_industry("tech");
        assert!(wizard.go_to_previous_step());
        assert_eq!(wizard.current_step(), CheckupStep::Industry);
    }

    // Validity

    #[test]
    fn step_one_valid_iff_an_industry_is_selected() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.validity(CheckupStep::Industry).is_valid);

        wizard.toggle_industry("food");
        assert!(wizard.validity(CheckupStep::Industry).is_valid);
    }

    #[test]
    fn step_two_valid_iff_a_region_is_selected() {
        let mut wizard = CheckupWizard::new();
        assert!(!wizard.validity(CheckupStep::SupplyChain).is_valid);

        wizard.toggle_region("africa");
        assert!(wizard.validity(CheckupStep::SupplyChain).is_valid);
    }

    #[test]
    fn step_three_valid_iff_any_energy_positive() {
        let mut wizard = CheckupWizard::new();
        assert!(wizard.validity(CheckupStep::Energy).is_valid);

        all_energy_zero(&mut wizard);
        assert!(!wizard.validity(CheckupStep::Energy).is_valid);

        wizard.set_energy(EnergyField::Heating, 5);
        assert!(wizard.validity(CheckupStep::Energy).is_valid);
    }

    #[test]
    fn invalid_steps_carry_a_message() {
        let wizard = CheckupWizard::new();
        let validity = wizard.validity(CheckupStep::Industry);
        assert_eq!(validity.message, "Select at least one industry");
    }

    // Progress

    #[test]
    fn overall_progress_counts_satisfied_steps() {
        let mut wizard = CheckupWizard::new();

        // Energy defaults already satisfy step 3.
        assert!((wizard.overall_progress() - 100.0 / 3.0).abs() < 1e-9);

        all_energy_zero(&mut wizard);
        assert_eq!(wizard.overall_progress(), 0.0);

        wizard.toggle_industry("tech");
        assert!((wizard.overall_progress() - 100.0 / 3.0).abs() < 1e-9);

        wizard.toggle_region("europe");
        assert!((wizard.overall_progress() - 200.0 / 3.0).abs() < 1e-9);

        wizard.set_energy(EnergyField::Electricity, 10);
        assert_eq!(wizard.overall_progress(), 100.0);
    }

    #[test]
    fn overall_progress_is_independent_of_current_step() {
        let mut wizard = CheckupWizard::new();
        wizard.toggle_industry("tech");
        let before = wizard.overall_progress();

        wizard.go_to_next_step();
        assert_eq!(wizard.overall_progress(), before);
    }

    // CO₂ preview

    #[test]
    fn co2_preview_uses_demo_formula() {
        let wizard = CheckupWizard::new();
        assert_eq!(wizard.co2_preview(), 300);
    }

    // Reconstitution

    #[test]
    fn reconstitute_applies_flags_by_id() {
        let wizard = CheckupWizard::reconstitute(
            CheckupStep::SupplyChain,
            &["tech".to_string(), "food".to_string()],
            &["asia".to_string()],
            EnergyMix::default(),
        );
        assert_eq!(wizard.current_step(), CheckupStep::SupplyChain);
        assert_eq!(wizard.selected_industry_count(), 2);
        assert_eq!(wizard.selected_region_count(), 1);
    }

    #[test]
    fn reconstitute_drops_unknown_ids() {
        let wizard = CheckupWizard::reconstitute(
            CheckupStep::Industry,
            &["tech".to_string(), "mining".to_string()],
            &["atlantis".to_string()],
            EnergyMix::default(),
        );
        assert_eq!(wizard.selected_industry_count(), 1);
        assert_eq!(wizard.selected_region_count(), 0);
        assert_eq!(wizard.industries().len(), 6);
        assert_eq!(wizard.regions().len(), 6);
    }
}
