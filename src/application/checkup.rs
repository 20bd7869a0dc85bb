//! CheckupService - session facade over the wizard and its persistence.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::checkup::{
    CheckupSnapshot, CheckupStep, CheckupWizard, EnergyField, EnergyMix, IndustrySelection,
    RegionSelection, StepValidity,
};
use crate::ports::SnapshotStore;

/// Read-only view handed to the rendering collaborator each cycle.
///
/// Everything derived in here is computed on read; nothing is stored
/// redundantly, so the view can never drift from the wizard.
#[derive(Debug, Clone, Serialize)]
pub struct CheckupView {
    pub current_step: CheckupStep,
    pub industries: Vec<IndustrySelection>,
    pub regions: Vec<RegionSelection>,
    pub energy: EnergyMix,
    pub step_validity: StepValidity,
    pub overall_progress: f64,
    pub co2_preview: u32,
}

/// Session facade: applies intents, keeps the snapshot slot current,
/// and never surfaces an error to the renderer.
///
/// Persistence is fire-and-forget: a failing write is logged and the
/// session continues on its in-memory state.
pub struct CheckupService {
    wizard: CheckupWizard,
    store: Arc<dyn SnapshotStore>,
    snapshot_key: String,
}

impl CheckupService {
    /// Starts a session, restoring the persisted snapshot if one exists.
    ///
    /// Fails soft: a missing or malformed snapshot, or an unreadable
    /// store, yields the default wizard.
    pub async fn start(store: Arc<dyn SnapshotStore>, snapshot_key: impl Into<String>) -> Self {
        let snapshot_key = snapshot_key.into();
        let wizard = Self::load_snapshot(store.as_ref(), &snapshot_key).await;
        Self {
            wizard,
            store,
            snapshot_key,
        }
    }

    async fn load_snapshot(store: &dyn SnapshotStore, key: &str) -> CheckupWizard {
        let payload = match store.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(key, "no persisted checkup snapshot, starting fresh");
                return CheckupWizard::new();
            }
            Err(e) => {
                warn!(key, error = %e, "snapshot store unreadable, starting fresh");
                return CheckupWizard::new();
            }
        };

        match CheckupSnapshot::from_json(&payload) {
            Ok(snapshot) => snapshot.restore(),
            Err(e) => {
                warn!(key, error = %e, "malformed checkup snapshot, starting fresh");
                CheckupWizard::new()
            }
        }
    }

    /// Persists the current wizard state. Fire-and-forget.
    async fn save_snapshot(&self) {
        let json = match CheckupSnapshot::capture(&self.wizard).to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode checkup snapshot");
                return;
            }
        };

        match self.store.set(&self.snapshot_key, &json).await {
            Ok(()) => debug!(key = %self.snapshot_key, "checkup snapshot written"),
            Err(e) => warn!(key = %self.snapshot_key, error = %e, "failed to persist checkup snapshot"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inbound intents (the renderer's only calls into the engine)
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggles an industry card. Unknown ids are a no-op.
    pub async fn toggle_industry(&mut self, id: &str) {
        if self.wizard.toggle_industry(id) {
            self.save_snapshot().await;
        }
    }

    /// Toggles a region pin. Unknown ids are a no-op.
    pub async fn toggle_region(&mut self, id: &str) {
        if self.wizard.toggle_region(id) {
            self.save_snapshot().await;
        }
    }

    /// Moves one energy slider; the raw value is clamped.
    pub async fn set_energy(&mut self, field: EnergyField, value: i64) {
        self.wizard.set_energy(field, value);
        self.save_snapshot().await;
    }

    /// Advances the wizard if the current step is valid.
    pub async fn go_to_next_step(&mut self) {
        if self.wizard.go_to_next_step() {
            self.save_snapshot().await;
        }
    }

    /// Goes back one step; always allowed.
    pub async fn go_to_previous_step(&mut self) {
        if self.wizard.go_to_previous_step() {
            self.save_snapshot().await;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read side
    // ─────────────────────────────────────────────────────────────────────────

    /// True when forward navigation would move.
    pub fn can_advance(&self) -> bool {
        self.wizard.can_advance()
    }

    /// The wizard itself, for callers that want the raw aggregate.
    pub fn wizard(&self) -> &CheckupWizard {
        &self.wizard
    }

    /// Builds the per-render-cycle view.
    pub fn view(&self) -> CheckupView {
        CheckupView {
            current_step: self.wizard.current_step(),
            industries: self.wizard.industries().to_vec(),
            regions: self.wizard.regions().to_vec(),
            energy: *self.wizard.energy(),
            step_validity: self.wizard.current_validity(),
            overall_progress: self.wizard.overall_progress(),
            co2_preview: self.wizard.co2_preview(),
        }
    }
}
