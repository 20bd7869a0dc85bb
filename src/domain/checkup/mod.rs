//! Checkup module - the three-step sustainability questionnaire.
//!
//! The wizard walks a visitor through industry selection, supply-chain
//! mapping, and an energy-mix profile. Forward navigation is gated by
//! per-step validity; backward navigation is always allowed.

mod catalog;
mod energy;
mod selection;
mod snapshot;
mod step;
mod wizard;

pub use catalog::{industry_catalog, region_catalog};
pub use energy::{EnergyField, EnergyMix};
pub use selection::{IndustrySelection, MapPoint, RegionSelection};
pub use snapshot::CheckupSnapshot;
pub use step::{CheckupStep, StepValidity};
pub use wizard::CheckupWizard;
