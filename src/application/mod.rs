//! Application layer - the engine facade the renderer talks to.
//!
//! Orchestrates the wizard aggregate and the snapshot store: applies
//! user intents, persists after every mutation, and serves the read
//! model for each render cycle.

mod checkup;

pub use checkup::{CheckupService, CheckupView};
