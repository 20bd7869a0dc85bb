//! Domain layer - pure checkup logic.
//!
//! Everything in here is synchronous and total over its clamped inputs;
//! persistence and logging live behind ports in the outer layers.

pub mod checkup;
pub mod emissions;
pub mod foundation;
