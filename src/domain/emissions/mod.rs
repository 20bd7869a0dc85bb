//! Emissions module - the "what if" calculator.
//!
//! A linear scenario estimate over four business variables, plus the
//! banding used to color the result.

mod estimate;

pub use estimate::{EmissionInputs, EmissionLevel};
