//! Foundation module - Shared domain primitives.
//!
//! Value objects that form the vocabulary of the Earth Story domain.

mod percentage;
mod timestamp;

pub use percentage::EnergyPercent;
pub use timestamp::Timestamp;
