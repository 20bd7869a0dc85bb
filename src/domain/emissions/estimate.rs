//! Scenario inputs and the linear emissions estimate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tons of CO₂ per employee per year.
const EMPLOYEE_FACTOR: f64 = 4.5;
/// Kilograms of CO₂ per kWh of electricity.
const ELECTRICITY_FACTOR: f64 = 0.0004;
/// Kilograms of CO₂ per km of transportation.
const TRANSPORTATION_FACTOR: f64 = 0.002;
/// Kilograms of CO₂ per dollar of materials spend.
const MATERIALS_FACTOR: f64 = 0.003;

/// The four adjustable scenario variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionInputs {
    pub employees: u32,
    pub electricity_kwh: u32,
    pub transportation_km: u32,
    pub materials_usd: u32,
}

impl EmissionInputs {
    /// Annual emissions estimate in tons, rounded to a whole number.
    ///
    /// A deliberately simple linear model from the original demo; the
    /// factors are not calibrated and must stay as they are.
    pub fn estimate(&self) -> u32 {
        let total = f64::from(self.employees) * EMPLOYEE_FACTOR
            + f64::from(self.electricity_kwh) * ELECTRICITY_FACTOR
            + f64::from(self.transportation_km) * TRANSPORTATION_FACTOR
            + f64::from(self.materials_usd) * MATERIALS_FACTOR;
        total.round() as u32
    }

    /// Banding for the current estimate.
    pub fn level(&self) -> EmissionLevel {
        EmissionLevel::for_emissions(self.estimate())
    }
}

impl Default for EmissionInputs {
    /// The demo's starting scenario.
    fn default() -> Self {
        Self {
            employees: 50,
            electricity_kwh: 100_000,
            transportation_km: 50_000,
            materials_usd: 25_000,
        }
    }
}

/// Result banding shown next to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionLevel {
    Excellent,
    Good,
    Moderate,
    High,
}

impl EmissionLevel {
    /// Bands a tons-per-year figure.
    pub fn for_emissions(tons: u32) -> Self {
        match tons {
            0..=499 => EmissionLevel::Excellent,
            500..=999 => EmissionLevel::Good,
            1000..=1999 => EmissionLevel::Moderate,
            _ => EmissionLevel::High,
        }
    }

    /// Encouragement line shown under the band.
    pub fn message(&self) -> &'static str {
        match self {
            EmissionLevel::Excellent => "You're a sustainability champion!",
            EmissionLevel::Good => "Great progress on your journey!",
            EmissionLevel::Moderate => "Room for growth ahead!",
            EmissionLevel::High => "Big opportunities for impact!",
        }
    }
}

impl fmt::Display for EmissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmissionLevel::Excellent => "Excellent",
            EmissionLevel::Good => "Good",
            EmissionLevel::Moderate => "Moderate",
            EmissionLevel::High => "High",
        };
        write!(f, "{}", s)
    }
}
