//! Energy-mix profile for step 3.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EnergyPercent;

/// Which slider an intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyField {
    Electricity,
    Heating,
    Transportation,
}

/// The three energy sliders.
///
/// Fields are independent; there is no constraint that they sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyMix {
    pub electricity: EnergyPercent,
    pub heating: EnergyPercent,
    pub transportation: EnergyPercent,
}

impl EnergyMix {
    /// Sets one field, clamping and snapping the raw slider value.
    pub fn set(&mut self, field: EnergyField, value: i64) {
        let pct = EnergyPercent::new(value);
        match field {
            EnergyField::Electricity => self.electricity = pct,
            EnergyField::Heating => self.heating = pct,
            EnergyField::Transportation => self.transportation = pct,
        }
    }

    /// Reads one field.
    pub fn get(&self, field: EnergyField) -> EnergyPercent {
        match field {
            EnergyField::Electricity => self.electricity,
            EnergyField::Heating => self.heating,
            EnergyField::Transportation => self.transportation,
        }
    }

    /// True if any slider sits above zero.
    pub fn any_positive(&self) -> bool {
        self.electricity.is_positive()
            || self.heating.is_positive()
            || self.transportation.is_positive()
    }

    /// Live CO₂ preview in tons per year.
    ///
    /// An unweighted linear proxy from the original demo, kept exactly
    /// for compatibility: `round((electricity + heating + transportation) * 2.5)`.
    pub fn co2_preview(&self) -> u32 {
        let total = u32::from(self.electricity.value())
            + u32::from(self.heating.value())
            + u32::from(self.transportation.value());
        (f64::from(total) * 2.5).round() as u32
    }
}

impl Default for EnergyMix {
    /// The demo's starting slider positions.
    fn default() -> Self {
        Self {
            electricity: EnergyPercent::new(50),
            heating: EnergyPercent::new(30),
            transportation: EnergyPercent::new(40),
        }
    }
}
