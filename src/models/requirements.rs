//! Patient requirement targets
//!
//! Daily targets for the four tracked nutrients. Every field is kept >= 0 and
//! is changed one field at a time through `set_requirement`.

use serde::Serialize;

use super::amount::parse_amount;
use super::{NutrientField, NutrientVector};

/// Targets used when a session starts
pub const DEFAULT_REQUIREMENTS: NutrientVector = NutrientVector {
    energy: 2000.0,
    protein: 80.0,
    carbohydrate: 250.0,
    lipid: 60.0,
};

/// Daily nutrient targets for a patient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequirementTargets {
    values: NutrientVector,
}

impl RequirementTargets {
    /// Build targets from a vector, clamping negatives to zero
    pub fn new(values: NutrientVector) -> Self {
        Self {
            values: values.map(|_, v| super::amount::clamp_amount(v)),
        }
    }

    pub fn values(&self) -> &NutrientVector {
        &self.values
    }

    pub fn get(&self, field: NutrientField) -> f64 {
        self.values.get(field)
    }

    /// Replace one field from raw user input and return the updated targets
    pub fn set_requirement(&mut self, field: NutrientField, raw_value: &str) -> RequirementTargets {
        let value = parse_amount(raw_value);
        self.values.set(field, value);
        *self
    }
}

impl Default for RequirementTargets {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIREMENTS)
    }
}
