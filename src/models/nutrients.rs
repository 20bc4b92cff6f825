//! Nutrient vector shared by the reference table, totals, targets and adequacy
//!
//! Only four nutrients are tracked: energy (kcal), protein, carbohydrate and
//! lipid (grams).

use serde::{Deserialize, Serialize};

/// One of the four tracked nutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientField {
    Energy,
    Protein,
    Carbohydrate,
    Lipid,
}

impl NutrientField {
    /// All fields in report order
    pub const ALL: [NutrientField; 4] = [
        NutrientField::Energy,
        NutrientField::Protein,
        NutrientField::Carbohydrate,
        NutrientField::Lipid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientField::Energy => "energy",
            NutrientField::Protein => "protein",
            NutrientField::Carbohydrate => "carbohydrate",
            NutrientField::Lipid => "lipid",
        }
    }

    /// Parse a field name, accepting long names and dataset keys
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "energy" | "kcal" | "calories" => Some(NutrientField::Energy),
            "protein" | "prot" => Some(NutrientField::Protein),
            "carbohydrate" | "carbohydrates" | "cho" | "carbs" => Some(NutrientField::Carbohydrate),
            "lipid" | "lipids" | "lip" | "fat" => Some(NutrientField::Lipid),
            _ => None,
        }
    }
}

impl std::fmt::Display for NutrientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    #[serde(alias = "kcal")]
    pub energy: f64, // kcal
    #[serde(alias = "prot")]
    pub protein: f64, // grams
    #[serde(alias = "cho")]
    pub carbohydrate: f64, // grams
    #[serde(alias = "lip")]
    pub lipid: f64, // grams
}

impl NutrientVector {
    pub fn new(energy: f64, protein: f64, carbohydrate: f64, lipid: f64) -> Self {
        Self {
            energy,
            protein,
            carbohydrate,
            lipid,
        }
    }

    /// Create a new vector with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every field by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            energy: self.energy * multiplier,
            protein: self.protein * multiplier,
            carbohydrate: self.carbohydrate * multiplier,
            lipid: self.lipid * multiplier,
        }
    }

    /// Field-wise sum with another vector
    pub fn add(&self, other: &NutrientVector) -> Self {
        Self {
            energy: self.energy + other.energy,
            protein: self.protein + other.protein,
            carbohydrate: self.carbohydrate + other.carbohydrate,
            lipid: self.lipid + other.lipid,
        }
    }

    pub fn get(&self, field: NutrientField) -> f64 {
        match field {
            NutrientField::Energy => self.energy,
            NutrientField::Protein => self.protein,
            NutrientField::Carbohydrate => self.carbohydrate,
            NutrientField::Lipid => self.lipid,
        }
    }

    pub fn set(&mut self, field: NutrientField, value: f64) {
        match field {
            NutrientField::Energy => self.energy = value,
            NutrientField::Protein => self.protein = value,
            NutrientField::Carbohydrate => self.carbohydrate = value,
            NutrientField::Lipid => self.lipid = value,
        }
    }

    /// Apply `f` to each field
    pub fn map<F: Fn(NutrientField, f64) -> f64>(&self, f: F) -> Self {
        let mut out = Self::zero();
        for field in NutrientField::ALL {
            out.set(field, f(field, self.get(field)));
        }
        out
    }
}

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, other: NutrientVector) -> NutrientVector {
        NutrientVector::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientVector {
    type Output = NutrientVector;

    fn mul(self, multiplier: f64) -> NutrientVector {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let cereal = NutrientVector::new(140.0, 3.0, 30.0, 1.0);
        let doubled = cereal * 2.0;
        assert_eq!(doubled, NutrientVector::new(280.0, 6.0, 60.0, 2.0));

        let sum = doubled + NutrientVector::new(20.0, 0.0, 5.0, 0.0);
        assert_eq!(sum, NutrientVector::new(300.0, 6.0, 65.0, 2.0));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: NutrientVector = Vec::<NutrientVector>::new().into_iter().sum();
        assert_eq!(total, NutrientVector::zero());
    }

    #[test]
    fn test_get_set_by_field() {
        let mut v = NutrientVector::zero();
        v.set(NutrientField::Carbohydrate, 12.5);
        assert_eq!(v.get(NutrientField::Carbohydrate), 12.5);
        assert_eq!(v.get(NutrientField::Lipid), 0.0);
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(NutrientField::parse("kcal"), Some(NutrientField::Energy));
        assert_eq!(NutrientField::parse("Protein"), Some(NutrientField::Protein));
        assert_eq!(NutrientField::parse(" cho "), Some(NutrientField::Carbohydrate));
        assert_eq!(NutrientField::parse("lip"), Some(NutrientField::Lipid));
        assert_eq!(NutrientField::parse("fiber"), None);
    }

    #[test]
    fn test_deserialize_short_keys() {
        let v: NutrientVector =
            serde_json::from_str(r#"{"kcal": 120, "prot": 8, "cho": 12, "lip": 5}"#).unwrap();
        assert_eq!(v, NutrientVector::new(120.0, 8.0, 12.0, 5.0));
    }
}
