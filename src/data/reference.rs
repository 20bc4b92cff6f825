//! Reference table
//!
//! Nutrient content of exactly one exchange portion of each food group.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{DataError, DataResult};
use crate::models::{FoodGroupId, NutrientField, NutrientVector};

/// Largest value accepted for any nutrient in one portion
pub const MAX_REFERENCE_VALUE: f64 = 10_000.0;

const BUILTIN_REFERENCE: &str = include_str!("../../data/valores_nutricionales.json");

/// Per-portion nutrient values keyed by food group
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: BTreeMap<FoodGroupId, NutrientVector>,
}

impl ReferenceTable {
    /// Build a table, rejecting values outside `0..=MAX_REFERENCE_VALUE`
    pub fn new(entries: BTreeMap<FoodGroupId, NutrientVector>) -> DataResult<Self> {
        for (group, vector) in &entries {
            for field in NutrientField::ALL {
                let value = vector.get(field);
                if !(0.0..=MAX_REFERENCE_VALUE).contains(&value) {
                    return Err(DataError::InvalidReference {
                        group: *group,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Parse a table keyed by group, each entry `{kcal, prot, cho, lip}`
    pub fn from_json(json: &str) -> DataResult<Self> {
        let entries: BTreeMap<FoodGroupId, NutrientVector> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The table compiled into the binary
    pub fn builtin() -> DataResult<Self> {
        Self::from_json(BUILTIN_REFERENCE)
    }

    pub fn lookup_reference(&self, group: FoodGroupId) -> Option<NutrientVector> {
        self.entries.get(&group).copied()
    }

    /// Groups with an entry, in group order
    pub fn groups(&self) -> impl Iterator<Item = FoodGroupId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodGroupId, NutrientVector)> + '_ {
        self.entries.iter().map(|(g, v)| (*g, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_group() {
        let table = ReferenceTable::builtin().unwrap();
        assert_eq!(table.len(), FoodGroupId::ALL.len());
        assert_eq!(
            table.lookup_reference(FoodGroupId::Cereals),
            Some(NutrientVector::new(140.0, 3.0, 30.0, 1.0))
        );
        assert_eq!(
            table.lookup_reference(FoodGroupId::Sugars),
            Some(NutrientVector::new(20.0, 0.0, 5.0, 0.0))
        );
    }

    #[test]
    fn test_missing_group_is_absent() {
        let table =
            ReferenceTable::from_json(r#"{"frutas": {"kcal": 65, "prot": 1, "cho": 15, "lip": 0}}"#).unwrap();
        assert!(table.lookup_reference(FoodGroupId::Fruits).is_some());
        assert!(table.lookup_reference(FoodGroupId::Dairy).is_none());
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = ReferenceTable::from_json(r#"{"carnes": {"kcal": 75, "prot": -7, "cho": 0, "lip": 5}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidReference { group: FoodGroupId::Meats, field: NutrientField::Protein, .. }
        ));
    }

    #[test]
    fn test_oversized_value_rejected() {
        let err = ReferenceTable::from_json(r#"{"frutas": {"kcal": 1e308, "prot": 1, "cho": 15, "lip": 0}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidReference { group: FoodGroupId::Fruits, field: NutrientField::Energy, .. }
        ));
    }

    #[test]
    fn test_unknown_group_rejected() {
        let err = ReferenceTable::from_json(r#"{"libre": {"kcal": 0, "prot": 0, "cho": 0, "lip": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }
}
