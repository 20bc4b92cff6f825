//! Food item model
//!
//! A single food inside an exchange group, with its reference portion.

use serde::{Deserialize, Serialize};

use super::FoodGroupId;

/// A food as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    /// Human-readable reference portion, e.g. "1/2 taza". Display only.
    pub portion_description: String,
    pub group: FoodGroupId,
}

/// Catalog entry as it appears in the dataset, before the group is attached
#[derive(Debug, Clone, Deserialize)]
pub struct FoodItemRecord {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "porcion", default)]
    pub portion_description: String,
}

impl FoodItemRecord {
    pub fn into_item(self, group: FoodGroupId) -> FoodItem {
        FoodItem {
            id: self.id.trim().to_string(),
            name: self.name,
            portion_description: self.portion_description,
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_dataset_keys() {
        let record: FoodItemRecord =
            serde_json::from_str(r#"{"id": " c1 ", "nombre": "Tortilla de maíz", "porcion": "1 pieza"}"#)
                .unwrap();
        let item = record.into_item(FoodGroupId::Cereals);
        assert_eq!(item.id, "c1");
        assert_eq!(item.name, "Tortilla de maíz");
        assert_eq!(item.portion_description, "1 pieza");
        assert_eq!(item.group, FoodGroupId::Cereals);
    }

    #[test]
    fn test_record_portion_is_optional() {
        let record: FoodItemRecord = serde_json::from_str(r#"{"id": "f1", "name": "Apple"}"#).unwrap();
        assert_eq!(record.portion_description, "");
    }
}
