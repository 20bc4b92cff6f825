//! Food group identifiers
//!
//! The set of exchange groups is closed. The lowercase keys are the ones used
//! by the catalog and reference datasets.

use serde::{Deserialize, Serialize};

/// Exchange food group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodGroupId {
    #[serde(rename = "cereales")]
    Cereals,
    #[serde(rename = "verduras")]
    Vegetables,
    #[serde(rename = "frutas")]
    Fruits,
    #[serde(rename = "lacteos")]
    Dairy,
    #[serde(rename = "carnes")]
    Meats,
    #[serde(rename = "leguminosas")]
    Legumes,
    #[serde(rename = "lipidos")]
    Lipids,
    #[serde(rename = "aceites")]
    Oils,
    #[serde(rename = "azucares")]
    Sugars,
}

impl FoodGroupId {
    /// All groups in display order
    pub const ALL: [FoodGroupId; 9] = [
        FoodGroupId::Cereals,
        FoodGroupId::Vegetables,
        FoodGroupId::Fruits,
        FoodGroupId::Dairy,
        FoodGroupId::Meats,
        FoodGroupId::Legumes,
        FoodGroupId::Lipids,
        FoodGroupId::Oils,
        FoodGroupId::Sugars,
    ];

    /// Dataset key
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroupId::Cereals => "cereales",
            FoodGroupId::Vegetables => "verduras",
            FoodGroupId::Fruits => "frutas",
            FoodGroupId::Dairy => "lacteos",
            FoodGroupId::Meats => "carnes",
            FoodGroupId::Legumes => "leguminosas",
            FoodGroupId::Lipids => "lipidos",
            FoodGroupId::Oils => "aceites",
            FoodGroupId::Sugars => "azucares",
        }
    }

    /// Heading shown for the group
    pub fn display_name(&self) -> &'static str {
        match self {
            FoodGroupId::Cereals => "Cereales",
            FoodGroupId::Vegetables => "Verduras",
            FoodGroupId::Fruits => "Frutas",
            FoodGroupId::Dairy => "Lácteos",
            FoodGroupId::Meats => "Carnes",
            FoodGroupId::Legumes => "Leguminosas",
            FoodGroupId::Lipids => "Lípidos",
            FoodGroupId::Oils => "Aceites",
            FoodGroupId::Sugars => "Azúcares",
        }
    }

    /// Parse a dataset key (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|g| g.as_str() == key)
    }
}

impl std::fmt::Display for FoodGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_keys() {
        for group in FoodGroupId::ALL {
            assert_eq!(FoodGroupId::parse(group.as_str()), Some(group));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FoodGroupId::parse("Cereales"), Some(FoodGroupId::Cereals));
        assert_eq!(FoodGroupId::parse(" LACTEOS"), Some(FoodGroupId::Dairy));
    }

    #[test]
    fn test_parse_unknown_group() {
        assert_eq!(FoodGroupId::parse("libre"), None);
    }

    #[test]
    fn test_serde_uses_dataset_keys() {
        let json = serde_json::to_string(&FoodGroupId::Legumes).unwrap();
        assert_eq!(json, "\"leguminosas\"");
        let parsed: FoodGroupId = serde_json::from_str("\"azucares\"").unwrap();
        assert_eq!(parsed, FoodGroupId::Sugars);
    }
}
