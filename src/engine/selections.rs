//! Selection store
//!
//! Sparse map of portions consumed per food id. Absent ids read as zero and
//! there is no removal; setting a portion to 0 is how a selection is cleared.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::parse_portion;

/// Portions entered by the user, keyed by food id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SelectionMap {
    portions: HashMap<String, f64>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the portion for `food_id` from raw input, overwriting any prior
    /// value. Malformed or negative input is stored as 0 and values above
    /// `MAX_PORTIONS` are capped. Returns the stored value.
    pub fn set_portion(&mut self, food_id: &str, raw_value: &str) -> f64 {
        let value = parse_portion(raw_value);
        self.portions.insert(food_id.trim().to_string(), value);
        value
    }

    /// Stored portion, or 0 when the food has never been set
    pub fn get_portion(&self, food_id: &str) -> f64 {
        self.portions.get(food_id.trim()).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.portions.iter().map(|(id, v)| (id.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.portions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_zero() {
        let selections = SelectionMap::new();
        assert_eq!(selections.get_portion("c1"), 0.0);
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut selections = SelectionMap::new();
        assert_eq!(selections.set_portion("c1", "2"), 2.0);
        assert_eq!(selections.get_portion("c1"), 2.0);
        selections.set_portion("c1", "0.5");
        assert_eq!(selections.get_portion("c1"), 0.5);
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn test_invalid_input_stores_zero() {
        let mut selections = SelectionMap::new();
        selections.set_portion("c1", "3");
        assert_eq!(selections.set_portion("c1", "-5"), 0.0);
        assert_eq!(selections.get_portion("c1"), 0.0);

        assert_eq!(selections.set_portion("f1", "abc"), 0.0);
        assert_eq!(selections.get_portion("f1"), 0.0);
    }

    #[test]
    fn test_huge_input_is_capped() {
        let mut selections = SelectionMap::new();
        assert_eq!(selections.set_portion("v1", "1e308"), crate::models::MAX_PORTIONS);
        assert_eq!(selections.get_portion("v1"), crate::models::MAX_PORTIONS);
    }

    #[test]
    fn test_food_id_is_trimmed() {
        let mut selections = SelectionMap::new();
        selections.set_portion(" cer-tortilla ", "2");
        assert_eq!(selections.get_portion("cer-tortilla"), 2.0);
        assert_eq!(selections.len(), 1);
        selections.set_portion("cer-tortilla", "3");
        assert_eq!(selections.get_portion(" cer-tortilla"), 3.0);
        assert_eq!(selections.len(), 1);
    }
}
