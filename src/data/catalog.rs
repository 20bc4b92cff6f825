//! Food catalog
//!
//! Ordered food lists per exchange group. Loaded once and shared read-only.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{DataError, DataResult};
use crate::models::{FoodGroupId, FoodItem, FoodItemRecord};

const BUILTIN_CATALOG: &str = include_str!("../../data/alimentos.json");

/// Foods grouped by exchange group, in dataset order
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    groups: BTreeMap<FoodGroupId, Vec<FoodItem>>,
    index: HashMap<String, (FoodGroupId, usize)>,
}

impl FoodCatalog {
    /// Build a catalog from dataset records. Food ids must be unique.
    pub fn from_records(records: BTreeMap<FoodGroupId, Vec<FoodItemRecord>>) -> DataResult<Self> {
        let mut groups = BTreeMap::new();
        let mut index: HashMap<String, (FoodGroupId, usize)> = HashMap::new();

        for (group, group_records) in records {
            let mut items = Vec::with_capacity(group_records.len());
            for record in group_records {
                let item = record.into_item(group);
                if let Some((first, _)) = index.get(&item.id) {
                    return Err(DataError::DuplicateFoodId {
                        id: item.id,
                        first: *first,
                        second: group,
                    });
                }
                index.insert(item.id.clone(), (group, items.len()));
                items.push(item);
            }
            groups.insert(group, items);
        }

        Ok(Self { groups, index })
    }

    /// Parse a catalog keyed by group, each entry a list of `{id, nombre, porcion}`
    pub fn from_json(json: &str) -> DataResult<Self> {
        let records: BTreeMap<FoodGroupId, Vec<FoodItemRecord>> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> DataResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn groups_in_catalog(&self) -> BTreeSet<FoodGroupId> {
        self.groups.keys().copied().collect()
    }

    /// Foods of a group in dataset order; empty if the group is not listed
    pub fn items_in_group(&self, group: FoodGroupId) -> &[FoodItem] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_item(&self, food_id: &str) -> Option<&FoodItem> {
        let (group, pos) = self.index.get(food_id)?;
        self.groups.get(group).and_then(|items| items.get(*pos))
    }

    pub fn contains_item(&self, food_id: &str) -> bool {
        self.index.contains_key(food_id)
    }

    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// True when there are no foods at all
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
