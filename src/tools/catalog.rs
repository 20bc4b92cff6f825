//! Catalog MCP Tools
//!
//! Read-only views of the food groups and the foods listed under each.

use serde::Serialize;

use crate::engine::Session;
use crate::models::{FoodGroupId, FoodItem, NutrientVector};

/// Summary of a food group for list_food_groups
#[derive(Debug, Serialize)]
pub struct FoodGroupSummary {
    pub group: FoodGroupId,
    pub name: &'static str,
    pub item_count: usize,
    /// Nutrients in one exchange portion; absent if the group has no reference entry
    pub per_portion: Option<NutrientVector>,
}

/// Response for list_food_groups
#[derive(Debug, Serialize)]
pub struct ListFoodGroupsResponse {
    pub groups: Vec<FoodGroupSummary>,
    pub total_items: usize,
}

/// A food with the portions currently selected for it
#[derive(Debug, Serialize)]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    pub portion_description: String,
    pub portions: f64,
}

impl FoodEntry {
    fn from_item(item: &FoodItem, portions: f64) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            portion_description: item.portion_description.clone(),
            portions,
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub group: FoodGroupId,
    pub name: &'static str,
    pub items: Vec<FoodEntry>,
}

/// List every group in the catalog or reference table
pub fn list_food_groups(session: &Session) -> ListFoodGroupsResponse {
    let catalog = session.catalog();
    let reference = session.reference();

    let mut groups: Vec<FoodGroupId> = catalog.groups_in_catalog().into_iter().collect();
    for group in reference.groups() {
        if !groups.contains(&group) {
            groups.push(group);
        }
    }
    groups.sort();

    let groups = groups
        .into_iter()
        .map(|group| FoodGroupSummary {
            group,
            name: group.display_name(),
            item_count: catalog.items_in_group(group).len(),
            per_portion: reference.lookup_reference(group),
        })
        .collect();

    ListFoodGroupsResponse {
        groups,
        total_items: catalog.item_count(),
    }
}

/// List the foods of one group with their current portions
pub fn list_foods(session: &Session, group: &str) -> Result<ListFoodsResponse, String> {
    let group = FoodGroupId::parse(group).ok_or_else(|| format!("Unknown food group: {}", group))?;

    let items = session
        .catalog()
        .items_in_group(group)
        .iter()
        .map(|item| FoodEntry::from_item(item, session.portion(&item.id)))
        .collect();

    Ok(ListFoodsResponse {
        group,
        name: group.display_name(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FoodCatalog, ReferenceTable};
    use std::sync::Arc;

    fn session() -> Session {
        let catalog = FoodCatalog::from_json(
            r#"{
                "cereales": [{"id": "c1", "nombre": "Tortilla", "porcion": "1 pieza"}],
                "azucares": [{"id": "a1", "nombre": "Miel", "porcion": "1 cdita"}]
            }"#,
        )
        .unwrap();
        let reference = ReferenceTable::from_json(
            r#"{
                "cereales": {"kcal": 140, "prot": 3, "cho": 30, "lip": 1},
                "frutas": {"kcal": 65, "prot": 1, "cho": 15, "lip": 0}
            }"#,
        )
        .unwrap();
        Session::new(Arc::new(catalog), Arc::new(reference)).unwrap()
    }

    #[test]
    fn test_list_food_groups_merges_sources() {
        let response = list_food_groups(&session());
        let groups: Vec<FoodGroupId> = response.groups.iter().map(|g| g.group).collect();
        assert_eq!(groups, vec![FoodGroupId::Cereals, FoodGroupId::Fruits, FoodGroupId::Sugars]);
        assert_eq!(response.total_items, 2);

        let sugars = &response.groups[2];
        assert!(sugars.per_portion.is_none());
        assert_eq!(sugars.item_count, 1);
    }

    #[test]
    fn test_list_foods_shows_portions() {
        let mut session = session();
        session.set_portion("c1", "1.5");
        let response = list_foods(&session, "cereales").unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].portions, 1.5);
        assert_eq!(response.items[0].portion_description, "1 pieza");
    }

    #[test]
    fn test_list_foods_unknown_group() {
        let err = list_foods(&session(), "postres").unwrap_err();
        assert!(err.contains("postres"));
    }
}
