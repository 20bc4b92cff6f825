//! Portion aggregation
//!
//! Totals are always recomputed in full from the selection map; nothing is
//! cached between calls.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EngineError, EngineResult, SelectionMap};
use crate::data::{unreferenced_groups, FoodCatalog, ReferenceTable};
use crate::models::{FoodGroupId, NutrientVector};

/// Portions and nutrients for one food group
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupTotal {
    pub portions: f64,
    pub nutrients: NutrientVector,
}

/// Full-precision totals for a selection set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsReport {
    /// One entry per reference-table group, including groups with no portions
    pub per_group: BTreeMap<FoodGroupId, GroupTotal>,
    pub grand_total: NutrientVector,
    /// Sum of portions over all reported groups
    pub total_portions: f64,
    /// Catalog groups skipped for lack of reference values
    pub unreferenced_groups: Vec<FoodGroupId>,
    /// Selected food ids that are not in the catalog, sorted
    pub orphan_selections: Vec<String>,
}

impl TotalsReport {
    pub fn group(&self, group: FoodGroupId) -> Option<&GroupTotal> {
        self.per_group.get(&group)
    }
}

/// Aggregate selected portions into per-group and grand totals.
///
/// Iterates the reference table: a group without a reference entry is never
/// reported, and selections for foods outside the catalog are ignored.
pub fn compute_totals(
    catalog: &FoodCatalog,
    reference: &ReferenceTable,
    selections: &SelectionMap,
) -> EngineResult<TotalsReport> {
    if catalog.is_empty() {
        return Err(EngineError::CatalogUnavailable);
    }

    let per_group: BTreeMap<FoodGroupId, GroupTotal> = reference
        .iter()
        .map(|(group, per_portion)| {
            let portions: f64 = catalog
                .items_in_group(group)
                .iter()
                .map(|item| selections.get_portion(&item.id))
                .sum();
            let total = GroupTotal {
                portions,
                nutrients: per_portion * portions,
            };
            (group, total)
        })
        .collect();

    let grand_total: NutrientVector = per_group.values().map(|t| t.nutrients).sum();
    let total_portions: f64 = per_group.values().map(|t| t.portions).sum();

    let unreferenced = unreferenced_groups(catalog, reference);
    let mut orphans: Vec<String> = selections
        .iter()
        .filter(|(id, _)| !catalog.contains_item(id))
        .map(|(id, _)| id.to_string())
        .collect();
    orphans.sort();

    if !orphans.is_empty() {
        tracing::debug!("Ignoring selections for foods not in the catalog: {:?}", orphans);
    }

    Ok(TotalsReport {
        per_group,
        grand_total,
        total_portions,
        unreferenced_groups: unreferenced,
        orphan_selections: orphans,
    })
}
