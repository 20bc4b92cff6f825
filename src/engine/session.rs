//! Calculator session
//!
//! Owns the user's selections and requirement targets alongside shared,
//! read-only catalog data. All mutation goes through `set_portion` and
//! `set_requirement`; every read recomputes from the selection map.

use std::sync::Arc;

use super::{
    build_summary, compute_adequacy, compute_totals, EngineError, EngineResult, SelectionMap, Summary,
    TotalsReport,
};
use crate::data::{FoodCatalog, ReferenceTable};
use crate::models::{NutrientField, NutrientVector, RequirementTargets};

/// State for one user of the calculator
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<FoodCatalog>,
    reference: Arc<ReferenceTable>,
    selections: SelectionMap,
    requirements: RequirementTargets,
}

impl Session {
    /// Start an empty session. Fails if the catalog has no foods.
    pub fn new(catalog: Arc<FoodCatalog>, reference: Arc<ReferenceTable>) -> EngineResult<Self> {
        if catalog.is_empty() {
            return Err(EngineError::CatalogUnavailable);
        }
        Ok(Self {
            catalog,
            reference,
            selections: SelectionMap::new(),
            requirements: RequirementTargets::default(),
        })
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    pub fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    /// Set the portions for a food from raw input; returns the stored value
    pub fn set_portion(&mut self, food_id: &str, raw_value: &str) -> f64 {
        if !self.catalog.contains_item(food_id.trim()) {
            tracing::warn!("Portion set for unknown food '{}'; it will not be counted", food_id);
        }
        self.selections.set_portion(food_id, raw_value)
    }

    pub fn portion(&self, food_id: &str) -> f64 {
        self.selections.get_portion(food_id)
    }

    /// Replace one requirement field from raw input
    pub fn set_requirement(&mut self, field: NutrientField, raw_value: &str) -> RequirementTargets {
        self.requirements.set_requirement(field, raw_value)
    }

    pub fn requirements(&self) -> RequirementTargets {
        self.requirements
    }

    pub fn totals(&self) -> EngineResult<TotalsReport> {
        compute_totals(&self.catalog, &self.reference, &self.selections)
    }

    pub fn adequacy(&self) -> EngineResult<NutrientVector> {
        let totals = self.totals()?;
        Ok(compute_adequacy(&totals.grand_total, &self.requirements))
    }

    pub fn summary(&self) -> EngineResult<Summary> {
        let totals = self.totals()?;
        Ok(build_summary(&totals, &self.requirements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodGroupId;

    fn session() -> Session {
        let catalog = FoodCatalog::from_json(
            r#"{"cereales": [{"id": "c1", "nombre": "Tortilla", "porcion": "1 pieza"}]}"#,
        )
        .unwrap();
        let reference =
            ReferenceTable::from_json(r#"{"cereales": {"kcal": 140, "prot": 3, "cho": 30, "lip": 1}}"#).unwrap();
        Session::new(Arc::new(catalog), Arc::new(reference)).unwrap()
    }

    #[test]
    fn test_end_to_end_totals_and_adequacy() {
        let mut session = session();
        session.set_portion("c1", "2");

        let totals = session.totals().unwrap();
        let cereals = totals.group(FoodGroupId::Cereals).unwrap();
        assert_eq!(cereals.portions, 2.0);
        assert_eq!(cereals.nutrients, NutrientVector::new(280.0, 6.0, 60.0, 2.0));
        assert_eq!(totals.grand_total, NutrientVector::new(280.0, 6.0, 60.0, 2.0));

        let adequacy = session.adequacy().unwrap();
        assert!((adequacy.energy - 14.0).abs() < 1e-9);
        assert!((adequacy.protein - 7.5).abs() < 1e-9);
        assert!((adequacy.carbohydrate - 24.0).abs() < 1e-9);
        assert!((adequacy.lipid - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_protein_requirement() {
        let mut session = session();
        session.set_portion("c1", "2");
        let updated = session.set_requirement(NutrientField::Protein, "0");
        assert_eq!(updated.get(NutrientField::Protein), 0.0);

        let totals = session.totals().unwrap();
        assert_eq!(totals.grand_total.protein, 6.0);
        assert_eq!(session.adequacy().unwrap().protein, 0.0);
    }

    #[test]
    fn test_recomputes_after_every_edit() {
        let mut session = session();
        session.set_portion("c1", "1");
        assert_eq!(session.totals().unwrap().grand_total.energy, 140.0);
        session.set_portion("c1", "3");
        assert_eq!(session.totals().unwrap().grand_total.energy, 420.0);
        session.set_portion("c1", "oops");
        assert_eq!(session.totals().unwrap().grand_total.energy, 0.0);
    }

    #[test]
    fn test_unknown_food_is_stored_but_not_counted() {
        let mut session = session();
        assert_eq!(session.set_portion("zz", "5"), 5.0);
        assert_eq!(session.portion("zz"), 5.0);
        assert_eq!(session.totals().unwrap().grand_total, NutrientVector::zero());
    }

    #[test]
    fn test_padded_food_id_is_counted() {
        let mut session = session();
        session.set_portion(" c1", "2");
        assert_eq!(session.totals().unwrap().grand_total.energy, 280.0);
        assert!(session.totals().unwrap().orphan_selections.is_empty());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = FoodCatalog::from_json("{}").unwrap();
        let err = Session::new(Arc::new(catalog), Arc::new(ReferenceTable::default())).unwrap_err();
        assert_eq!(err, EngineError::CatalogUnavailable);
    }

    #[test]
    fn test_summary_rounds_for_display() {
        let mut session = session();
        session.set_portion("c1", "2");
        let summary = session.summary().unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.adequacy.lipid, 3.3);
        assert_eq!(summary.grand_total, NutrientVector::new(280.0, 6.0, 60.0, 2.0));
    }
}
