//! Display summary
//!
//! Rounded view of a totals report. Rounding lives here and never in the
//! totals or adequacy calculations themselves.

use serde::Serialize;

use super::{compute_adequacy, TotalsReport};
use crate::models::{FoodGroupId, NutrientField, NutrientVector, RequirementTargets};

/// One displayed group row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub group: FoodGroupId,
    pub name: &'static str,
    pub portions: f64,
    pub nutrients: NutrientVector,
}

/// Rounded totals, targets and adequacy for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Groups with at least some portions selected
    pub rows: Vec<SummaryRow>,
    pub total_portions: f64,
    pub grand_total: NutrientVector,
    pub requirements: NutrientVector,
    /// Percent of each requirement met
    pub adequacy: NutrientVector,
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Energy to whole kcal, the other nutrients to one decimal
pub fn round_nutrients(v: &NutrientVector) -> NutrientVector {
    v.map(|field, value| match field {
        NutrientField::Energy => round_to(value, 0),
        _ => round_to(value, 1),
    })
}

/// Percentages to one decimal
pub fn round_percentages(v: &NutrientVector) -> NutrientVector {
    v.map(|_, value| round_to(value, 1))
}

/// Build the display summary. Adequacy is computed from full-precision totals
/// and only then rounded.
pub fn build_summary(totals: &TotalsReport, requirements: &RequirementTargets) -> Summary {
    let rows = totals
        .per_group
        .iter()
        .filter(|(_, t)| t.portions > 0.0)
        .map(|(group, t)| SummaryRow {
            group: *group,
            name: group.display_name(),
            portions: round_to(t.portions, 1),
            nutrients: round_nutrients(&t.nutrients),
        })
        .collect();

    let adequacy = compute_adequacy(&totals.grand_total, requirements);

    Summary {
        rows,
        total_portions: round_to(totals.total_portions, 1),
        grand_total: round_nutrients(&totals.grand_total),
        requirements: *requirements.values(),
        adequacy: round_percentages(&adequacy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GroupTotal;
    use std::collections::BTreeMap;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.3333, 1), 3.3);
        assert_eq!(round_to(279.6, 0), 280.0);
        assert_eq!(round_to(7.25, 1), 7.3);
    }

    #[test]
    fn test_summary_suppresses_zero_rows() {
        let mut per_group = BTreeMap::new();
        per_group.insert(
            FoodGroupId::Cereals,
            GroupTotal {
                portions: 2.0,
                nutrients: NutrientVector::new(280.0, 6.0, 60.0, 2.0),
            },
        );
        per_group.insert(FoodGroupId::Fruits, GroupTotal::default());
        let totals = TotalsReport {
            per_group,
            grand_total: NutrientVector::new(280.0, 6.0, 60.0, 2.0),
            total_portions: 2.0,
            unreferenced_groups: Vec::new(),
            orphan_selections: Vec::new(),
        };

        let summary = build_summary(&totals, &RequirementTargets::default());
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].group, FoodGroupId::Cereals);
        assert_eq!(summary.rows[0].name, "Cereales");
        assert_eq!(summary.adequacy, NutrientVector::new(14.0, 7.5, 24.0, 3.3));
        assert_eq!(summary.requirements.energy, 2000.0);
    }
}
