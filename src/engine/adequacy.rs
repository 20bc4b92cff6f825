//! Adequacy calculation
//!
//! Percentage of each requirement met by the grand total.

use crate::models::{NutrientVector, RequirementTargets};

/// `total / requirement * 100` per field. A field whose requirement is 0 has
/// an adequacy of exactly 0, whatever the total.
pub fn compute_adequacy(grand_total: &NutrientVector, requirements: &RequirementTargets) -> NutrientVector {
    grand_total.map(|field, total| {
        let requirement = requirements.get(field);
        if requirement > 0.0 {
            total / requirement * 100.0
        } else {
            0.0
        }
    })
}
