//! Session MCP Tools
//!
//! Portion entry, requirement editing and the totals/adequacy reports.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::engine::{Session, Summary, TotalsReport};
use crate::models::{FoodGroupId, NutrientField, NutrientVector};

/// Numeric input that may arrive as a JSON number or as text
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Text form handed to the lenient parser
    pub fn to_raw(&self) -> String {
        match self {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s.clone(),
        }
    }
}

/// Response for set_portion
#[derive(Debug, Serialize)]
pub struct SetPortionResponse {
    pub food_id: String,
    pub food_name: Option<String>,
    pub group: Option<FoodGroupId>,
    /// Value actually stored after coercion
    pub portions: f64,
    /// false when the food is not in the catalog and will not be counted
    pub in_catalog: bool,
    pub grand_total: NutrientVector,
}

/// Response for get_portion
#[derive(Debug, Serialize)]
pub struct GetPortionResponse {
    pub food_id: String,
    pub portions: f64,
}

/// Response for get_requirements
#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub requirements: NutrientVector,
}

/// Response for set_requirement
#[derive(Debug, Serialize)]
pub struct SetRequirementResponse {
    pub field: NutrientField,
    /// Value actually stored after clamping
    pub value: f64,
    pub requirements: NutrientVector,
    pub adequacy: NutrientVector,
}

/// Response for get_adequacy
#[derive(Debug, Serialize)]
pub struct AdequacyResponse {
    pub grand_total: NutrientVector,
    pub requirements: NutrientVector,
    pub adequacy: NutrientVector,
}

/// Set the portions consumed for a food
pub fn set_portion(session: &mut Session, food_id: &str, value: &RawAmount) -> Result<SetPortionResponse, String> {
    let food_id = food_id.trim();
    if food_id.is_empty() {
        return Err("food_id cannot be empty".to_string());
    }

    let portions = session.set_portion(food_id, &value.to_raw());
    let totals = session.totals().map_err(|e| e.to_string())?;
    let item = session.catalog().find_item(food_id);

    Ok(SetPortionResponse {
        food_id: food_id.to_string(),
        food_name: item.map(|i| i.name.clone()),
        group: item.map(|i| i.group),
        portions,
        in_catalog: item.is_some(),
        grand_total: totals.grand_total,
    })
}

/// Get the portions stored for a food (0 if never set)
pub fn get_portion(session: &Session, food_id: &str) -> GetPortionResponse {
    let food_id = food_id.trim();
    GetPortionResponse {
        food_id: food_id.to_string(),
        portions: session.portion(food_id),
    }
}

pub fn get_requirements(session: &Session) -> RequirementsResponse {
    RequirementsResponse {
        requirements: *session.requirements().values(),
    }
}

/// Replace one requirement field
pub fn set_requirement(session: &mut Session, field: &str, value: &RawAmount) -> Result<SetRequirementResponse, String> {
    let field = NutrientField::parse(field).ok_or_else(|| {
        format!(
            "Unknown nutrient field '{}'. Use energy, protein, carbohydrate or lipid",
            field
        )
    })?;

    let requirements = session.set_requirement(field, &value.to_raw());
    let adequacy = session.adequacy().map_err(|e| e.to_string())?;

    Ok(SetRequirementResponse {
        field,
        value: requirements.get(field),
        requirements: *requirements.values(),
        adequacy,
    })
}

/// Full-precision per-group and grand totals
pub fn get_totals(session: &Session) -> Result<TotalsReport, String> {
    session.totals().map_err(|e| e.to_string())
}

pub fn get_adequacy(session: &Session) -> Result<AdequacyResponse, String> {
    let totals = session.totals().map_err(|e| e.to_string())?;
    let adequacy = session.adequacy().map_err(|e| e.to_string())?;
    Ok(AdequacyResponse {
        grand_total: totals.grand_total,
        requirements: *session.requirements().values(),
        adequacy,
    })
}

/// Rounded summary for display
pub fn get_summary(session: &Session) -> Result<Summary, String> {
    session.summary().map_err(|e| e.to_string())
}
