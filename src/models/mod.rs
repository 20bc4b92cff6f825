//! Data models
//!
//! Food groups, foods, nutrient vectors and patient targets.

mod amount;
mod food_group;
mod food_item;
mod nutrients;
mod requirements;

pub use amount::{clamp_amount, parse_amount, parse_portion, MAX_PORTIONS};
pub use food_group::FoodGroupId;
pub use food_item::{FoodItem, FoodItemRecord};
pub use nutrients::{NutrientField, NutrientVector};
pub use requirements::{RequirementTargets, DEFAULT_REQUIREMENTS};
