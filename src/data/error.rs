//! Data loading errors

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{FoodGroupId, NutrientField};

/// Errors raised while loading the catalog or the reference table
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reference value for {group}.{field} must be between 0 and {max}, got {value}", max = super::reference::MAX_REFERENCE_VALUE)]
    InvalidReference {
        group: FoodGroupId,
        field: NutrientField,
        value: f64,
    },

    #[error("Food id '{id}' appears more than once (in {first} and {second})")]
    DuplicateFoodId {
        id: String,
        first: FoodGroupId,
        second: FoodGroupId,
    },

    #[error("Food catalog is empty")]
    EmptyCatalog,

    #[error("Data directory {} does not exist", .0.display())]
    MissingDataDir(PathBuf),
}

/// Result type for data loading
pub type DataResult<T> = Result<T, DataError>;
