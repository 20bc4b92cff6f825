//! Engine errors

use thiserror::Error;

/// Conditions the engine cannot degrade around
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Food catalog is unavailable; nothing to calculate")]
    CatalogUnavailable,
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
