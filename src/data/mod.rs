//! Dataset module
//!
//! Loads the food catalog and the per-group reference table, either from a
//! data directory or from the copies compiled into the binary.

mod catalog;
mod error;
mod reference;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use catalog::FoodCatalog;
pub use error::{DataError, DataResult};
pub use reference::{ReferenceTable, MAX_REFERENCE_VALUE};

use crate::models::FoodGroupId;

/// Catalog file name inside a data directory
pub const CATALOG_FILE: &str = "alimentos.json";
/// Reference table file name inside a data directory
pub const REFERENCE_FILE: &str = "valores_nutricionales.json";

/// Where each half of the dataset came from (`None` means builtin)
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetSource {
    pub catalog: Option<PathBuf>,
    pub reference: Option<PathBuf>,
}

/// Catalog and reference table loaded together at startup
#[derive(Debug, Clone)]
pub struct Dataset {
    pub catalog: FoodCatalog,
    pub reference: ReferenceTable,
    pub source: DatasetSource,
}

/// Resolve the data directory from `EXCHANGE_DATA_DIR` or `<project>/data`.
/// Returns `None` when no such directory exists.
pub fn resolve_data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("EXCHANGE_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }

    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.is_dir().then_some(path)
}

fn read_file(path: &Path) -> DataResult<String> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog file. An empty catalog is an error.
pub fn load_catalog(path: &Path) -> DataResult<FoodCatalog> {
    let catalog = FoodCatalog::from_json(&read_file(path)?)?;
    if catalog.is_empty() {
        return Err(DataError::EmptyCatalog);
    }
    tracing::info!("Loaded {} foods from {}", catalog.item_count(), path.display());
    Ok(catalog)
}

/// Load a reference table file
pub fn load_reference_table(path: &Path) -> DataResult<ReferenceTable> {
    let table = ReferenceTable::from_json(&read_file(path)?)?;
    tracing::info!("Loaded {} reference groups from {}", table.len(), path.display());
    Ok(table)
}

/// Load both datasets. A directory that does not exist is an error; a file
/// missing from an existing directory falls back to the builtin copy.
pub fn load_dataset(dir: Option<&Path>) -> DataResult<Dataset> {
    if let Some(dir) = dir {
        if !dir.is_dir() {
            return Err(DataError::MissingDataDir(dir.to_path_buf()));
        }
    }

    let mut source = DatasetSource::default();

    let catalog = match dataset_file(dir, CATALOG_FILE) {
        Some(path) => {
            let catalog = load_catalog(&path)?;
            source.catalog = Some(path);
            catalog
        }
        None => FoodCatalog::builtin()?,
    };

    let reference = match dataset_file(dir, REFERENCE_FILE) {
        Some(path) => {
            let table = load_reference_table(&path)?;
            source.reference = Some(path);
            table
        }
        None => ReferenceTable::builtin()?,
    };

    let missing = unreferenced_groups(&catalog, &reference);
    if !missing.is_empty() {
        tracing::warn!(
            "Catalog groups without reference values will contribute nothing: {:?}",
            missing
        );
    }

    Ok(Dataset {
        catalog,
        reference,
        source,
    })
}

/// Path of `name` inside `dir` if present; warns when the directory lacks it
fn dataset_file(dir: Option<&Path>, name: &str) -> Option<PathBuf> {
    let path = dir?.join(name);
    if path.is_file() {
        Some(path)
    } else {
        tracing::warn!("{} not found, using the builtin {}", path.display(), name);
        None
    }
}

/// Catalog groups that have no reference table entry
pub fn unreferenced_groups(catalog: &FoodCatalog, reference: &ReferenceTable) -> Vec<FoodGroupId> {
    catalog
        .groups_in_catalog()
        .into_iter()
        .filter(|g| reference.lookup_reference(*g).is_none())
        .collect()
}
