//! Calculator Status Tool
//!
//! Provides runtime status information about the calculator service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::data::DatasetSource;
use crate::engine::Session;

/// Usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Exchange Calculator Instructions

The calculator adds up food-exchange portions and compares the resulting
energy, protein, carbohydrate and lipid totals with the patient's daily
requirements.

## Concepts

- **Food group**: cereales, verduras, frutas, lacteos, carnes, leguminosas,
  lipidos, aceites, azucares. Every food in a group counts as the same
  nutrient content per portion.
- **Portion / exchange**: the reference amount shown next to each food
  (e.g. "1/2 taza"). Enter how many of those portions were eaten.
- **Adequacy**: total / requirement x 100 for each nutrient. A requirement
  of 0 always gives an adequacy of 0.

## Workflow

1. `list_food_groups` to see the groups and per-portion values
2. `list_foods(group)` to see foods, their reference portions and the
   portions already entered
3. `set_portion(food_id, value)` for each food eaten. Setting 0 clears it.
4. `get_requirements` / `set_requirement(field, value)` to adjust targets
   (fields: energy, protein, carbohydrate, lipid)
5. `get_summary` for the rounded table, or `get_totals` / `get_adequacy`
   for full-precision values

## Input Rules

- Values may be numbers or numeric text
- Negative, empty or non-numeric values are stored as 0, never rejected
- Foods not in the catalog are stored but never counted
"#;

/// Runtime status of the calculator service
#[derive(Debug, Clone, Serialize)]
pub struct CalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Dataset information
    pub catalog_source: String,
    pub reference_source: String,
    pub food_count: usize,
    pub reference_group_count: usize,
    pub selection_count: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    source: DatasetSource,
}

impl StatusTracker {
    pub fn new(source: DatasetSource) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            source,
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &Session) -> CalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let describe = |path: &Option<std::path::PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string())
        };

        CalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_source: describe(&self.source.catalog),
            reference_source: describe(&self.source.reference),
            food_count: session.catalog().item_count(),
            reference_group_count: session.reference().len(),
            selection_count: session.selections().len(),
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
