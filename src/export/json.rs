//! JSON Export functionality
//!
//! Exports the whole budget document with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgieError, BudgieResult};
use crate::models::{BudgetState, Category};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full document export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Paycheck exactly as typed
    pub paycheck: String,

    /// Every category, inactive ones included, in list order
    pub categories: Vec<Category>,

    pub metadata: ExportMetadata,
}

/// Derived figures, for readers that do not want to recompute them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub active_count: usize,
    pub allocated_pct: f64,
    pub unallocated_pct: f64,
}

impl FullExport {
    pub fn from_state(state: &BudgetState) -> Self {
        let summary = state.summary();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            paycheck: state.paycheck.text().to_string(),
            categories: state.categories.iter().cloned().collect(),
            metadata: ExportMetadata {
                category_count: summary.active_count + summary.inactive_count,
                active_count: summary.active_count,
                allocated_pct: summary.allocated_pct,
                unallocated_pct: summary.unallocated_pct,
            },
        }
    }

    /// Check the export is internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(format!("Duplicate category id {}", category.id));
            }
            category
                .validate()
                .map_err(|e| format!("Category {}: {}", category.name, e))?;
        }

        let active_total: f64 = self
            .categories
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.percentage)
            .sum();
        if active_total > 100.05 {
            return Err(format!("Active categories total {:.1}%", active_total));
        }

        Ok(())
    }
}

/// Export the full document to JSON
pub fn export_full_json<W: Write>(
    state: &BudgetState,
    writer: &mut W,
    pretty: bool,
) -> BudgieResult<()> {
    let export = FullExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgieError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LockMode, Paycheck};

    fn sample() -> BudgetState {
        let mut paused = Category::new("Boat", 20.0);
        paused.inactive = true;
        BudgetState::new(
            Paycheck::new("$2,500"),
            vec![
                Category::new("Rent", 40.0).with_lock(LockMode::Amount {
                    locked_amount: 1000.0,
                }),
                Category::new("Fun", 60.0),
                paused,
            ],
        )
    }

    #[test]
    fn test_full_export() {
        let export = FullExport::from_state(&sample());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.paycheck, "$2,500");
        assert_eq!(export.categories.len(), 3);
        assert_eq!(export.metadata.active_count, 2);
        assert_eq!(export.metadata.unallocated_pct, 0.0);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_document_shape() {
        let mut output = Vec::new();
        export_full_json(&sample(), &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["paycheck"], "$2,500");
        assert_eq!(value["categories"][0]["lockMode"], "lockedAmount");
        assert_eq!(value["categories"][0]["lockedAmount"], 1000.0);
        assert_eq!(value["categories"][2]["inactive"], true);

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.categories, FullExport::from_state(&sample()).categories);
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let mut export = FullExport::from_state(&sample());
        export.categories[1].percentage = 70.0;
        assert!(export.validate().unwrap_err().contains("total 110.0%"));

        export.schema_version = "0.1".into();
        assert!(export.validate().unwrap_err().contains("mismatch"));
    }
}
