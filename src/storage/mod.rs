//! Storage layer for Budgie
//!
//! JSON files with atomic writes: the budget document, the undo/redo stacks
//! and the audit log.

pub mod budget;
pub mod file_io;
pub mod history;
pub mod init;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic, LoadSource};
pub use history::HistoryRepository;
pub use init::initialize_storage;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgiePaths;
use crate::config::settings::Settings;
use crate::error::BudgieError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgiePaths,
    pub budget: BudgetRepository,
    pub history: HistoryRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgiePaths, settings: &Settings) -> Result<Self, BudgieError> {
        paths.ensure_directories()?;

        Ok(Self {
            budget: BudgetRepository::new(paths.budget_file()),
            history: HistoryRepository::new(paths.history_file(), settings.history_capacity),
            audit: settings
                .audit_enabled
                .then(|| AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgiePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<LoadSource, BudgieError> {
        let source = self.budget.load()?;
        self.history.load()?;
        Ok(source)
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgieError> {
        self.budget.save()?;
        self.history.save()?;
        Ok(())
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append an update entry to the audit log (no-op when disabled)
    pub fn log_update<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), BudgieError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::update(
                entity_type,
                entity_id,
                entity_name,
                before,
                after,
                diff_summary,
            )),
            None => Ok(()),
        }
    }

    /// Append a create entry to the audit log (no-op when disabled)
    pub fn log_create<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgieError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    /// Append a delete entry to the audit log (no-op when disabled)
    pub fn log_delete<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgieError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("logs").exists());
        assert_eq!(storage.load_all().unwrap(), LoadSource::Missing);
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths, &settings).unwrap();

        storage
            .log_create(EntityType::Category, "x", None, &serde_json::json!({}))
            .unwrap();
        assert!(storage.audit().is_none());
        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
