//! Budget document repository
//!
//! Holds the live [`BudgetState`] and persists it as one JSON document
//! (`{ paycheck, categories }`) under the fixed document key.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::BudgieError;
use crate::models::BudgetState;

use super::file_io::{read_json_or_else, write_json_atomic, LoadSource};

/// Repository for the budget document
pub struct BudgetRepository {
    path: PathBuf,
    state: RwLock<BudgetState>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(BudgetState::with_defaults()),
        }
    }

    /// Load the document from disk
    ///
    /// A missing or unreadable document leaves the built-in defaults in
    /// place. Legacy icons are migrated while parsing.
    pub fn load(&self) -> Result<LoadSource, BudgieError> {
        let (loaded, source) = read_json_or_else(&self.path, BudgetState::with_defaults);
        match &source {
            LoadSource::File => debug!(
                path = %self.path.display(),
                categories = loaded.categories.len(),
                "budget loaded"
            ),
            LoadSource::Missing => info!("no saved budget, starting from defaults"),
            LoadSource::Discarded(_) => info!("saved budget unreadable, starting from defaults"),
        }

        let mut state = self
            .state
            .write()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *state = loaded;
        Ok(source)
    }

    /// Write the current document to disk
    pub fn save(&self) -> Result<(), BudgieError> {
        let state = self
            .state
            .read()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*state)
    }

    /// Copy of the current document
    pub fn get(&self) -> Result<BudgetState, BudgieError> {
        let state = self
            .state
            .read()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(state.clone())
    }

    /// Replace the current document (in memory only)
    pub fn set(&self, new_state: BudgetState) -> Result<(), BudgieError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *state = new_state;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Icon, Paycheck};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgie.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.load().unwrap(), LoadSource::Missing);

        let state = repo.get().unwrap();
        assert_eq!(state.categories.len(), 9);
        assert!(!state.paycheck.is_set());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), "{\"paycheck\": 12, \"categories\": [oops").unwrap();

        assert!(matches!(repo.load().unwrap(), LoadSource::Discarded(_)));
        let state = repo.get().unwrap();
        let names: Vec<&str> = state.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[0], "Federal Taxes");
        assert_eq!(state.categories.active_total(), 100.0);
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        let state = BudgetState::new(
            Paycheck::new("2400"),
            vec![Category::new("Rent", 40.0), Category::new("Fun", 10.0)],
        );
        repo.set(state.clone()).unwrap();
        repo.save().unwrap();

        let fresh = BudgetRepository::new(repo.path().clone());
        assert_eq!(fresh.load().unwrap(), LoadSource::File);
        assert_eq!(fresh.get().unwrap(), state);
    }

    #[test]
    fn test_legacy_document_is_migrated() {
        let (_temp_dir, repo) = create_test_repo();
        let legacy = r##"{
            "paycheck": "1500",
            "categories": [
                {"id": "1", "name": "Rent", "percentage": 30, "color": "#007AFF", "icon": "🏠"},
                {"id": "2", "name": "Fun", "percentage": 10, "color": "#FF2D55", "icon": "unknown-thing"}
            ]
        }"##;
        std::fs::write(repo.path(), legacy).unwrap();

        repo.load().unwrap();
        let state = repo.get().unwrap();
        assert_eq!(state.paycheck.amount(), 1500.0);
        let icons: Vec<Icon> = state.categories.iter().map(|c| c.icon).collect();
        assert_eq!(icons, vec![Icon::Home, Icon::Sparkles]);
    }
}
