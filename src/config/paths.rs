//! Path management for Budgie
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGIE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories` (for example
//!    `~/.config/budgie` on Linux)
//! 3. `~/.config/budgie` when the platform lookup finds no home directory

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgieError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGIE_DATA_DIR";

/// Key the budget document is stored under
pub const DOCUMENT_KEY: &str = "budgie";

/// Manages all paths used by Budgie
#[derive(Debug, Clone)]
pub struct BudgiePaths {
    base_dir: PathBuf,
}

impl BudgiePaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgieError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgiePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Log directory for diagnostic logs (`<base>/logs/`)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// File backing a stored document key
    pub fn document_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// The budget document (`<base>/data/budgie.json`)
    pub fn budget_file(&self) -> PathBuf {
        self.document_file(DOCUMENT_KEY)
    }

    /// Undo/redo stacks (`<base>/data/history.json`)
    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    /// Ensure the base, data and log directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgieError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.log_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                BudgieError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Whether `budgie init` has written a settings file here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgieError> {
    if let Some(dirs) = ProjectDirs::from("", "", "budgie") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("budgie"))
        .map_err(|_| BudgieError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = BudgiePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.log_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.budget_file(),
            temp_dir.path().join("data").join("budgie.json")
        );
        assert_eq!(
            paths.history_file(),
            temp_dir.path().join("data").join("history.json")
        );
    }
}
