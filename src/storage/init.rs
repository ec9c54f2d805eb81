//! First-run setup

use crate::config::paths::BudgiePaths;
use crate::error::BudgieError;
use crate::models::BudgetState;

use super::file_io::write_json_atomic;

/// Create the directory layout and a default budget if none exists
///
/// Returns true if a new budget document was written.
pub fn initialize_storage(paths: &BudgiePaths) -> Result<bool, BudgieError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        write_json_atomic(paths.budget_file(), &BudgetState::with_defaults())?;
        return Ok(true);
    }

    Ok(false)
}

pub fn needs_initialization(paths: &BudgiePaths) -> bool {
    !paths.budget_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Paycheck};
    use crate::storage::file_io::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        assert!(initialize_storage(&paths).unwrap());

        assert!(!needs_initialization(&paths));
        assert!(paths.data_dir().exists());
        let state: BudgetState = read_json(paths.budget_file()).unwrap().unwrap();
        assert_eq!(state.categories.len(), 9);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let custom = BudgetState::new(Paycheck::new("900"), vec![Category::new("Only", 100.0)]);
        write_json_atomic(paths.budget_file(), &custom).unwrap();

        assert!(!initialize_storage(&paths).unwrap());
        let state: BudgetState = read_json(paths.budget_file()).unwrap().unwrap();
        assert_eq!(state, custom);
    }
}
