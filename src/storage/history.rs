//! Undo/redo persistence
//!
//! The CLI runs one command per process, so the stacks are kept on disk
//! between invocations.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgieError;
use crate::history::HistoryManager;

use super::file_io::{read_json_or_else, write_json_atomic};

pub struct HistoryRepository {
    path: PathBuf,
    history: RwLock<HistoryManager>,
}

impl HistoryRepository {
    pub fn new(path: PathBuf, capacity: usize) -> Self {
        Self {
            path,
            history: RwLock::new(HistoryManager::new(capacity)),
        }
    }

    /// Load the stacks; a missing or unreadable file starts empty
    ///
    /// The configured capacity wins over the one stored in the file.
    pub fn load(&self) -> Result<(), BudgieError> {
        let mut history = self
            .history
            .write()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let capacity = history.capacity();
        let (mut loaded, _) = read_json_or_else(&self.path, || HistoryManager::new(capacity));
        loaded.set_capacity(capacity);
        *history = loaded;
        Ok(())
    }

    pub fn save(&self) -> Result<(), BudgieError> {
        let history = self
            .history
            .read()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*history)
    }

    /// Run `f` with exclusive access to the stacks
    pub fn with<R>(&self, f: impl FnOnce(&mut HistoryManager) -> R) -> Result<R, BudgieError> {
        let mut history = self
            .history
            .write()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(f(&mut history))
    }

    /// Copy of the current stacks
    pub fn get(&self) -> Result<HistoryManager, BudgieError> {
        let history = self
            .history
            .read()
            .map_err(|e| BudgieError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(history.clone())
    }
}
