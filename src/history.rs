//! Undo/redo of whole-budget snapshots
//!
//! Callers record the state *before* a reversible edit. Undo swaps the live
//! state with the most recent snapshot and keeps the live state for redo.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{BudgetState, Snapshot};

/// Default number of undo steps kept
pub const DEFAULT_CAPACITY: usize = 50;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Bounded undo stack plus redo stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryManager {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    undo: VecDeque<Snapshot>,
    #[serde(default)]
    redo: Vec<Snapshot>,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest snapshots if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        let excess = self.redo.len().saturating_sub(self.capacity);
        self.redo.drain(..excess);
    }

    /// Record the pre-edit state; clears anything that could be redone
    pub fn push_snapshot(&mut self, state: &BudgetState) {
        self.push_undo(state.clone());
        self.redo.clear();
    }

    /// Step back; returns false if there is nothing to undo
    pub fn undo(&mut self, current: &mut BudgetState) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(current, previous));
        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        true
    }

    /// Step forward again; returns false if there is nothing to redo
    pub fn redo(&mut self, current: &mut BudgetState) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let previous = std::mem::replace(current, next);
        self.push_undo(previous);
        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        if self.undo.len() >= self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }
}
