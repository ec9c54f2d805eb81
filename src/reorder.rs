//! Drag-to-reorder over the active categories
//!
//! A [`DragSession`] turns a stream of pointer positions into a target slot.
//! Nothing in the budget moves until the session ends, and then only with a
//! single [`CategoryStore::reorder`] call.
//!
//! [`CategoryStore::reorder`]: crate::models::CategoryStore::reorder

use tracing::debug;

use crate::history::HistoryManager;
use crate::models::{BudgetState, CategoryId};

/// Index of the slot whose centre is closest to `position`
///
/// Ties go to the earlier slot. Returns 0 for an empty slot list.
pub fn nearest_slot(centers: &[f64], position: f64) -> usize {
    centers
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_dist), (i, center)| {
            let dist = (center - position).abs();
            if dist < best_dist {
                (i, dist)
            } else {
                (best, best_dist)
            }
        })
        .0
}

/// A drag of one active category through the active list
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Ids of the active categories, in list order, when the drag began
    active: Vec<CategoryId>,
    /// Centre of each active slot, same order as `active`
    centers: Vec<f64>,
    start: usize,
    target: usize,
}

impl DragSession {
    /// Start dragging the active category at `start`
    ///
    /// `centers` holds the on-screen centre of every active slot. Slots
    /// missing from the list are placed one unit apart after the last one
    /// given. Returns `None` if `start` is not an active index.
    pub fn begin(state: &BudgetState, start: usize, mut centers: Vec<f64>) -> Option<Self> {
        let active: Vec<CategoryId> = state.categories.active().map(|c| c.id.clone()).collect();
        if start >= active.len() {
            return None;
        }
        centers.truncate(active.len());
        while centers.len() < active.len() {
            let next = centers.last().map(|c| c + 1.0).unwrap_or(0.0);
            centers.push(next);
        }

        Some(Self {
            active,
            centers,
            start,
            target: start,
        })
    }

    /// Start a drag with evenly spaced unit slots (centre of slot `i` is `i`)
    pub fn begin_uniform(state: &BudgetState, start: usize) -> Option<Self> {
        Self::begin(state, start, Vec::new())
    }

    /// Start a drag of `id`, if it is active
    pub fn grab(state: &BudgetState, id: &CategoryId) -> Option<Self> {
        let start = state.categories.active().position(|c| &c.id == id)?;
        Self::begin_uniform(state, start)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Live target slot, for previews only
    pub fn target(&self) -> usize {
        self.target
    }

    /// Id of the dragged category
    pub fn dragged(&self) -> &CategoryId {
        &self.active[self.start]
    }

    /// Feed the dragged item's current centre; returns the new target
    pub fn update(&mut self, position: f64) -> usize {
        let last = self.active.len().saturating_sub(1);
        self.target = nearest_slot(&self.centers, position).min(last);
        self.target
    }

    /// Move the target by whole slots (keyboard dragging)
    pub fn step(&mut self, delta: isize) -> usize {
        let last = self.active.len().saturating_sub(1) as isize;
        let target = (self.target as isize + delta).clamp(0, last) as usize;
        self.update(self.centers[target])
    }

    /// Active ids in the order the drop would produce
    pub fn preview_order(&self) -> Vec<CategoryId> {
        let mut order = self.active.clone();
        let moved = order.remove(self.start);
        order.insert(self.target, moved);
        order
    }

    /// Drop the item; commits a move if the target differs from the start
    ///
    /// The pre-drag state goes onto the undo stack before the move. Returns
    /// whether anything moved.
    pub fn end(self, state: &mut BudgetState, history: &mut HistoryManager) -> bool {
        if self.target == self.start {
            return false;
        }
        let from = &self.active[self.start];
        let to = &self.active[self.target];
        if state.categories.get(from).is_none() || state.categories.get(to).is_none() {
            return false;
        }

        history.push_snapshot(state);
        let moved = state.categories.reorder(from, to);
        debug!(%from, %to, from_slot = self.start, to_slot = self.target, "category moved");
        moved
    }
}
