//! Ordered category collection
//!
//! Order is insertion order and changes only through [`CategoryStore::reorder`].
//! Every operation that names an id it cannot find does nothing.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryPatch};
use super::ids::CategoryId;
use crate::engine::math::round1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn add(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Remove a record, returning it if it existed
    pub fn remove(&mut self, id: &CategoryId) -> Option<Category> {
        let index = self.index_of(id)?;
        Some(self.categories.remove(index))
    }

    /// Apply a patch; returns false when the id is unknown
    pub fn update(&mut self, id: &CategoryId, patch: CategoryPatch) -> bool {
        match self.get_mut(id) {
            Some(category) => {
                patch.apply(category);
                true
            }
            None => false,
        }
    }

    /// Move `from_id` so that it sits where `to_id` sits now
    ///
    /// The moved element is extracted first and spliced back in at the
    /// target's original index; every other element keeps its relative order.
    pub fn reorder(&mut self, from_id: &CategoryId, to_id: &CategoryId) -> bool {
        let (Some(from), Some(to)) = (self.index_of(from_id), self.index_of(to_id)) else {
            return false;
        };
        if from == to {
            return false;
        }
        let moved = self.categories.remove(from);
        self.categories.insert(to, moved);
        true
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn get_mut(&mut self, id: &CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| &c.id == id)
    }

    pub fn index_of(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    /// Find by id (full, short or prefix) or case-insensitive name
    pub fn find(&self, identifier: &str) -> Option<&Category> {
        let lower = identifier.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
            .or_else(|| self.categories.iter().find(|c| c.id.matches(identifier)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Category> {
        self.categories.iter_mut()
    }

    /// Active categories in list order
    pub fn active(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_active())
    }

    /// Sum of active percentages, rounded to 0.1
    pub fn active_total(&self) -> f64 {
        round1(self.active().map(|c| c.percentage).sum())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }
}

impl From<Vec<Category>> for CategoryStore {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}
