//! Allocation engine
//!
//! Every rebalancing rule lives here as a function over [`BudgetState`]. The
//! functions never fail: unknown ids, locked targets and bad numbers turn into
//! no-ops or clamped values. Anything a UI might want to animate (a capped
//! commit, a reactivated category, a rejected add) comes back as an
//! [`EngineEvent`] instead of being tracked in state.
//!
//! After any function here returns, the active categories sum to at most
//! 100% (within rounding). The only values allowed to overshoot are the
//! previews held by a [`SliderSession`], which never touch the state until
//! the session ends.
//!
//! [`BudgetState`]: crate::models::BudgetState

pub mod activation;
pub mod edit;
pub mod locks;
pub mod math;
pub mod rebalance;

pub use activation::toggle_inactive;
pub use edit::{
    add_category, commit_percentage, delete_category, rename, set_color, set_icon, AddRejection,
    Commit, NewCategory, SliderSession,
};
pub use locks::{lock_amount, lock_percentage, set_locked_amount};
pub use math::{apportion, round1, round2};
pub use rebalance::{distribute_evenly, on_paycheck_change, set_paycheck};

use crate::models::{CategoryId, CategoryStore};

/// Notifications emitted alongside state changes
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A write asked for more than was available and was snapped down
    Capped {
        id: CategoryId,
        requested: f64,
        committed: f64,
    },
    /// A category was deactivated and its share handed to free categories
    Deactivated { id: CategoryId, released: f64 },
    /// A category came back and reclaimed (part of) its old share
    Reactivated {
        id: CategoryId,
        requested: f64,
        restored: f64,
    },
    /// An add request was ignored
    Rejected(AddRejection),
}

impl EngineEvent {
    /// One-line description for status bars and CLI output
    pub fn describe(&self, categories: &CategoryStore) -> String {
        let name = |id: &CategoryId| {
            categories
                .get(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.short())
        };
        match self {
            Self::Capped {
                id,
                requested,
                committed,
            } => format!(
                "{} capped at {:.1}% (asked for {:.1}%)",
                name(id),
                committed,
                requested
            ),
            Self::Deactivated { id, released } => {
                format!("{} paused, released {:.1}%", name(id), released)
            }
            Self::Reactivated {
                id,
                requested,
                restored,
            } => {
                if (requested - restored).abs() < math::EPSILON {
                    format!("{} resumed at {:.1}%", name(id), restored)
                } else {
                    format!(
                        "{} resumed at {:.1}% (wanted {:.1}%)",
                        name(id),
                        restored,
                        requested
                    )
                }
            }
            Self::Rejected(reason) => format!("Category not added: {}", reason),
        }
    }
}

/// Sum of percentages of active categories other than `exclude`
pub(crate) fn others_total(categories: &CategoryStore, exclude: &CategoryId) -> f64 {
    round1(
        categories
            .active()
            .filter(|c| &c.id != exclude)
            .map(|c| c.percentage)
            .sum(),
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::models::{BudgetState, Category, CategoryId, LockMode, Paycheck};

    /// Build a state from `(name, percentage)` pairs, all free and active
    pub fn state(paycheck: &str, cats: &[(&str, f64)]) -> BudgetState {
        BudgetState::new(
            Paycheck::new(paycheck),
            cats.iter()
                .map(|(n, p)| Category::new(*n, *p))
                .collect::<Vec<_>>(),
        )
    }

    pub fn id(state: &BudgetState, name: &str) -> CategoryId {
        state
            .categories
            .find(name)
            .unwrap_or_else(|| panic!("no category {}", name))
            .id
            .clone()
    }

    pub fn pct(state: &BudgetState, name: &str) -> f64 {
        state.categories.find(name).unwrap().percentage
    }

    pub fn lock(state: &BudgetState, name: &str) -> LockMode {
        state.categories.find(name).unwrap().lock
    }

    /// Committed-state invariant: active shares never exceed the whole
    pub fn assert_within_whole(state: &BudgetState) {
        let total: f64 = state.categories.active().map(|c| c.percentage).sum();
        assert!(total <= 100.05, "active total {} exceeds 100", total);
        for c in state.categories.iter() {
            assert!(
                (0.0..=100.0).contains(&c.percentage),
                "{} has {}",
                c.name,
                c.percentage
            );
        }
    }
}
