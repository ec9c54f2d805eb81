//! Pausing and resuming categories

use tracing::debug;

use super::math::{apportion, round1};
use super::EngineEvent;
use crate::models::{BudgetState, CategoryId};

/// Flip a category between active and inactive
///
/// Deactivating keeps the category's percentage on the record and hands the
/// same share to the free active categories in proportion to what they hold
/// (evenly if they hold nothing). With no free categories the share simply
/// leaves the total.
///
/// Reactivating asks for the kept percentage back. Free categories give up
/// at most what they have, proportionally; room already unallocated covers
/// only what they could not give. The category comes back with whatever those two sources cover,
/// which is the full kept percentage unless locks used the room meanwhile.
pub fn toggle_inactive(state: &mut BudgetState, id: &CategoryId) -> Option<EngineEvent> {
    let category = state.categories.get(id)?;
    if category.is_active() {
        Some(deactivate(state, id))
    } else {
        Some(reactivate(state, id))
    }
}

fn deactivate(state: &mut BudgetState, id: &CategoryId) -> EngineEvent {
    let mut released = 0.0;
    if let Some(category) = state.categories.get_mut(id) {
        category.inactive = true;
        released = category.percentage;
    }

    let weights: Vec<f64> = state
        .categories
        .iter()
        .filter(|c| c.is_free())
        .map(|c| c.percentage)
        .collect();
    let bonuses = apportion(released, &weights);
    for (category, bonus) in state
        .categories
        .iter_mut()
        .filter(|c| c.is_free())
        .zip(bonuses)
    {
        category.percentage = round1(category.percentage + bonus).min(100.0);
    }

    debug!(%id, released, receivers = weights.len(), "category deactivated");
    EngineEvent::Deactivated {
        id: id.clone(),
        released,
    }
}

fn reactivate(state: &mut BudgetState, id: &CategoryId) -> EngineEvent {
    let needed = state
        .categories
        .get(id)
        .map(|c| c.percentage)
        .unwrap_or(0.0);
    let headroom = round1(100.0 - state.categories.active_total()).max(0.0);

    let weights: Vec<f64> = state
        .categories
        .iter()
        .filter(|c| c.is_free())
        .map(|c| c.percentage)
        .collect();
    let free_total = round1(weights.iter().sum());
    let absorbed = needed.min(free_total);

    let donations = apportion(absorbed, &weights);
    let donated = round1(donations.iter().sum());
    for (category, donation) in state
        .categories
        .iter_mut()
        .filter(|c| c.is_free())
        .zip(donations)
    {
        category.percentage = round1(category.percentage - donation).max(0.0);
    }

    let restored = round1(needed.min(donated + headroom));
    if let Some(category) = state.categories.get_mut(id) {
        category.inactive = false;
        category.percentage = restored;
    }

    debug!(%id, needed, donated, restored, "category reactivated");
    EngineEvent::Reactivated {
        id: id.clone(),
        requested: needed,
        restored,
    }
}
