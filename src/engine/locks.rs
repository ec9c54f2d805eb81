//! Lock toggles and the dollar-lock amount editor

use tracing::debug;

use super::edit::Commit;
use super::math::{round1, round2, EPSILON};
use super::others_total;
use crate::models::{parse_amount, BudgetState, CategoryId, LockMode};

/// Toggle the percentage lock
///
/// Turning it on replaces a dollar lock. The percentage itself never moves.
/// Returns false when the id is unknown.
pub fn lock_percentage(state: &mut BudgetState, id: &CategoryId) -> bool {
    let Some(category) = state.categories.get_mut(id) else {
        return false;
    };

    category.lock = if category.lock.is_percentage_locked() {
        LockMode::Free
    } else {
        LockMode::Percentage
    };
    debug!(category = %category.name, lock = ?category.lock, "percentage lock toggled");
    true
}

/// Toggle the dollar lock
///
/// Turning it on pins the category's current dollar share (zero while no
/// paycheck is entered) and replaces a percentage lock. Turning it off drops
/// the pinned amount and leaves the percentage where it last was.
pub fn lock_amount(state: &mut BudgetState, id: &CategoryId) -> bool {
    let paycheck = state.paycheck_amount();
    let Some(category) = state.categories.get_mut(id) else {
        return false;
    };

    category.lock = if category.lock.is_amount_locked() {
        LockMode::Free
    } else {
        let locked_amount = if paycheck > 0.0 {
            round2(paycheck * category.percentage / 100.0)
        } else {
            0.0
        };
        LockMode::Amount { locked_amount }
    };
    debug!(category = %category.name, lock = ?category.lock, "dollar lock toggled");
    true
}

/// Set the pinned amount of a dollar-locked category from user text
///
/// The text is parsed leniently (anything unreadable is 0) and the
/// percentage is re-derived from the paycheck. For an active category the
/// derived percentage is held to what the other active categories leave
/// free; when that bites, the pinned amount is lowered to match and the
/// returned commit is marked capped. Categories that are not dollar-locked
/// are left alone.
pub fn set_locked_amount(state: &mut BudgetState, id: &CategoryId, text: &str) -> Option<Commit> {
    let paycheck = state.paycheck_amount();
    let max_allowed = round1(100.0 - others_total(&state.categories, id)).max(0.0);
    let category = state.categories.get_mut(id)?;
    if !category.lock.is_amount_locked() {
        return None;
    }

    let mut amount = round2(parse_amount(text));
    let requested = if paycheck > 0.0 {
        round1(amount / paycheck * 100.0).min(100.0)
    } else {
        0.0
    };

    let mut committed = requested;
    if category.is_active() && requested > max_allowed + EPSILON {
        committed = max_allowed;
        amount = round2(max_allowed * paycheck / 100.0);
    }

    category.lock = LockMode::Amount {
        locked_amount: amount,
    };
    category.percentage = committed;
    debug!(
        category = %category.name,
        amount,
        percentage = committed,
        "locked amount set"
    );

    Some(Commit {
        id: id.clone(),
        requested,
        committed,
        was_capped: committed < requested,
    })
}
