//! Whole-budget rebalancing: paycheck changes and even distribution

use tracing::debug;

use super::math::{apportion, round1, split_evenly_exact, EPSILON};
use super::EngineEvent;
use crate::models::{BudgetState, LockMode, Paycheck};

/// Store a new paycheck text and rebalance around the parsed amount
pub fn set_paycheck(state: &mut BudgetState, text: &str) -> Vec<EngineEvent> {
    state.paycheck = Paycheck::new(text.trim());
    let amount = state.paycheck_amount();
    on_paycheck_change(state, amount)
}

/// Rebalance after the paycheck changed
///
/// Dollar-locked categories re-derive their percentage from the new amount,
/// percentage-locked ones stay put, and the free categories share whatever
/// is left in proportion to their current shares (evenly if they are all at
/// zero). Inactive categories are not touched. A non-positive paycheck
/// leaves everything as it is.
///
/// A dollar lock that no longer fits under what the percentage locks leave
/// is held to the room that is left and reported as [`EngineEvent::Capped`];
/// its pinned amount is kept so a later, larger paycheck can honour it again.
pub fn on_paycheck_change(state: &mut BudgetState, paycheck: f64) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    if paycheck.is_nan() || paycheck <= 0.0 {
        return events;
    }

    let pct_locked: f64 = state
        .categories
        .active()
        .filter(|c| c.lock.is_percentage_locked())
        .map(|c| c.percentage)
        .sum();
    let mut room = round1(100.0 - pct_locked).max(0.0);

    for category in state.categories.iter_mut() {
        let LockMode::Amount { locked_amount } = category.lock else {
            continue;
        };
        if category.inactive {
            continue;
        }
        let derived = round1(locked_amount / paycheck * 100.0);
        let committed = derived.min(room);
        if derived > committed + EPSILON {
            events.push(EngineEvent::Capped {
                id: category.id.clone(),
                requested: derived,
                committed,
            });
        }
        category.percentage = committed;
        room = round1(room - committed);
    }

    let frozen: f64 = state
        .categories
        .active()
        .filter(|c| c.lock.is_locked())
        .map(|c| c.percentage)
        .sum();
    let remaining = round1(100.0 - frozen).max(0.0);

    let weights: Vec<f64> = state
        .categories
        .iter()
        .filter(|c| c.is_free())
        .map(|c| c.percentage)
        .collect();
    let shares = apportion(remaining, &weights);
    for (category, share) in state
        .categories
        .iter_mut()
        .filter(|c| c.is_free())
        .zip(shares)
    {
        category.percentage = share;
    }

    debug!(paycheck, frozen, remaining, "rebalanced for paycheck");
    events
}

/// Give every active category an equal share, ignoring locks
///
/// Each gets `100 / n` rounded to 0.1 and the last active category takes
/// the remainder so the total is exactly 100. Lock modes and pinned amounts
/// are left as they are.
pub fn distribute_evenly(state: &mut BudgetState) {
    let n = state.categories.active_count();
    if n == 0 {
        return;
    }

    let each = round1(100.0 / n as f64);
    let last = round1(100.0 - each * (n - 1) as f64);
    let shares = if last >= 0.0 {
        let mut shares = vec![each; n - 1];
        shares.push(last);
        shares
    } else {
        // Too many categories for a single rounded share to fit
        split_evenly_exact(100.0, n)
    };

    for (category, share) in state
        .categories
        .iter_mut()
        .filter(|c| c.is_active())
        .zip(shares)
    {
        category.percentage = share;
    }
    debug!(count = n, each, "distributed evenly");
}
