//! The whole document: paycheck plus categories
//!
//! This is the unit that is saved, snapshotted for undo and exported.

use serde::{Deserialize, Serialize};

use super::category::{default_categories, Category};
use super::money::Money;
use super::paycheck::Paycheck;
use super::store::CategoryStore;
use crate::engine::math::round1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub paycheck: Paycheck,
    pub categories: CategoryStore,
}

/// Immutable copy of a state used as an undo/redo checkpoint
pub type Snapshot = BudgetState;

impl BudgetState {
    pub fn new(paycheck: Paycheck, categories: impl Into<CategoryStore>) -> Self {
        Self {
            paycheck,
            categories: categories.into(),
        }
    }

    /// Built-in starting point: default categories, no paycheck
    pub fn with_defaults() -> Self {
        Self::new(Paycheck::empty(), default_categories())
    }

    pub fn paycheck_amount(&self) -> f64 {
        self.paycheck.amount()
    }

    /// Derived totals for headers and reports
    pub fn summary(&self) -> AllocationSummary {
        let paycheck = self.paycheck_amount();
        let allocated_pct = self.categories.active_total();
        let unallocated_pct = round1(100.0 - allocated_pct);
        let allocated: Money = self
            .categories
            .active()
            .map(|c| Money::from_dollars(c.dollar_amount(paycheck)))
            .sum();
        let paycheck_money = Money::from_dollars(paycheck);

        AllocationSummary {
            paycheck: paycheck_money,
            allocated_pct,
            unallocated_pct,
            allocated,
            unallocated: if paycheck > 0.0 {
                paycheck_money - allocated
            } else {
                Money::zero()
            },
            active_count: self.categories.active_count(),
            inactive_count: self.categories.len() - self.categories.active_count(),
        }
    }

    /// Active categories paired with their dollar share
    pub fn active_rows(&self) -> Vec<(&Category, Money)> {
        let paycheck = self.paycheck_amount();
        self.categories
            .active()
            .map(|c| (c, Money::from_dollars(c.dollar_amount(paycheck))))
            .collect()
    }
}

/// Totals derived from a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationSummary {
    pub paycheck: Money,
    pub allocated_pct: f64,
    pub unallocated_pct: f64,
    pub allocated: Money,
    pub unallocated: Money,
    pub active_count: usize,
    pub inactive_count: usize,
}

impl AllocationSummary {
    pub fn is_fully_allocated(&self) -> bool {
        self.unallocated_pct.abs() < 0.05
    }

    pub fn is_over_allocated(&self) -> bool {
        self.unallocated_pct < -0.05
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_huge_paycheck() {
        let state = BudgetState::new(
            Paycheck::new("1e17"),
            vec![Category::new("A", 50.0), Category::new("B", 50.0)],
        );
        let summary = state.summary();
        assert_eq!(summary.allocated, Money::from_cents(i64::MAX));
        assert!(!summary.unallocated.is_negative());
        assert!(summary.paycheck.format_with_symbol("$").starts_with("$92,233,720,368,547,758"));
    }

    #[test]
    fn test_defaults_fully_allocated() {
        let state = BudgetState::with_defaults();
        let summary = state.summary();
        assert_eq!(summary.allocated_pct, 100.0);
        assert!(summary.is_fully_allocated());
        assert!(summary.unallocated.is_zero());
        assert_eq!(summary.active_count, 9);
    }

    #[test]
    fn test_summary_with_paycheck() {
        let state = BudgetState::new(
            Paycheck::new("1000"),
            vec![Category::new("A", 30.0), Category::new("B", 45.0)],
        );
        let summary = state.summary();
        assert_eq!(summary.unallocated_pct, 25.0);
        assert_eq!(summary.allocated, Money::from_cents(75000));
        assert_eq!(summary.unallocated, Money::from_cents(25000));
    }

    #[test]
    fn test_document_shape() {
        let state = BudgetState::new(Paycheck::new("1200"), vec![Category::new("A", 100.0)]);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["paycheck"], "1200");
        assert!(value["categories"].is_array());
        assert_eq!(value["categories"][0]["name"], "A");
    }
}
