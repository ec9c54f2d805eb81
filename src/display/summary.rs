//! Allocation summary formatting

use crate::models::{AllocationSummary, Paycheck};

/// Three-line overview: paycheck, allocated and what is left
pub fn format_summary(paycheck: &Paycheck, summary: &AllocationSummary, currency_symbol: &str) -> String {
    let money = |m: crate::models::Money| {
        if summary.paycheck.is_zero() {
            "--".to_string()
        } else {
            m.format_with_symbol(currency_symbol)
        }
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Paycheck:     {}\n",
        if paycheck.is_set() {
            money(summary.paycheck)
        } else {
            "(not set)".to_string()
        }
    ));
    output.push_str(&format!(
        "Allocated:    {:.1}%  {}\n",
        summary.allocated_pct,
        money(summary.allocated)
    ));
    output.push_str(&format!(
        "Unallocated:  {:.1}%  {}\n",
        summary.unallocated_pct,
        money(summary.unallocated)
    ));

    if summary.is_over_allocated() {
        output.push_str("Warning: categories add up to more than 100%\n");
    }
    if summary.inactive_count > 0 {
        output.push_str(&format!("Paused:       {}\n", summary.inactive_count));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, Category};

    #[test]
    fn test_summary_lines() {
        let state = BudgetState::new(
            Paycheck::new("1000"),
            vec![Category::new("A", 60.0), Category::new("B", 30.0)],
        );
        let text = format_summary(&state.paycheck, &state.summary(), "$");
        assert!(text.contains("Paycheck:     $1,000.00"));
        assert!(text.contains("Allocated:    90.0%  $900.00"));
        assert!(text.contains("Unallocated:  10.0%  $100.00"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_summary_without_paycheck() {
        let state = BudgetState::with_defaults();
        let text = format_summary(&state.paycheck, &state.summary(), "$");
        assert!(text.contains("(not set)"));
        assert!(text.contains("Allocated:    100.0%  --"));
    }
}
