//! CSV export of the active allocation

use std::io::Write;

use crate::error::{BudgieError, BudgieResult};
use crate::models::{BudgetState, Money};

const HEADER: [&str; 4] = ["Category", "Lock", "Percentage", "Amount"];

/// Export active categories, then `Total` and `Unallocated` rows
///
/// Amounts are plain decimals without a currency symbol and are left empty
/// while no paycheck is set.
pub fn export_allocations_csv<W: Write>(state: &BudgetState, writer: W) -> BudgieResult<()> {
    let summary = state.summary();
    let has_paycheck = state.paycheck_amount() > 0.0;
    let amount = |money: Money| {
        if has_paycheck {
            format!("{:.2}", money.to_dollars())
        } else {
            String::new()
        }
    };

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_error)?;

    for (category, dollars) in state.active_rows() {
        let lock = match category.lock.marker() {
            "[%]" => "percentage",
            "[$]" => "amount",
            _ => "",
        };
        write_row(&mut csv, &category.name, lock, category.percentage, &amount(dollars))?;
    }

    write_row(&mut csv, "Total", "", summary.allocated_pct, &amount(summary.allocated))?;
    write_row(
        &mut csv,
        "Unallocated",
        "",
        summary.unallocated_pct,
        &amount(summary.unallocated),
    )?;

    csv.flush().map_err(|e| BudgieError::Export(e.to_string()))
}

fn write_row<W: Write>(
    csv: &mut csv::Writer<W>,
    name: &str,
    lock: &str,
    pct: f64,
    amount: &str,
) -> BudgieResult<()> {
    let pct = format!("{:.1}", pct);
    csv.write_record([name, lock, pct.as_str(), amount])
        .map_err(export_error)
}

fn export_error(err: csv::Error) -> BudgieError {
    BudgieError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, LockMode, Paycheck};

    fn render(state: &BudgetState) -> String {
        let mut out = Vec::new();
        export_allocations_csv(state, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_and_totals() {
        let mut paused = Category::new("Boat", 5.0);
        paused.inactive = true;
        let state = BudgetState::new(
            Paycheck::new("1000"),
            vec![
                Category::new("Rent", 60.0).with_lock(LockMode::Percentage),
                Category::new("Fun", 30.0),
                paused,
            ],
        );

        let output = render(&state);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Category,Lock,Percentage,Amount",
                "Rent,percentage,60.0,600.00",
                "Fun,,30.0,300.00",
                "Total,,90.0,900.00",
                "Unallocated,,10.0,100.00",
            ]
        );
    }

    #[test]
    fn test_quoting() {
        let state = BudgetState::new(
            Paycheck::empty(),
            vec![Category::new("Food, \"good\" stuff", 100.0)],
        );
        let output = render(&state);
        assert!(output.contains("\"Food, \"\"good\"\" stuff\",,100.0,\n"));
        assert!(output.contains("Unallocated,,0.0,\n"));
    }
}
