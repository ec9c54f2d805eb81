//! Fixed-width text report

use std::io::Write;

use crate::error::{BudgieError, BudgieResult};
use crate::models::{BudgetState, Money};

/// Room taken by the percentage and dollar columns
const PCT_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 14;
/// Narrowest report that still leaves a readable name column
const MIN_WIDTH: usize = 32;

/// Layout knobs for the text report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub width: usize,
    pub currency_symbol: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: 48,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ReportOptions {
    fn name_width(&self) -> usize {
        self.width.max(MIN_WIDTH) - PCT_WIDTH - AMOUNT_WIDTH
    }

    fn rule(&self) -> String {
        "-".repeat(self.width.max(MIN_WIDTH))
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Render the report to a string
///
/// Header with the paycheck, one line per active category (name plus lock
/// marker, percentage, dollars), then the total and the unallocated remainder.
/// Dollar columns show `--` while no paycheck is set.
pub fn render_text_report(state: &BudgetState, options: &ReportOptions) -> String {
    let summary = state.summary();
    let has_paycheck = state.paycheck.is_set() && state.paycheck_amount() > 0.0;
    let dollars = |amount: Money| {
        if has_paycheck {
            options.money(amount)
        } else {
            "--".to_string()
        }
    };

    let mut lines = vec![
        "Budgie allocation".to_string(),
        format!("Paycheck: {}", dollars(summary.paycheck)),
        options.rule(),
    ];

    for (category, amount) in state.active_rows() {
        let label = match category.lock.marker() {
            "" => category.name.clone(),
            marker => format!("{} {}", category.name, marker),
        };
        lines.push(row(options, &label, category.percentage, &dollars(amount)));
    }

    lines.push(options.rule());
    lines.push(row(options, "Total", summary.allocated_pct, &dollars(summary.allocated)));
    lines.push(row(
        options,
        "Unallocated",
        summary.unallocated_pct,
        &dollars(summary.unallocated),
    ));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Write the report to any writer
pub fn export_text_report<W: Write>(
    state: &BudgetState,
    options: &ReportOptions,
    writer: &mut W,
) -> BudgieResult<()> {
    writer
        .write_all(render_text_report(state, options).as_bytes())
        .map_err(|e| BudgieError::Export(e.to_string()))
}

fn row(options: &ReportOptions, label: &str, pct: f64, amount: &str) -> String {
    let name_width = options.name_width();
    format!(
        "{:<name_width$}{:>PCT_WIDTH$}{:>AMOUNT_WIDTH$}",
        fit(label, name_width),
        format!("{:.1}%", pct),
        amount,
    )
}

/// Cut a label to `width` characters, marking the cut with `~`
fn fit(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
