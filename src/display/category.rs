//! Category display formatting
//!
//! Formats categories for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetState, Category, Money};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Lock")]
    lock: &'static str,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format every category as a table, in list order
pub fn format_category_table(state: &BudgetState, currency_symbol: &str) -> String {
    if state.categories.is_empty() {
        return "No categories found.\n\nAdd one with 'budgie category add <name> <value>'."
            .to_string();
    }

    let paycheck = state.paycheck_amount();
    let rows = state.categories.iter().map(|category| CategoryRow {
        id: category.id.short(),
        name: format!("{} {}", category.icon.glyph(), category.name),
        lock: category.lock.marker(),
        share: format!("{:.1}%", category.percentage),
        amount: amount_cell(category, paycheck, currency_symbol),
        status: if category.inactive { "paused" } else { "" },
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(3..5), Alignment::right());
    table.to_string()
}

/// Format a single category's details
pub fn format_category_details(category: &Category, state: &BudgetState, currency_symbol: &str) -> String {
    let paycheck = state.paycheck_amount();
    let mut output = String::new();

    output.push_str(&format!("Category: {} {}\n", category.icon.glyph(), category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Share:   {:.1}%\n", category.percentage));
    output.push_str(&format!(
        "  Amount:  {}\n",
        amount_cell(category, paycheck, currency_symbol)
    ));

    let lock = match category.lock.locked_amount() {
        Some(amount) => format!(
            "dollar amount ({})",
            Money::from_dollars(amount).format_with_symbol(currency_symbol)
        ),
        None if category.lock.is_percentage_locked() => "percentage".to_string(),
        None => "none".to_string(),
    };
    output.push_str(&format!("  Lock:    {}\n", lock));
    output.push_str(&format!("  Color:   {}\n", category.color));
    output.push_str(&format!("  Icon:    {}\n", category.icon.as_str()));
    if category.inactive {
        output.push_str("  Status:  paused (share held for when it resumes)\n");
    }

    output
}

fn amount_cell(category: &Category, paycheck: f64, currency_symbol: &str) -> String {
    if paycheck > 0.0 {
        Money::from_dollars(category.dollar_amount(paycheck)).format_with_symbol(currency_symbol)
    } else {
        "--".to_string()
    }
}
