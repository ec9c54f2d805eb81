//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::{format_category_details, format_category_table};
use crate::engine::NewCategory;
use crate::error::{BudgieError, BudgieResult};
use crate::models::category::is_hex_color;
use crate::models::{parse_number, Icon, LockKind, Money};
use crate::services::{AddOutcome, AllocationService};
use crate::storage::Storage;

use super::report_events;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their shares
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Percentage (e.g. "10" or "10%"), or dollars with --lock amount
        value: String,
        /// Lock the new category: free, pct or amount
        #[arg(short, long, default_value = "free")]
        lock: LockKind,
        /// Color as #RRGGBB (defaults to the next palette color)
        #[arg(long)]
        color: Option<String>,
        /// Icon identifier (e.g. "car", "coffee")
        #[arg(long, value_parser = parse_icon)]
        icon: Option<Icon>,
    },

    /// Delete a category (its share is not handed out)
    Delete {
        /// Category name or ID
        category: String,
    },

    /// Set a category's percentage, capped to what is unallocated
    Set {
        /// Category name or ID
        category: String,
        /// New percentage
        percentage: String,
    },

    /// Toggle a percentage lock
    #[command(name = "lock-pct")]
    LockPct {
        /// Category name or ID
        category: String,
    },

    /// Toggle a dollar-amount lock
    #[command(name = "lock-amount")]
    LockAmount {
        /// Category name or ID
        category: String,
    },

    /// Pin a category to a dollar amount (locks it if needed)
    #[command(name = "set-amount")]
    SetAmount {
        /// Category name or ID
        category: String,
        /// Amount (e.g. "500" or "$1,200.50")
        amount: String,
    },

    /// Pause or resume a category
    Toggle {
        /// Category name or ID
        category: String,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
    },

    /// Move a category in front of another (active categories only)
    Move {
        /// Category name or ID
        category: String,
        /// Category to move in front of
        #[arg(short, long)]
        before: String,
    },

    /// Change a category's color
    Color {
        /// Category name or ID
        category: String,
        /// Color as #RRGGBB
        color: String,
    },

    /// Change a category's icon
    Icon {
        /// Category name or ID
        category: String,
        /// Icon identifier
        #[arg(value_parser = parse_icon)]
        icon: Icon,
    },
}

/// Accept a canonical icon identifier or one of the legacy glyphs
fn parse_icon(raw: &str) -> Result<Icon, String> {
    Icon::from_canonical(raw.trim())
        .or_else(|| Icon::from_legacy(raw.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = Icon::ALL.iter().map(|i| i.as_str()).collect();
            format!("unknown icon '{}' (expected one of: {})", raw, known.join(", "))
        })
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgieResult<()> {
    let service = AllocationService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let state = service.state()?;
            println!("{}", format_category_table(&state, symbol));
        }

        CategoryCommands::Show { category } => {
            let cat = service.find_category(&category)?;
            let state = service.state()?;
            print!("{}", format_category_details(&cat, &state, symbol));
        }

        CategoryCommands::Add {
            name,
            value,
            lock,
            color,
            icon,
        } => {
            let new = NewCategory {
                color,
                icon,
                ..NewCategory::new(name, value, lock)
            };
            match service.add_category(new)? {
                AddOutcome::Added(category) => {
                    println!("Added category: {}", category.name);
                    println!("  Share: {:.1}%", category.percentage);
                    println!("  ID: {}", category.id);
                }
                AddOutcome::Rejected(reason) => {
                    return Err(BudgieError::Validation(format!(
                        "Category not added: {}",
                        reason
                    )));
                }
            }
        }

        CategoryCommands::Delete { category } => {
            let cat = service.find_category(&category)?;
            service.delete_category(&cat.id)?;
            println!("Deleted category: {}", cat.name);
        }

        CategoryCommands::Set {
            category,
            percentage,
        } => {
            let cat = service.find_category(&category)?;
            let value = parse_number(percentage.trim().trim_end_matches('%')).ok_or_else(|| {
                BudgieError::Validation(format!("Invalid percentage: {}", percentage))
            })?;

            if !cat.is_active() {
                return Err(BudgieError::Validation(format!(
                    "'{}' is paused; resume it before changing its share",
                    cat.name
                )));
            }
            if cat.lock.is_amount_locked() {
                return Err(BudgieError::Validation(format!(
                    "'{}' is locked to a dollar amount; use set-amount instead",
                    cat.name
                )));
            }

            if let Some(commit) = service.commit_percentage(&cat.id, value)? {
                let state = service.state()?;
                report_events(&state, commit.event());
                println!("{}: {:.1}%", cat.name, commit.committed);
            }
        }

        CategoryCommands::LockPct { category } => {
            let cat = service.find_category(&category)?;
            service.lock_percentage(&cat.id)?;
            let updated = service.find_category(&category)?;
            if updated.lock.is_percentage_locked() {
                println!("Locked '{}' at {:.1}%", updated.name, updated.percentage);
            } else {
                println!("Unlocked '{}'", updated.name);
            }
        }

        CategoryCommands::LockAmount { category } => {
            let cat = service.find_category(&category)?;
            service.lock_amount(&cat.id)?;
            let updated = service.find_category(&category)?;
            match updated.lock.locked_amount() {
                Some(amount) => println!(
                    "Locked '{}' at {}",
                    updated.name,
                    Money::from_dollars(amount).format_with_symbol(symbol)
                ),
                None => println!("Unlocked '{}'", updated.name),
            }
        }

        CategoryCommands::SetAmount { category, amount } => {
            let cat = service.find_category(&category)?;
            if let Some(commit) = service.set_locked_amount(&cat.id, &amount)? {
                let state = service.state()?;
                report_events(&state, commit.event());
                let updated = service.find_category(&category)?;
                println!(
                    "{}: {} ({:.1}%)",
                    updated.name,
                    Money::from_dollars(updated.lock.locked_amount().unwrap_or(0.0))
                        .format_with_symbol(symbol),
                    updated.percentage
                );
            }
        }

        CategoryCommands::Toggle { category } => {
            let cat = service.find_category(&category)?;
            let event = service.toggle_inactive(&cat.id)?;
            let state = service.state()?;
            report_events(&state, event);
        }

        CategoryCommands::Rename { category, name } => {
            let cat = service.find_category(&category)?;
            if name.trim().is_empty() {
                return Err(BudgieError::Validation("Category name cannot be empty".into()));
            }
            service.rename(&cat.id, &name)?;
            println!("Renamed '{}' to '{}'", cat.name, name.trim());
        }

        CategoryCommands::Move { category, before } => {
            let cat = service.find_category(&category)?;
            let target = service.find_category(&before)?;
            if service.move_category(&cat.id, &target.id)? {
                println!("Moved '{}' to where '{}' was", cat.name, target.name);
            } else {
                println!("'{}' is already there", cat.name);
            }
        }

        CategoryCommands::Color { category, color } => {
            let cat = service.find_category(&category)?;
            if !is_hex_color(color.trim()) {
                return Err(BudgieError::Validation(format!(
                    "Invalid color '{}': expected #RRGGBB",
                    color
                )));
            }
            service.set_color(&cat.id, &color)?;
            println!("Set color of '{}' to {}", cat.name, color.trim().to_uppercase());
        }

        CategoryCommands::Icon { category, icon } => {
            let cat = service.find_category(&category)?;
            service.set_icon(&cat.id, icon)?;
            println!("Set icon of '{}' to {} {}", cat.name, icon.glyph(), icon.as_str());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_icon() {
        assert_eq!(parse_icon("car").unwrap(), Icon::Car);
        assert_eq!(parse_icon("🏠").unwrap(), Icon::Home);
        assert!(parse_icon("rocket").unwrap_err().contains("piggy-bank"));
    }
}
