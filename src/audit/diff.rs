//! Readable change summaries for audit entries

use serde_json::Value;

use crate::models::{BudgetState, Category};

/// Summarize top-level field changes between two JSON objects
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();
            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }
            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }
            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    (!changes.is_empty()).then(|| changes.join(", "))
}

/// Summarize what changed across a whole budget
///
/// Lists the paycheck, then every category whose share, lock or activity
/// changed, then additions, removals and a changed order.
pub fn budget_diff(before: &BudgetState, after: &BudgetState) -> Option<String> {
    let mut changes = Vec::new();

    if before.paycheck.text() != after.paycheck.text() {
        changes.push(format!(
            "paycheck: {} -> {}",
            before.paycheck, after.paycheck
        ));
    }

    for old in before.categories.iter() {
        match after.categories.get(&old.id) {
            Some(new) => {
                if let Some(change) = category_change(old, new) {
                    changes.push(change);
                }
            }
            None => changes.push(format!("{}: removed", old.name)),
        }
    }
    for new in after.categories.iter() {
        if before.categories.get(&new.id).is_none() {
            changes.push(format!("{}: added at {:.1}%", new.name, new.percentage));
        }
    }

    let order = |state: &BudgetState| -> Vec<String> {
        state
            .categories
            .iter()
            .filter(|c| before.categories.get(&c.id).is_some() && after.categories.get(&c.id).is_some())
            .map(|c| c.id.to_string())
            .collect()
    };
    if order(before) != order(after) {
        changes.push("order changed".to_string());
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn category_change(old: &Category, new: &Category) -> Option<String> {
    let mut parts = Vec::new();
    if (old.percentage - new.percentage).abs() > f64::EPSILON {
        parts.push(format!("{:.1}% -> {:.1}%", old.percentage, new.percentage));
    }
    if old.lock != new.lock {
        parts.push(format!("lock {} -> {}", lock_label(old), lock_label(new)));
    }
    if old.inactive != new.inactive {
        parts.push(if new.inactive { "paused" } else { "resumed" }.to_string());
    }
    if old.name != new.name {
        parts.push(format!("renamed to {}", new.name));
    }

    (!parts.is_empty()).then(|| format!("{}: {}", old.name, parts.join(" ")))
}

fn lock_label(category: &Category) -> String {
    match category.lock.locked_amount() {
        Some(amount) => format!("${:.2}", amount),
        None if category.lock.is_percentage_locked() => "%".to_string(),
        None => "free".to_string(),
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            format!("\"{}...\"", s.chars().take(47).collect::<String>())
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LockMode, Paycheck};
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"name": "Rent", "percentage": 25.0});
        let after = json!({"name": "Rent", "percentage": 30.0});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "percentage: 25.0 -> 30.0");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"name": "Test", "lockedAmount": 500.0});
        let after = json!({"name": "Test", "inactive": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("lockedAmount: 500.0 -> (removed)"));
        assert!(diff.contains("inactive: (added) -> true"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "percentage": 10.0});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!("1000"), &json!("2000")).unwrap(),
            "\"1000\" -> \"2000\""
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
        assert!(format_value(&json!("é".repeat(80))).ends_with("...\""));
    }

    #[test]
    fn test_budget_diff() {
        let before = BudgetState::new(
            Paycheck::new("1000"),
            vec![Category::new("Rent", 40.0), Category::new("Fun", 60.0)],
        );
        let mut after = before.clone();
        after.paycheck = Paycheck::new("2000");
        {
            let fun = after.categories.iter_mut().nth(1).unwrap();
            fun.percentage = 50.0;
            fun.lock = LockMode::Percentage;
        }

        let diff = budget_diff(&before, &after).unwrap();
        assert!(diff.starts_with("paycheck: $1,000.00 -> $2,000.00"));
        assert!(diff.contains("Fun: 60.0% -> 50.0% lock free -> %"));
        assert!(!diff.contains("Rent"));
        assert!(budget_diff(&before, &before).is_none());
    }

    #[test]
    fn test_budget_diff_order_and_membership() {
        let before = BudgetState::new(
            Paycheck::empty(),
            vec![
                Category::new("A", 10.0),
                Category::new("B", 10.0),
                Category::new("C", 10.0),
            ],
        );
        let mut after = before.clone();
        let a = after.categories.as_slice()[0].id.clone();
        let c = after.categories.as_slice()[2].id.clone();
        after.categories.reorder(&a, &c);
        assert_eq!(budget_diff(&before, &after).unwrap(), "order changed");

        let b = after.categories.as_slice()[0].id.clone();
        after.categories.remove(&b);
        after.categories.add(Category::new("D", 5.0));
        let diff = budget_diff(&before, &after).unwrap();
        assert!(diff.contains("B: removed"));
        assert!(diff.contains("D: added at 5.0%"));
    }
}
