//! YAML Export functionality
//!
//! Same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{BudgieError, BudgieResult};
use crate::export::json::FullExport;
use crate::models::BudgetState;

/// Export the full document to YAML
pub fn export_full_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> BudgieResult<()> {
    let export = FullExport::from_state(state);
    let err = |e: std::io::Error| BudgieError::Export(e.to_string());

    writeln!(writer, "# Budgie export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgieError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Paycheck};

    #[test]
    fn test_yaml_export() {
        let state = BudgetState::new(
            Paycheck::new("1000"),
            vec![Category::new("Rent", 60.0), Category::new("Fun", 40.0)],
        );

        let mut output = Vec::new();
        export_full_yaml(&state, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Budgie export"));
        assert!(yaml.lines().any(|l| l.starts_with("paycheck:") && l.contains("1000")));
        assert!(yaml.contains("name: Rent"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.categories.len(), 2);
        assert!(parsed.validate().is_ok());
    }
}
