//! Export module for Budgie
//!
//! Pure renderers over an already-committed budget:
//! - Text: fixed-width report for pasting into notes or mail
//! - CSV: one row per active category plus totals (spreadsheet-compatible)
//! - JSON / YAML: the full document, wrapped with export metadata

pub mod csv;
pub mod json;
pub mod text;
pub mod yaml;

pub use self::csv::export_allocations_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use text::{export_text_report, render_text_report, ReportOptions};
pub use yaml::export_full_yaml;
