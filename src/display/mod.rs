//! Display formatting for terminal output

pub mod category;
pub mod summary;

pub use category::{format_category_details, format_category_table};
pub use summary::format_summary;
