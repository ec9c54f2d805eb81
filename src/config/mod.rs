//! Configuration for Budgie
//!
//! Path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::BudgiePaths;
pub use settings::Settings;
