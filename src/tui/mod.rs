//! Terminal User Interface module
//!
//! An interactive allocation editor built on ratatui: a header with the
//! paycheck and totals, the category list with sliders, and a status line.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
