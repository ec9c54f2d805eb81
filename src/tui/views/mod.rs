//! TUI Views module
//!
//! Header, category list, status bar and the prompt overlay.

pub mod category_list;
pub mod header;
pub mod prompt;
pub mod status_bar;

use ratatui::style::Color;
use ratatui::Frame;

use super::app::{App, Mode};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    category_list::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar, layout.help_bar);

    if matches!(app.mode, Mode::Input { .. } | Mode::ConfirmDelete(_)) {
        prompt::render(frame, app);
    }
}

/// Terminal color for a `#RRGGBB` string
pub fn hex_color(hex: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (hex.starts_with('#'), channel(1..3), channel(3..5), channel(5..7)) {
        (true, Some(r), Some(g), Some(b)) if hex.len() == 7 => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}
