//! Layout definitions for the TUI
//!
//! Header on top, category list in the middle, status and key hints below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Paycheck and totals
    pub header: Rect,
    /// Category list
    pub main: Rect,
    /// Status message or prompt
    pub status_bar: Rect,
    /// Key hints
    pub help_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Category list
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
            help_bar: vertical[3],
        }
    }
}

/// Create a centered rectangle with percentage-based sizing
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.main.height, 19);
        assert_eq!(layout.status_bar.y, 22);
        assert_eq!(layout.help_bar.y, 23);
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(50, 3, Rect::new(0, 0, 80, 21));
        assert_eq!(rect.height, 3);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.y, 9);
    }
}
