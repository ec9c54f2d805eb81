//! Status bar and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Mode};

/// Render the status message and the key hints for the current mode
pub fn render(frame: &mut Frame, app: &App, status_area: Rect, help_area: Rect) {
    let status = match (&app.status, &app.mode) {
        (Some(status), _) => Span::styled(
            format!(" {}", status.text),
            Style::default().fg(if status.is_warning {
                Color::Yellow
            } else {
                Color::Green
            }),
        ),
        (None, Mode::Slider(session)) => Span::styled(
            format!(
                " Sliding: {:.1}% -> {:.1}%",
                session.original(),
                session.preview()
            ),
            Style::default().fg(Color::Cyan),
        ),
        (None, Mode::Reorder(drag)) => Span::styled(
            format!(" Moving to slot {}", drag.session.target() + 1),
            Style::default().fg(Color::Cyan),
        ),
        (None, _) => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);

    let hints = Span::styled(hints(app), Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(hints)), help_area);
}

fn hints(app: &App) -> &'static str {
    match app.mode {
        Mode::Slider(_) => " [h/l] adjust  [H/L] ±5  [Enter] commit  [Esc] cancel",
        Mode::Reorder(_) => " [j/k] move  [Enter] drop  [Esc] cancel",
        Mode::Input { .. } => " [Enter] confirm  [Esc] cancel",
        Mode::ConfirmDelete(_) => " [y] delete  [n/Esc] keep",
        Mode::Normal if app.show_help => {
            " [j/k] select [h/l] slide [%] type share [p] %-lock [d] $-lock [=] set $ \
             [space] pause [e] even [u/r] undo/redo [$] paycheck [a] add [x] delete [m] move [q] quit"
        }
        Mode::Normal => " [h/l] slide  [p/d] lock  [space] pause  [u/r] undo/redo  [$] paycheck  [?] help  [q] quit",
    }
}
