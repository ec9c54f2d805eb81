//! Prompt overlay for text input and delete confirmation

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, Mode};
use crate::tui::layout::centered_rect;

/// Render the overlay for the current prompt, if any
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 3, frame.area());
    frame.render_widget(Clear, area);

    match &app.mode {
        Mode::Input { prompt, input } => {
            let block = Block::default()
                .title(format!(" {} ", prompt.title()))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(input, inner);
        }
        Mode::ConfirmDelete(id) => {
            let name = app
                .budget
                .categories
                .get(id)
                .map(|c| c.name.as_str())
                .unwrap_or("category");
            let text = Line::from(vec![
                Span::raw(format!("Delete '{}'? Its share is not handed out. ", name)),
                Span::styled("[y/n]", Style::default().fg(Color::Yellow)),
            ]);
            let block = Block::default()
                .title(" Delete ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL);
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
        _ => {}
    }
}
