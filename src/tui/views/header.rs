//! Header: paycheck, allocated share and what is left

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Mode};

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let summary = app.budget.summary();
    let paycheck = if app.budget.paycheck.is_set() {
        summary.paycheck.format_with_symbol(symbol)
    } else {
        "--".to_string()
    };

    // A live slider shows the total it would produce
    let (allocated_pct, unallocated_pct) = match &app.mode {
        Mode::Slider(session) => {
            let total = session.preview_total(&app.budget);
            (total, 100.0 - total)
        }
        _ => (summary.allocated_pct, summary.unallocated_pct),
    };

    let remaining_color = if unallocated_pct < -0.05 {
        Color::Red
    } else if unallocated_pct.abs() < 0.05 {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled("Paycheck: ", Style::default().fg(Color::White)),
        Span::styled(paycheck, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  │  "),
        Span::styled(
            format!("{:.1}% allocated", allocated_pct),
            Style::default().fg(Color::White),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("{:.1}% unallocated", unallocated_pct),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if summary.paycheck.cents() > 0 {
        spans.push(Span::styled(
            format!(" ({})", summary.unallocated.format_with_symbol(symbol)),
            Style::default().fg(remaining_color),
        ));
    }
    if allocated_pct > 100.05 {
        spans.push(Span::styled("  ⚠ over 100%", Style::default().fg(Color::Red)));
    }

    let block = Block::default()
        .title(" Budgie ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
