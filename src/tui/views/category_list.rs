//! Category list with share bars

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::models::{Category, Money};
use crate::tui::app::{App, Mode};

use super::hex_color;

const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 18;

/// Render the category list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    app.list_area = block.inner(area);

    let paycheck = app.budget.paycheck_amount();
    let symbol = app.settings.currency_symbol.as_str();
    let dragged = match &app.mode {
        Mode::Reorder(drag) => Some(drag.session.dragged().clone()),
        _ => None,
    };

    let order = app.display_order();
    // The highlight follows the dragged category to its preview slot
    let drag_slot = dragged
        .as_ref()
        .and_then(|id| order.iter().position(|c| &c.id == id));

    let items: Vec<ListItem> = order
        .into_iter()
        .map(|category| {
            let preview = match &app.mode {
                Mode::Slider(session) if session.id() == &category.id => Some((
                    session.preview(),
                    session.is_overshooting(&app.budget),
                )),
                _ => None,
            };
            let is_dragged = dragged.as_ref() == Some(&category.id);
            ListItem::new(row(category, paycheck, symbol, preview, is_dragged))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    if let Some(slot) = drag_slot {
        app.list_state.select(Some(slot));
    }
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn row(
    category: &Category,
    paycheck: f64,
    symbol: &str,
    preview: Option<(f64, bool)>,
    is_dragged: bool,
) -> Line<'static> {
    let (pct, overshooting) = preview.unwrap_or((category.percentage, false));
    let color = if category.inactive {
        Color::DarkGray
    } else {
        hex_color(&category.color)
    };

    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar_color = if overshooting { Color::Red } else { color };

    let name: String = category.name.chars().take(NAME_WIDTH).collect();
    let amount = if paycheck > 0.0 && !category.inactive {
        Money::from_dollars(paycheck * pct / 100.0).format_with_symbol(symbol)
    } else {
        "--".to_string()
    };

    let name_style = if category.inactive {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_dragged {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::raw(format!("{} ", category.icon.glyph())),
        Span::styled(format!("{:<NAME_WIDTH$}", name), name_style),
        Span::styled(
            format!(" {:<3} ", category.lock.marker()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(bar_color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {:>6.1}%", pct),
            Style::default().fg(if overshooting { Color::Red } else { Color::White }),
        ),
        Span::styled(format!(" {:>12}", amount), Style::default().fg(Color::Green)),
    ];
    if category.inactive {
        spans.push(Span::styled(" paused", Style::default().fg(Color::DarkGray)));
    }
    if preview.is_some() {
        spans.push(Span::styled(" ◀ ▶", Style::default().fg(Color::Cyan)));
    }

    Line::from(spans)
}
