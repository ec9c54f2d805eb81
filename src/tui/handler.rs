//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::engine::{NewCategory, SliderSession};
use crate::models::{parse_number, CategoryId, LockKind};
use crate::reorder::DragSession;
use crate::services::AddOutcome;

use super::app::{App, Drag, Mode, Prompt};
use super::event::Event;
use super::widgets::TextInput;

const NUDGE: f64 = 1.0;
const BIG_NUDGE: f64 = 5.0;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match std::mem::take(&mut app.mode) {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Slider(session) => handle_slider_key(app, session, key),
        Mode::Reorder(drag) => handle_reorder_key(app, drag, key),
        Mode::Input { prompt, input } => handle_input_key(app, prompt, input, key),
        Mode::ConfirmDelete(id) => {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                if let Some(Some(deleted)) = app.run(|s| s.delete_category(&id)) {
                    app.set_status(format!("Deleted {}", deleted.name));
                }
            } else {
                app.set_status("Delete cancelled");
            }
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();
    let selected = app.selected_category().map(|c| c.id.clone());

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.show_help = !app.show_help,

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('h') | KeyCode::Left => start_slider(app, -NUDGE),
        KeyCode::Char('l') | KeyCode::Right => start_slider(app, NUDGE),
        KeyCode::Char('H') => start_slider(app, -BIG_NUDGE),
        KeyCode::Char('L') => start_slider(app, BIG_NUDGE),

        KeyCode::Char('%') => {
            if let Some(category) = app.selected_category() {
                let prompt = Prompt::Percentage(category.id.clone());
                let input = TextInput::new().content(format!("{:.1}", category.percentage));
                open_prompt(app, prompt, input);
            }
        }
        KeyCode::Char('=') => {
            if let Some(category) = app.selected_category() {
                let current = category
                    .lock
                    .locked_amount()
                    .unwrap_or_else(|| category.dollar_amount(app.budget.paycheck_amount()));
                let prompt = Prompt::Amount(category.id.clone());
                let input = TextInput::new().content(format!("{:.2}", current));
                open_prompt(app, prompt, input);
            }
        }

        KeyCode::Char('p') => {
            if let Some(id) = selected {
                app.run(|s| s.lock_percentage(&id));
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected {
                app.run(|s| s.lock_amount(&id));
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = selected {
                if let Some(event) = app.run(|s| s.toggle_inactive(&id)) {
                    app.report(event);
                }
            }
        }
        KeyCode::Char('e') => {
            if app.run(|s| s.distribute_evenly()).is_some() {
                app.set_status("Distributed evenly");
            }
        }
        KeyCode::Char('u') => match app.run(|s| s.undo()) {
            Some(true) => app.set_status("Undone"),
            Some(false) => app.set_status("Nothing to undo"),
            None => {}
        },
        KeyCode::Char('r') => match app.run(|s| s.redo()) {
            Some(true) => app.set_status("Redone"),
            Some(false) => app.set_status("Nothing to redo"),
            None => {}
        },
        KeyCode::Char('$') => {
            let input = TextInput::new().content(app.budget.paycheck.text());
            open_prompt(app, Prompt::Paycheck, input);
        }
        KeyCode::Char('a') => open_prompt(app, Prompt::NewName, TextInput::new()),
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = selected {
                app.mode = Mode::ConfirmDelete(id);
            }
        }
        KeyCode::Char('m') => {
            if let Some(id) = selected {
                match DragSession::grab(&app.budget, &id) {
                    Some(session) => {
                        app.mode = Mode::Reorder(Drag {
                            session,
                            by_mouse: false,
                        })
                    }
                    None => app.set_warning("Only active categories can be moved"),
                }
            }
        }

        _ => {}
    }
}

/// Begin a slider session on the selected category and apply a first nudge
fn start_slider(app: &mut App, delta: f64) {
    let Some(category) = app.selected_category() else {
        return;
    };
    match SliderSession::begin(&app.budget, &category.id) {
        Some(mut session) => {
            session.nudge(delta);
            app.mode = Mode::Slider(session);
        }
        None => {
            let reason = if category.inactive { "paused" } else { "locked" };
            let text = format!("{} is {}", category.name, reason);
            app.set_warning(text);
        }
    }
}

fn handle_slider_key(app: &mut App, mut session: SliderSession, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => session.nudge(-NUDGE),
        KeyCode::Char('l') | KeyCode::Right => session.nudge(NUDGE),
        KeyCode::Char('H') => session.nudge(-BIG_NUDGE),
        KeyCode::Char('L') => session.nudge(BIG_NUDGE),
        KeyCode::Enter => {
            if let Some(Some(commit)) = app.run(|s| s.end_slider(session)) {
                app.report(commit.event());
            }
            return;
        }
        KeyCode::Esc => {
            app.set_status("Slider cancelled");
            return;
        }
        _ => {}
    }
    app.mode = Mode::Slider(session);
}

fn handle_reorder_key(app: &mut App, mut drag: Drag, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            drag.session.step(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            drag.session.step(-1);
        }
        KeyCode::Enter => {
            finish_drag(app, drag.session);
            return;
        }
        KeyCode::Esc => {
            reselect(app, drag.session.dragged());
            app.set_status("Move cancelled");
            return;
        }
        _ => {}
    }
    app.mode = Mode::Reorder(drag);
}

/// Commit a drag and keep the moved category selected
fn finish_drag(app: &mut App, session: DragSession) {
    let id = session.dragged().clone();
    if let Some(true) = app.run(|s| s.end_drag(session)) {
        app.set_status("Moved");
    }
    reselect(app, &id);
}

fn reselect(app: &mut App, id: &CategoryId) {
    if let Some(index) = app.budget.categories.index_of(id) {
        app.select(index);
    }
}

fn open_prompt(app: &mut App, prompt: Prompt, input: TextInput) {
    app.mode = Mode::Input { prompt, input };
}

fn handle_input_key(app: &mut App, prompt: Prompt, mut input: TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return,
        KeyCode::Enter => {
            submit_prompt(app, prompt, input.value().trim().to_string());
            return;
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    app.mode = Mode::Input { prompt, input };
}

fn submit_prompt(app: &mut App, prompt: Prompt, value: String) {
    match prompt {
        Prompt::Paycheck => {
            if let Some(events) = app.run(|s| s.set_paycheck(&value)) {
                let notes: Vec<String> = events
                    .iter()
                    .map(|e| e.describe(&app.budget.categories))
                    .collect();
                if notes.is_empty() {
                    app.set_status("Paycheck updated");
                } else {
                    app.set_warning(notes.join("; "));
                }
            }
        }

        Prompt::Percentage(id) => {
            let Some(pct) = parse_number(value.trim_end_matches('%')) else {
                app.set_warning(format!("'{}' is not a number", value));
                return;
            };
            match app.run(|s| s.commit_percentage(&id, pct)) {
                Some(Some(commit)) => app.report(commit.event()),
                Some(None) => app.set_warning("That category is paused or locked to dollars"),
                None => {}
            }
        }

        Prompt::Amount(id) => {
            if let Some(Some(commit)) = app.run(|s| s.set_locked_amount(&id, &value)) {
                app.report(commit.event());
            }
        }

        Prompt::NewName => {
            if value.is_empty() {
                app.set_warning("Name cannot be blank");
            } else {
                let prompt = Prompt::NewValue { name: value };
                open_prompt(app, prompt, TextInput::new());
            }
        }

        Prompt::NewValue { name } => {
            let new = match value.strip_prefix('$') {
                Some(amount) => NewCategory::new(name, amount, LockKind::Amount),
                None => NewCategory::new(name, value, LockKind::Free),
            };
            match app.run(|s| s.add_category(new)) {
                Some(AddOutcome::Added(category)) => {
                    let last = app.budget.categories.len().saturating_sub(1);
                    app.select(last);
                    app.set_status(format!("Added {}", category.name));
                }
                Some(rejected) => app.report(rejected.event()),
                None => {}
            }
        }
    }
}

/// Handle a mouse event: click selects, drag reorders, wheel scrolls
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !matches!(app.mode, Mode::Normal) {
                return;
            }
            let Some(index) = app.index_at_row(mouse.row) else {
                return;
            };
            app.select(index);

            let active_slot = app
                .budget
                .categories
                .iter()
                .take(index + 1)
                .filter(|c| c.is_active())
                .count();
            let is_active = app
                .selected_category()
                .map(|c| c.is_active())
                .unwrap_or(false);
            if is_active {
                let centers = app.active_row_centers();
                if let Some(session) = DragSession::begin(&app.budget, active_slot - 1, centers) {
                    app.mode = Mode::Reorder(Drag {
                        session,
                        by_mouse: true,
                    });
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Mode::Reorder(drag) = &mut app.mode {
                if drag.by_mouse {
                    drag.session.update(mouse.row as f64);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Mode::Reorder(drag) = &app.mode {
                if drag.by_mouse {
                    if let Mode::Reorder(drag) = std::mem::take(&mut app.mode) {
                        finish_drag(app, drag.session);
                    }
                }
            }
        }
        MouseEventKind::ScrollDown => {
            if matches!(app.mode, Mode::Normal) {
                app.move_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if matches!(app.mode, Mode::Normal) {
                app.move_up();
            }
        }
        _ => {}
    }
}
