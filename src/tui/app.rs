//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Edits go through [`AllocationService`]; `budget` is a copy refreshed after
//! every edit so rendering never touches storage.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::warn;

use crate::config::settings::Settings;
use crate::engine::{EngineEvent, SliderSession};
use crate::error::BudgieResult;
use crate::models::{BudgetState, Category, CategoryId};
use crate::reorder::DragSession;
use crate::services::AllocationService;
use crate::storage::Storage;

use super::widgets::input::TextInput;

/// What a text prompt is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Paycheck,
    /// A typed percentage for a category
    Percentage(CategoryId),
    /// A dollar amount to pin a category to
    Amount(CategoryId),
    /// First step of adding a category
    NewName,
    /// Second step of adding a category
    NewValue { name: String },
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Paycheck => "Paycheck",
            Self::Percentage(_) => "Percentage",
            Self::Amount(_) => "Dollar amount",
            Self::NewName => "New category name",
            Self::NewValue { .. } => "Share (e.g. 10, or $250 to lock dollars)",
        }
    }
}

/// Reorder drag and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    pub session: DragSession,
    /// Started with the mouse rather than the `m` key
    pub by_mouse: bool,
}

/// Current interaction mode
#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// A percentage slider is being moved; nothing is committed yet
    Slider(SliderSession),
    /// A category is being dragged to a new slot
    Reorder(Drag),
    /// A text prompt is open
    Input { prompt: Prompt, input: TextInput },
    /// Waiting for y/n before deleting
    ConfirmDelete(CategoryId),
}

/// Ticks a status message stays up (about four seconds at the default rate)
const STATUS_TICKS: u16 = 16;

/// Transient message under the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_warning: bool,
    /// Ticks seen since the message was set
    pub age: u16,
}

/// Main application state
pub struct App<'a> {
    pub service: AllocationService<'a>,

    pub settings: &'a Settings,

    /// Copy of the committed budget
    pub budget: BudgetState,

    pub mode: Mode,

    pub should_quit: bool,

    /// Selection and scroll offset of the category list
    pub list_state: ListState,

    /// Where the category list was last drawn (inside its border)
    pub list_area: Rect,

    pub status: Option<Status>,

    /// Show the long key help instead of the short hint line
    pub show_help: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> BudgieResult<Self> {
        let service = AllocationService::new(storage);
        let budget = service.state()?;
        let mut list_state = ListState::default();
        if !budget.categories.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            service,
            settings,
            budget,
            mode: Mode::Normal,
            should_quit: false,
            list_state,
            list_area: Rect::default(),
            status: None,
            show_help: false,
        })
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_warning: false,
            age: 0,
        });
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_warning: true,
            age: 0,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Age the status message and drop it once it has been up long enough
    pub fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.age += 1;
            if status.age >= STATUS_TICKS {
                self.status = None;
            }
        }
    }

    /// Show an engine event as a warning
    pub fn report(&mut self, event: Option<EngineEvent>) {
        if let Some(event) = event {
            let text = event.describe(&self.budget.categories);
            self.set_warning(text);
        }
    }

    /// Reload the committed budget and keep the selection in range
    pub fn refresh(&mut self) {
        match self.service.state() {
            Ok(budget) => self.budget = budget,
            Err(e) => {
                warn!(error = %e, "failed to reload budget");
                self.set_warning(format!("Could not reload budget: {}", e));
            }
        }

        let len = self.budget.categories.len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Run a service call, reporting errors on the status line
    pub fn run<R>(&mut self, call: impl FnOnce(&AllocationService<'a>) -> BudgieResult<R>) -> Option<R> {
        let result = call(&self.service);
        self.refresh();
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.set_warning(e.to_string());
                None
            }
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_index()
            .and_then(|i| self.budget.categories.as_slice().get(i))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.budget.categories.len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.selected_index() {
            self.select(i.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(i) = self.selected_index() {
            self.select(i + 1);
        }
    }

    /// Categories in the order they should be drawn
    ///
    /// While a reorder is in progress the active categories follow the
    /// drag preview; inactive ones keep their slots.
    pub fn display_order(&self) -> Vec<&Category> {
        let categories = self.budget.categories.as_slice();
        let Mode::Reorder(drag) = &self.mode else {
            return categories.iter().collect();
        };

        let mut preview = drag
            .session
            .preview_order()
            .into_iter()
            .filter_map(|id| self.budget.categories.get(&id));
        categories
            .iter()
            .map(|c| {
                if c.is_active() {
                    preview.next().unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }

    /// List index under a terminal row, if any
    pub fn index_at_row(&self, row: u16) -> Option<usize> {
        let area = self.list_area;
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        (index < self.budget.categories.len()).then_some(index)
    }

    /// Screen row of each active category, in active order
    ///
    /// Rows above or below the visible window extrapolate past the edges so
    /// the drag still sees one slot per row.
    pub fn active_row_centers(&self) -> Vec<f64> {
        let top = self.list_area.y as f64 - self.list_state.offset() as f64;
        self.budget
            .categories
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active())
            .map(|(i, _)| top + i as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgiePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgiePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_app_selects_first() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let app = App::new(&storage, &settings).unwrap();
        assert_eq!(app.selected_index(), Some(0));
        assert_eq!(app.selected_category().unwrap().name, "Federal Taxes");
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();

        app.move_up();
        assert_eq!(app.selected_index(), Some(0));
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_index(), Some(8));
    }

    #[test]
    fn test_rows_map_to_indexes() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();
        app.list_area = Rect::new(1, 5, 40, 4);

        assert_eq!(app.index_at_row(4), None);
        assert_eq!(app.index_at_row(5), Some(0));
        assert_eq!(app.index_at_row(8), Some(3));
        assert_eq!(app.index_at_row(9), None);
        assert_eq!(app.active_row_centers()[2], 7.0);
    }

    #[test]
    fn test_status_expires() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();

        app.set_status("Saved");
        for _ in 0..STATUS_TICKS - 1 {
            app.tick();
        }
        assert!(app.status.is_some());
        app.tick();
        assert!(app.status.is_none());
    }
}
