//! Category edits: percentage commits, slider sessions, add/delete and
//! cosmetic changes

use std::fmt;

use tracing::debug;

use super::math::{round1, round2, EPSILON};
use super::{others_total, EngineEvent};
use crate::models::category::{is_hex_color, MAX_NAME_LEN, PALETTE};
use crate::models::{
    parse_number, BudgetState, Category, CategoryId, CategoryPatch, Icon, LockKind, LockMode,
};

/// Outcome of a percentage write
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub id: CategoryId,
    /// What the caller asked for, rounded
    pub requested: f64,
    /// What was stored
    pub committed: f64,
    pub was_capped: bool,
}

impl Commit {
    /// The `Capped` notification for this commit, if it was capped
    pub fn event(&self) -> Option<EngineEvent> {
        self.was_capped.then(|| EngineEvent::Capped {
            id: self.id.clone(),
            requested: self.requested,
            committed: self.committed,
        })
    }
}

/// Write a category's percentage, capped so the active total stays within 100
///
/// This is the only commit path for percentages, whether the value comes
/// from a slider release or typed input. Inactive and dollar-locked
/// categories are skipped (their percentage is kept or derived elsewhere).
pub fn commit_percentage(state: &mut BudgetState, id: &CategoryId, value: f64) -> Option<Commit> {
    let max_allowed = round1(100.0 - others_total(&state.categories, id)).max(0.0);
    let category = state.categories.get_mut(id)?;
    if category.inactive || category.lock.is_amount_locked() {
        return None;
    }

    let requested = if value.is_finite() {
        round1(value.max(0.0))
    } else {
        0.0
    };
    let was_capped = requested > max_allowed + EPSILON;
    let committed = if was_capped { max_allowed } else { requested };
    category.percentage = committed.min(100.0);

    debug!(
        category = %category.name,
        requested,
        committed,
        was_capped,
        "percentage committed"
    );
    Some(Commit {
        id: id.clone(),
        requested,
        committed,
        was_capped,
    })
}

/// An in-progress slider drag over one category
///
/// Updates only move the preview; the committed state is untouched until
/// [`SliderSession::end`]. Dropping the session without ending it commits
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSession {
    id: CategoryId,
    original: f64,
    preview: f64,
}

impl SliderSession {
    /// Start a drag; locked, inactive and unknown categories cannot be dragged
    pub fn begin(state: &BudgetState, id: &CategoryId) -> Option<Self> {
        let category = state.categories.get(id)?;
        if category.inactive || category.lock.is_locked() {
            return None;
        }
        Some(Self {
            id: id.clone(),
            original: category.percentage,
            preview: category.percentage,
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Percentage the category had when the drag started
    pub fn original(&self) -> f64 {
        self.original
    }

    /// Live value shown while dragging; may push the total above 100
    pub fn preview(&self) -> f64 {
        self.preview
    }

    /// Move the preview to `value` (rounded, within the slider's 0..=100 range)
    pub fn set_percentage_live(&mut self, value: f64) {
        if value.is_finite() {
            self.preview = round1(value.clamp(0.0, 100.0));
        }
    }

    /// Move the preview by `delta` points
    pub fn nudge(&mut self, delta: f64) {
        self.set_percentage_live(self.preview + delta);
    }

    /// Active total as it would be with the preview applied
    pub fn preview_total(&self, state: &BudgetState) -> f64 {
        round1(others_total(&state.categories, &self.id) + self.preview)
    }

    /// Whether the preview currently asks for more than is available
    pub fn is_overshooting(&self, state: &BudgetState) -> bool {
        self.preview_total(state) > 100.0 + EPSILON
    }

    /// Release the slider and commit the preview
    pub fn end(self, state: &mut BudgetState) -> Option<Commit> {
        commit_percentage(state, &self.id, self.preview)
    }
}

/// Request to create a category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCategory {
    pub name: String,
    /// Raw value text: a percentage, or a dollar amount for `LockKind::Amount`
    pub value: String,
    pub lock: LockKind,
    pub color: Option<String>,
    pub icon: Option<Icon>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, value: impl Into<String>, lock: LockKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            lock,
            ..Self::default()
        }
    }
}

/// Why an add request was ignored
#[derive(Debug, Clone, PartialEq)]
pub enum AddRejection {
    BlankName,
    MissingValue,
    /// The new share would push the active total above 100
    ExceedsTotal { requested: f64, available: f64 },
}

impl fmt::Display for AddRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name is blank"),
            Self::MissingValue => write!(f, "value is missing or not a number"),
            Self::ExceedsTotal {
                requested,
                available,
            } => write!(
                f,
                "{:.1}% requested but only {:.1}% is unallocated",
                requested, available
            ),
        }
    }
}

/// Append a new active category
///
/// Rejected without any change when the name is blank, the value does not
/// parse, or the new share would not fit in what is unallocated.
pub fn add_category(state: &mut BudgetState, new: NewCategory) -> Result<CategoryId, AddRejection> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(AddRejection::BlankName);
    }
    let value = parse_number(new.value.trim().trim_end_matches('%'))
        .ok_or(AddRejection::MissingValue)?
        .max(0.0);

    let paycheck = state.paycheck_amount();
    let (percentage, lock) = match new.lock {
        LockKind::Free => (round1(value), LockMode::Free),
        LockKind::Percentage => (round1(value), LockMode::Percentage),
        LockKind::Amount => {
            let pct = if paycheck > 0.0 {
                round1(value / paycheck * 100.0)
            } else {
                0.0
            };
            (
                pct,
                LockMode::Amount {
                    locked_amount: round2(value),
                },
            )
        }
    };

    let total = state.categories.active_total();
    if round1(total + percentage) > 100.0 + EPSILON {
        return Err(AddRejection::ExceedsTotal {
            requested: percentage,
            available: round1(100.0 - total).max(0.0),
        });
    }

    let color = new
        .color
        .filter(|c| is_hex_color(c))
        .unwrap_or_else(|| PALETTE[state.categories.len() % PALETTE.len()].to_string());
    let category = Category::new(truncate_name(name), percentage)
        .with_color(color)
        .with_icon(new.icon.unwrap_or_default())
        .with_lock(lock);
    let id = category.id.clone();

    debug!(category = %category.name, percentage, lock = ?lock, "category added");
    state.categories.add(category);
    Ok(id)
}

/// Remove a category; its share is not handed to anyone
pub fn delete_category(state: &mut BudgetState, id: &CategoryId) -> Option<Category> {
    let removed = state.categories.remove(id)?;
    debug!(category = %removed.name, released = removed.percentage, "category deleted");
    Some(removed)
}

/// Rename; blank names are ignored
pub fn rename(state: &mut BudgetState, id: &CategoryId, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    state.categories.update(
        id,
        CategoryPatch {
            name: Some(truncate_name(name)),
            ..CategoryPatch::default()
        },
    )
}

/// Change the color; anything but `#RRGGBB` is ignored
pub fn set_color(state: &mut BudgetState, id: &CategoryId, color: &str) -> bool {
    let color = color.trim();
    if !is_hex_color(color) {
        return false;
    }
    state.categories.update(
        id,
        CategoryPatch {
            color: Some(color.to_uppercase()),
            ..CategoryPatch::default()
        },
    )
}

pub fn set_icon(state: &mut BudgetState, id: &CategoryId, icon: Icon) -> bool {
    state.categories.update(
        id,
        CategoryPatch {
            icon: Some(icon),
            ..CategoryPatch::default()
        },
    )
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::activation::toggle_inactive;
    use crate::engine::locks::{lock_amount, lock_percentage};
    use crate::engine::testing::{assert_within_whole, id, lock, pct, state};

    #[test]
    fn test_commit_within_room() {
        let mut s = state("", &[("A", 40.0), ("B", 30.0), ("C", 10.0)]);
        let c = id(&s, "C");

        let commit = commit_percentage(&mut s, &c, 25.04).unwrap();
        assert!(!commit.was_capped);
        assert_eq!(commit.committed, 25.0);
        assert!(commit.event().is_none());
        assert_eq!(pct(&s, "C"), 25.0);
    }

    #[test]
    fn test_commit_is_capped() {
        let mut s = state("", &[("A", 50.0), ("B", 30.0), ("C", 10.0)]);
        let c = id(&s, "C");

        let commit = commit_percentage(&mut s, &c, 30.0).unwrap();
        assert!(commit.was_capped);
        assert_eq!(commit.committed, 20.0);
        assert_eq!(pct(&s, "C"), 20.0);
        assert_eq!(
            commit.event(),
            Some(EngineEvent::Capped {
                id: c.clone(),
                requested: 30.0,
                committed: 20.0
            })
        );
        assert_within_whole(&s);
    }

    #[test]
    fn test_commit_ignores_inactive_categories_in_total() {
        let mut s = state("", &[("A", 60.0), ("B", 30.0), ("C", 10.0)]);
        let a = id(&s, "A");
        let c = id(&s, "C");
        s.categories.get_mut(&a).unwrap().inactive = true;

        let commit = commit_percentage(&mut s, &c, 70.0).unwrap();
        assert!(!commit.was_capped);
        assert_eq!(pct(&s, "C"), 70.0);
    }

    #[test]
    fn test_commit_negative_clamps_to_zero() {
        let mut s = state("", &[("A", 60.0)]);
        let a = id(&s, "A");
        commit_percentage(&mut s, &a, -12.0);
        assert_eq!(pct(&s, "A"), 0.0);
    }

    #[test]
    fn test_commit_skips_dollar_locked_and_inactive() {
        let mut s = state("1000", &[("A", 60.0), ("B", 20.0)]);
        let a = id(&s, "A");
        let b = id(&s, "B");
        lock_amount(&mut s, &a);
        toggle_inactive(&mut s, &b);
        let before = s.clone();

        assert!(commit_percentage(&mut s, &a, 10.0).is_none());
        assert!(commit_percentage(&mut s, &b, 10.0).is_none());
        assert_eq!(s, before);
    }

    #[test]
    fn test_slider_preview_does_not_touch_state() {
        let mut s = state("", &[("A", 50.0), ("B", 30.0), ("C", 20.0)]);
        let c = id(&s, "C");
        let before = s.clone();

        let mut session = SliderSession::begin(&s, &c).unwrap();
        session.set_percentage_live(45.0);
        assert_eq!(session.preview(), 45.0);
        assert_eq!(session.preview_total(&s), 125.0);
        assert!(session.is_overshooting(&s));
        assert_eq!(s, before);

        let commit = session.end(&mut s).unwrap();
        assert!(commit.was_capped);
        assert_eq!(pct(&s, "C"), 20.0);
    }

    #[test]
    fn test_abandoned_slider_commits_nothing() {
        let s = state("", &[("A", 50.0), ("B", 50.0)]);
        let a = id(&s, "A");
        let before = s.clone();
        {
            let mut session = SliderSession::begin(&s, &a).unwrap();
            session.nudge(-10.0);
            assert_eq!(session.preview(), 40.0);
            assert_eq!(session.original(), 50.0);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn test_slider_refuses_locked_and_inactive() {
        let mut s = state("", &[("A", 50.0), ("B", 25.0), ("C", 25.0)]);
        let a = id(&s, "A");
        let b = id(&s, "B");
        let c = id(&s, "C");
        lock_percentage(&mut s, &a);
        lock_amount(&mut s, &b);
        toggle_inactive(&mut s, &c);

        assert!(SliderSession::begin(&s, &a).is_none());
        assert!(SliderSession::begin(&s, &b).is_none());
        assert!(SliderSession::begin(&s, &c).is_none());
        assert!(SliderSession::begin(&s, &CategoryId::new()).is_none());
    }

    #[test]
    fn test_add_free_category() {
        let mut s = state("", &[("A", 60.0)]);
        let new_id = add_category(&mut s, NewCategory::new("  Travel ", "15", LockKind::Free)).unwrap();

        let added = s.categories.get(&new_id).unwrap();
        assert_eq!(added.name, "Travel");
        assert_eq!(added.percentage, 15.0);
        assert_eq!(added.lock, LockMode::Free);
        assert!(added.is_active());
        assert_eq!(s.categories.as_slice().last().unwrap().id, new_id);
    }

    #[test]
    fn test_add_percentage_locked_category() {
        let mut s = state("", &[("A", 60.0)]);
        add_category(&mut s, NewCategory::new("Gym", "12.5%", LockKind::Percentage)).unwrap();
        assert_eq!(pct(&s, "Gym"), 12.5);
        assert_eq!(lock(&s, "Gym"), LockMode::Percentage);
    }

    #[test]
    fn test_add_amount_locked_category() {
        let mut s = state("2000", &[("A", 60.0)]);
        add_category(&mut s, NewCategory::new("Car", "$300", LockKind::Amount)).unwrap();
        assert_eq!(pct(&s, "Car"), 15.0);
        assert_eq!(lock(&s, "Car"), LockMode::Amount { locked_amount: 300.0 });
    }

    #[test]
    fn test_add_rejected_when_over_total() {
        let mut s = state("", &[("A", 35.0), ("B", 25.0)]);
        let before = s.clone();

        let err = add_category(&mut s, NewCategory::new("X", "150", LockKind::Percentage));
        assert_eq!(
            err,
            Err(AddRejection::ExceedsTotal {
                requested: 150.0,
                available: 40.0
            })
        );
        assert_eq!(s, before);
        assert_eq!(s.categories.len(), 2);
        assert_eq!(s.categories.active_total(), 60.0);
    }

    #[test]
    fn test_add_rejects_blank_name_and_bad_value() {
        let mut s = state("", &[("A", 10.0)]);
        let before = s.clone();

        assert_eq!(
            add_category(&mut s, NewCategory::new("   ", "5", LockKind::Free)),
            Err(AddRejection::BlankName)
        );
        assert_eq!(
            add_category(&mut s, NewCategory::new("X", "", LockKind::Free)),
            Err(AddRejection::MissingValue)
        );
        assert_eq!(
            add_category(&mut s, NewCategory::new("X", "abc", LockKind::Free)),
            Err(AddRejection::MissingValue)
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_add_fills_exactly_to_100() {
        let mut s = state("", &[("A", 70.0)]);
        assert!(add_category(&mut s, NewCategory::new("B", "30", LockKind::Free)).is_ok());
        assert_within_whole(&s);
    }

    #[test]
    fn test_delete_does_not_redistribute() {
        let mut s = state("", &[("A", 40.0), ("B", 60.0)]);
        let a = id(&s, "A");

        let removed = delete_category(&mut s, &a).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(pct(&s, "B"), 60.0);
        assert_eq!(s.categories.active_total(), 60.0);
        assert!(delete_category(&mut s, &a).is_none());
    }

    #[test]
    fn test_cosmetic_edits() {
        let mut s = state("", &[("A", 40.0)]);
        let a = id(&s, "A");

        assert!(rename(&mut s, &a, "Rent"));
        assert!(!rename(&mut s, &a, "  "));
        assert!(set_color(&mut s, &a, "#ff2d55"));
        assert!(!set_color(&mut s, &a, "pink"));
        assert!(set_icon(&mut s, &a, Icon::Home));

        let category = s.categories.get(&a).unwrap();
        assert_eq!(category.name, "Rent");
        assert_eq!(category.color, "#FF2D55");
        assert_eq!(category.icon, Icon::Home);
    }
}
