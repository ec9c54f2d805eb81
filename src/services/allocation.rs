//! Allocation service
//!
//! The single entry point for edits coming from the CLI or the TUI. Each
//! edit runs the engine on a copy of the current budget; if anything
//! changed, the pre-edit copy goes onto the undo stack, the new budget
//! becomes current, and it is saved and audited. Saving is fire-and-forget:
//! a failed write is logged and the edit still stands.

use tracing::{info, warn};

use crate::audit::{budget_diff, generate_diff, EntityType};
use crate::config::paths::DOCUMENT_KEY;
use crate::engine::{self, AddRejection, Commit, EngineEvent, NewCategory, SliderSession};
use crate::error::{BudgieError, BudgieResult};
use crate::history::HistoryManager;
use crate::models::{BudgetState, Category, CategoryId, Icon};
use crate::reorder::DragSession;
use crate::storage::Storage;

/// What an edit touched, for the audit log
#[derive(Debug, Clone, Copy)]
enum Change<'c> {
    Category(&'c CategoryId),
    Paycheck,
    Budget(&'static str),
}

/// Result of an add request
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Category),
    Rejected(AddRejection),
}

impl AddOutcome {
    /// The rejection as an engine event, for status lines
    pub fn event(&self) -> Option<EngineEvent> {
        match self {
            Self::Added(_) => None,
            Self::Rejected(reason) => Some(EngineEvent::Rejected(reason.clone())),
        }
    }
}

/// Service for allocation edits
pub struct AllocationService<'a> {
    storage: &'a Storage,
}

impl<'a> AllocationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Copy of the current budget
    pub fn state(&self) -> BudgieResult<BudgetState> {
        self.storage.budget.get()
    }

    /// Find a category by name or id
    pub fn find_category(&self, identifier: &str) -> BudgieResult<Category> {
        self.state()?
            .categories
            .find(identifier)
            .cloned()
            .ok_or_else(|| BudgieError::category_not_found(identifier))
    }

    pub fn can_undo(&self) -> BudgieResult<bool> {
        self.storage.history.with(|h| h.can_undo())
    }

    pub fn can_redo(&self) -> BudgieResult<bool> {
        self.storage.history.with(|h| h.can_redo())
    }

    // === Paycheck ===

    /// Store a new paycheck and rebalance
    pub fn set_paycheck(&self, text: &str) -> BudgieResult<Vec<EngineEvent>> {
        self.apply(Change::Paycheck, |state| engine::set_paycheck(state, text))
    }

    pub fn clear_paycheck(&self) -> BudgieResult<Vec<EngineEvent>> {
        self.set_paycheck("")
    }

    // === Percentages ===

    /// Commit a typed percentage (capped to what is free)
    pub fn commit_percentage(&self, id: &CategoryId, value: f64) -> BudgieResult<Option<Commit>> {
        self.apply(Change::Category(id), |state| {
            engine::commit_percentage(state, id, value)
        })
    }

    /// Commit a finished slider drag
    pub fn end_slider(&self, session: SliderSession) -> BudgieResult<Option<Commit>> {
        let id = session.id().clone();
        self.apply(Change::Category(&id), |state| session.end(state))
    }

    pub fn distribute_evenly(&self) -> BudgieResult<()> {
        self.apply(Change::Budget("distribute evenly"), engine::distribute_evenly)
    }

    // === Locks ===

    pub fn lock_percentage(&self, id: &CategoryId) -> BudgieResult<bool> {
        self.apply(Change::Category(id), |state| engine::lock_percentage(state, id))
    }

    pub fn lock_amount(&self, id: &CategoryId) -> BudgieResult<bool> {
        self.apply(Change::Category(id), |state| engine::lock_amount(state, id))
    }

    /// Pin a dollar amount, dollar-locking the category first if needed
    pub fn set_locked_amount(&self, id: &CategoryId, text: &str) -> BudgieResult<Option<Commit>> {
        self.apply(Change::Category(id), |state| {
            let already_locked = state
                .categories
                .get(id)
                .map(|c| c.lock.is_amount_locked())
                .unwrap_or(false);
            if !already_locked {
                engine::lock_amount(state, id);
            }
            engine::set_locked_amount(state, id, text)
        })
    }

    // === Activity ===

    pub fn toggle_inactive(&self, id: &CategoryId) -> BudgieResult<Option<EngineEvent>> {
        self.apply(Change::Category(id), |state| engine::toggle_inactive(state, id))
    }

    // === Membership ===

    pub fn add_category(&self, new: NewCategory) -> BudgieResult<AddOutcome> {
        let mut added = None;
        let outcome = self.apply(Change::Budget("add category"), |state| {
            match engine::add_category(state, new) {
                Ok(id) => {
                    added = state.categories.get(&id).cloned();
                    Ok(())
                }
                Err(reason) => Err(reason),
            }
        })?;

        match (outcome, added) {
            (Ok(()), Some(category)) => {
                info!(category = %category.name, "category added");
                Ok(AddOutcome::Added(category))
            }
            (Err(reason), _) => {
                info!(%reason, "category add rejected");
                Ok(AddOutcome::Rejected(reason))
            }
            (Ok(()), None) => Err(BudgieError::Storage("added category went missing".into())),
        }
    }

    pub fn delete_category(&self, id: &CategoryId) -> BudgieResult<Option<Category>> {
        self.apply(Change::Category(id), |state| engine::delete_category(state, id))
    }

    // === Cosmetics ===

    pub fn rename(&self, id: &CategoryId, name: &str) -> BudgieResult<bool> {
        self.apply(Change::Category(id), |state| engine::rename(state, id, name))
    }

    pub fn set_color(&self, id: &CategoryId, color: &str) -> BudgieResult<bool> {
        self.apply(Change::Category(id), |state| engine::set_color(state, id, color))
    }

    pub fn set_icon(&self, id: &CategoryId, icon: Icon) -> BudgieResult<bool> {
        self.apply(Change::Category(id), |state| engine::set_icon(state, id, icon))
    }

    // === Ordering ===

    /// Commit a finished drag; the drag records its own undo step
    pub fn end_drag(&self, session: DragSession) -> BudgieResult<bool> {
        let before = self.state()?;
        let mut after = before.clone();
        let moved = self
            .storage
            .history
            .with(|history| session.end(&mut after, history))?;

        if moved {
            self.commit(Change::Budget("reorder"), &before, after)?;
        }
        Ok(moved)
    }

    /// Move `from` into the slot `to` occupies (both must be active)
    pub fn move_category(&self, from: &CategoryId, to: &CategoryId) -> BudgieResult<bool> {
        let state = self.state()?;
        let slot = |id: &CategoryId| state.categories.active().position(|c| &c.id == id);
        let (Some(_), Some(target)) = (slot(from), slot(to)) else {
            return Err(BudgieError::Validation(
                "Only active categories can be moved".into(),
            ));
        };

        let Some(mut session) = DragSession::grab(&state, from) else {
            return Ok(false);
        };
        session.update(target as f64);
        self.end_drag(session)
    }

    // === History ===

    pub fn undo(&self) -> BudgieResult<bool> {
        self.step_history("undo", |history, state| history.undo(state))
    }

    pub fn redo(&self) -> BudgieResult<bool> {
        self.step_history("redo", |history, state| history.redo(state))
    }

    fn step_history(
        &self,
        label: &'static str,
        step: impl FnOnce(&mut HistoryManager, &mut BudgetState) -> bool,
    ) -> BudgieResult<bool> {
        let before = self.state()?;
        let mut after = before.clone();
        let stepped = self.storage.history.with(|history| step(history, &mut after))?;

        if stepped {
            self.commit(Change::Budget(label), &before, after)?;
        }
        Ok(stepped)
    }

    // === Plumbing ===

    /// Run an edit; record, store and audit it if the budget changed
    fn apply<R>(&self, change: Change<'_>, edit: impl FnOnce(&mut BudgetState) -> R) -> BudgieResult<R> {
        let before = self.state()?;
        let mut after = before.clone();
        let result = edit(&mut after);

        if after != before {
            self.storage
                .history
                .with(|history| history.push_snapshot(&before))?;
            self.commit(change, &before, after)?;
        }
        Ok(result)
    }

    /// Make `after` current, then save and audit without failing the edit
    fn commit(&self, change: Change<'_>, before: &BudgetState, after: BudgetState) -> BudgieResult<()> {
        self.storage.budget.set(after.clone())?;

        if let Err(e) = self.storage.save_all() {
            warn!(error = %e, "failed to save budget");
        }
        if let Err(e) = self.audit(change, before, &after) {
            warn!(error = %e, "failed to write audit entry");
        }
        Ok(())
    }

    fn audit(&self, change: Change<'_>, before: &BudgetState, after: &BudgetState) -> BudgieResult<()> {
        let summary = budget_diff(before, after);
        info!(change = ?change, summary = summary.as_deref().unwrap_or(""), "budget updated");

        match change {
            Change::Category(id) => match (before.categories.get(id), after.categories.get(id)) {
                (Some(old), Some(new)) => {
                    let diff = summary.or_else(|| {
                        generate_diff(
                            &serde_json::to_value(old).ok()?,
                            &serde_json::to_value(new).ok()?,
                        )
                    });
                    self.storage.log_update(
                        EntityType::Category,
                        id.as_str(),
                        Some(new.name.clone()),
                        old,
                        new,
                        diff,
                    )
                }
                (Some(old), None) => self.storage.log_delete(
                    EntityType::Category,
                    id.as_str(),
                    Some(old.name.clone()),
                    old,
                ),
                (None, Some(new)) => self.storage.log_create(
                    EntityType::Category,
                    id.as_str(),
                    Some(new.name.clone()),
                    new,
                ),
                (None, None) => Ok(()),
            },
            Change::Paycheck => self.storage.log_update(
                EntityType::Paycheck,
                DOCUMENT_KEY,
                None,
                &before.paycheck,
                &after.paycheck,
                summary,
            ),
            Change::Budget(action) => self.storage.log_update(
                EntityType::Budget,
                DOCUMENT_KEY,
                Some(action.to_string()),
                before,
                after,
                summary,
            ),
        }
    }
}
