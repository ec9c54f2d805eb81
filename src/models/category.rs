//! Category model
//!
//! A category owns a share of the paycheck. The share is a percentage that
//! either floats with rebalancing, is pinned as a percentage, or is derived
//! from a pinned dollar amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::icon::{migrate_icon, Icon};
use super::ids::CategoryId;
use crate::engine::math::{round1, round2};

/// Color palette offered when creating or editing categories
pub const PALETTE: [&str; 15] = [
    "#FF3B30", "#FF9500", "#FFCC00", "#34C759", "#007AFF", "#5856D6", "#AF52DE", "#FF2D55",
    "#32ADE6", "#FF6B35", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD",
];

/// Color given to categories created without one
pub const DEFAULT_COLOR: &str = "#007AFF";

/// Maximum category name length
pub const MAX_NAME_LEN: usize = 50;

/// How a category's share is held
///
/// The locked dollar amount lives inside the `Amount` variant, so a category
/// can never be percentage-locked and dollar-locked at once, and never has a
/// locked amount without a dollar lock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LockMode {
    /// Share floats and absorbs redistribution
    #[default]
    Free,
    /// Percentage held constant
    Percentage,
    /// Dollar amount held constant; percentage is derived from the paycheck
    Amount { locked_amount: f64 },
}

impl LockMode {
    pub fn is_locked(&self) -> bool {
        !matches!(self, Self::Free)
    }

    pub fn is_percentage_locked(&self) -> bool {
        matches!(self, Self::Percentage)
    }

    pub fn is_amount_locked(&self) -> bool {
        matches!(self, Self::Amount { .. })
    }

    /// The pinned dollar amount, if dollar-locked
    pub fn locked_amount(&self) -> Option<f64> {
        match self {
            Self::Amount { locked_amount } => Some(*locked_amount),
            _ => None,
        }
    }

    /// Marker used in reports and lists
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Free => "",
            Self::Percentage => "[%]",
            Self::Amount { .. } => "[$]",
        }
    }
}

/// Lock requested when adding a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockKind {
    #[default]
    Free,
    Percentage,
    Amount,
}

impl FromStr for LockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" | "none" | "" => Ok(Self::Free),
            "pct" | "percent" | "percentage" | "%" => Ok(Self::Percentage),
            "amount" | "dollar" | "dollars" | "$" => Ok(Self::Amount),
            other => Err(format!(
                "unknown lock kind '{}' (expected free, pct or amount)",
                other
            )),
        }
    }
}

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CategoryRecord", into = "CategoryRecord")]
pub struct Category {
    /// Unique identifier, fixed at creation
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Share of the paycheck, 0..=100, always rounded to 0.1
    pub percentage: f64,

    /// `#RRGGBB`
    pub color: String,

    pub icon: Icon,

    pub lock: LockMode,

    /// Inactive categories keep their percentage but are excluded from the
    /// active total; the kept value is what reactivation asks for back.
    pub inactive: bool,
}

impl Category {
    /// Create a new free, active category
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            percentage: round1(percentage.clamp(0.0, 100.0)),
            color: DEFAULT_COLOR.to_string(),
            icon: Icon::default(),
            lock: LockMode::Free,
            inactive: false,
        }
    }

    /// Builder-style color override
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builder-style icon override
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Builder-style lock override
    pub fn with_lock(mut self, lock: LockMode) -> Self {
        self.lock = lock;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    /// Active and neither percentage- nor dollar-locked
    pub fn is_free(&self) -> bool {
        self.is_active() && !self.lock.is_locked()
    }

    /// Dollar share of a paycheck (0 when no paycheck is entered)
    pub fn dollar_amount(&self, paycheck: f64) -> f64 {
        if paycheck > 0.0 {
            round2(paycheck * self.percentage / 100.0)
        } else {
            0.0
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        if !(0.0..=100.0).contains(&self.percentage) {
            return Err(CategoryValidationError::PercentageOutOfRange(self.percentage));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check for a `#RRGGBB` color
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Partial update applied through the category store
///
/// Covers the share and the cosmetic fields; locks and activity change only
/// through the engine's toggles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub percentage: Option<f64>,
    pub color: Option<String>,
    pub icon: Option<Icon>,
}

impl CategoryPatch {
    pub fn percentage(value: f64) -> Self {
        Self {
            percentage: Some(value),
            ..Self::default()
        }
    }

    /// Apply the set fields; percentages are clamped and rounded
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(percentage) = self.percentage {
            category.percentage = round1(percentage.clamp(0.0, 100.0));
        }
        if let Some(color) = self.color {
            category.color = color;
        }
        if let Some(icon) = self.icon {
            category.icon = icon;
        }
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    PercentageOutOfRange(f64),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::PercentageOutOfRange(pct) => {
                write!(f, "Percentage {} is outside 0-100", pct)
            }
            Self::InvalidColor(color) => write!(f, "Invalid color '{}' (expected #RRGGBB)", color),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// The categories a brand new budget starts with
pub fn default_categories() -> Vec<Category> {
    const DEFAULTS: [(&str, f64, &str, Icon); 9] = [
        ("Federal Taxes", 22.0, "#FF3B30", Icon::Bank),
        ("State Taxes", 6.0, "#FF9500", Icon::Clipboard),
        ("Rent", 25.0, "#007AFF", Icon::Home),
        ("Groceries", 10.0, "#34C759", Icon::Cart),
        ("Savings", 15.0, "#5856D6", Icon::MoneyBag),
        ("Medical Budget", 5.0, "#FF2D55", Icon::Hospital),
        ("Kids", 8.0, "#AF52DE", Icon::Baby),
        ("Gear Budget", 5.0, "#32ADE6", Icon::Backpack),
        ("Misc", 4.0, "#FFCC00", Icon::Sparkles),
    ];

    DEFAULTS
        .iter()
        .map(|(name, pct, color, icon)| {
            Category::new(*name, *pct)
                .with_color(*color)
                .with_icon(*icon)
        })
        .collect()
}

/// Lock mode as written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum StoredLockMode {
    #[default]
    Free,
    LockedPercentage,
    LockedAmount,
}

/// On-disk shape of a category
///
/// Every field but `id` and `name` is optional so that saves from before
/// locking and deactivation existed still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    id: CategoryId,
    name: String,
    #[serde(default)]
    percentage: f64,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    lock_mode: StoredLockMode,
    #[serde(default)]
    locked_amount: Option<f64>,
    #[serde(default)]
    inactive: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        let lock = match record.lock_mode {
            StoredLockMode::Free => LockMode::Free,
            StoredLockMode::LockedPercentage => LockMode::Percentage,
            StoredLockMode::LockedAmount => LockMode::Amount {
                locked_amount: round2(record.locked_amount.unwrap_or(0.0).max(0.0)),
            },
        };
        let percentage = if record.percentage.is_finite() {
            round1(record.percentage.clamp(0.0, 100.0))
        } else {
            0.0
        };

        Self {
            id: record.id,
            name: record.name,
            percentage,
            color: record.color,
            icon: migrate_icon(&record.icon),
            lock,
            inactive: record.inactive,
        }
    }
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        let (lock_mode, locked_amount) = match category.lock {
            LockMode::Free => (StoredLockMode::Free, None),
            LockMode::Percentage => (StoredLockMode::LockedPercentage, None),
            LockMode::Amount { locked_amount } => {
                (StoredLockMode::LockedAmount, Some(locked_amount))
            }
        };

        Self {
            id: category.id,
            name: category.name,
            percentage: category.percentage,
            color: category.color,
            icon: category.icon.as_str().to_string(),
            lock_mode,
            locked_amount,
            inactive: category.inactive,
        }
    }
}
