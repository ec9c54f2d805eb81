//! The paycheck being divided
//!
//! Kept as the text the user typed (that is also how it is saved) and parsed
//! on demand. Zero means "no amount entered".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{parse_amount, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "StoredPaycheck")]
pub struct Paycheck(String);

/// Saves normally hold the typed text, but a bare number is accepted too
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPaycheck {
    Text(String),
    Number(f64),
}

impl From<StoredPaycheck> for Paycheck {
    fn from(stored: StoredPaycheck) -> Self {
        match stored {
            StoredPaycheck::Text(text) => Self(text),
            StoredPaycheck::Number(n) => Self(n.to_string()),
        }
    }
}

impl From<Paycheck> for String {
    fn from(paycheck: Paycheck) -> Self {
        paycheck.0
    }
}

impl Paycheck {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Unset paycheck
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Parsed amount; invalid or negative text counts as 0
    pub fn amount(&self) -> f64 {
        parse_amount(&self.0)
    }

    /// Whether a positive amount has been entered
    pub fn is_set(&self) -> bool {
        self.amount() > 0.0
    }

    pub fn as_money(&self) -> Money {
        Money::from_dollars(self.amount())
    }
}

impl fmt::Display for Paycheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}", self.as_money())
        } else {
            write!(f, "--")
        }
    }
}
