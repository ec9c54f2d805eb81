//! Category identifiers
//!
//! New ids are random v4 UUIDs, so two categories created in the same session
//! never collide. Ids read back from older saves may be arbitrary strings
//! (`"1"`, `"1718036410123"`), which is why the wrapper holds a `String`
//! rather than a `Uuid`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "cat-";

/// Opaque, immutable category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier (legacy saves, tests)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the underlying identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in tables: `cat-` plus the first 8 characters
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}{}", DISPLAY_PREFIX, head)
    }

    /// Check whether user input refers to this id
    ///
    /// Accepts the full id, the short form, or any prefix of at least four
    /// characters (with or without the `cat-` prefix).
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input == self.0 {
            return true;
        }
        let input = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(input);
        input == self.0 || (input.len() >= 4 && self.0.starts_with(input))
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}
