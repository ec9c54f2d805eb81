//! Category icons
//!
//! Icons are stored by canonical identifier (`"home"`, `"cart"`, ...). Older
//! saves stored the emoji glyph itself; [`migrate_icon`] maps those through
//! the legacy alias table and falls back to [`Icon::Sparkles`].

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_icons {
    ($($variant:ident => $id:literal, $glyph:literal;)+) => {
        /// A canonical category icon
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "String", from = "String")]
        pub enum Icon {
            $($variant,)+
        }

        impl Icon {
            /// Every icon, in picker order
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)+];

            /// Canonical identifier
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $id,)+
                }
            }

            /// Emoji glyph for display
            pub fn glyph(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $glyph,)+
                }
            }

            /// Look up a canonical identifier
            pub fn from_canonical(raw: &str) -> Option<Self> {
                match raw {
                    $($id => Some(Icon::$variant),)+
                    _ => None,
                }
            }

            /// Look up a legacy emoji glyph (variation selectors ignored)
            pub fn from_legacy(raw: &str) -> Option<Self> {
                let bare: String = raw.chars().filter(|c| *c != '\u{FE0F}').collect();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|icon| icon.glyph().replace('\u{FE0F}', "") == bare)
            }
        }
    };
}

define_icons! {
    Bank => "bank", "🏛️";
    Clipboard => "clipboard", "📋";
    Home => "home", "🏠";
    Cart => "cart", "🛒";
    MoneyBag => "money-bag", "💰";
    Hospital => "hospital", "🏥";
    Baby => "baby", "👶";
    Backpack => "backpack", "🎒";
    Sparkles => "sparkles", "✨";
    Car => "car", "🚗";
    Pizza => "pizza", "🍕";
    Pill => "pill", "💊";
    Phone => "phone", "📱";
    Game => "game", "🎮";
    Plane => "plane", "✈️";
    Graduation => "graduation", "🎓";
    Paw => "paw", "🐾";
    Weights => "weights", "🏋️";
    Music => "music", "🎵";
    Books => "books", "📚";
    Laptop => "laptop", "💻";
    Dress => "dress", "👗";
    Haircut => "haircut", "💇";
    Beach => "beach", "🏖️";
    Beer => "beer", "🍺";
    Coffee => "coffee", "☕";
    Gift => "gift", "🎁";
    Wrench => "wrench", "🔧";
    Herb => "herb", "🌿";
    PiggyBank => "piggy-bank", "🏦";
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Sparkles
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.as_str().to_string()
    }
}

impl From<String> for Icon {
    fn from(raw: String) -> Self {
        migrate_icon(&raw)
    }
}

/// Resolve a stored icon field to a canonical icon
///
/// Canonical identifiers pass through, legacy glyphs are aliased, anything
/// else becomes the default icon.
pub fn migrate_icon(raw: &str) -> Icon {
    let raw = raw.trim();
    Icon::from_canonical(raw)
        .or_else(|| Icon::from_legacy(raw))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_passthrough() {
        for icon in Icon::ALL {
            assert_eq!(migrate_icon(icon.as_str()), *icon);
        }
        assert_eq!(Icon::ALL.len(), 30);
    }

    #[test]
    fn test_legacy_glyphs() {
        assert_eq!(migrate_icon("🏠"), Icon::Home);
        assert_eq!(migrate_icon("🏛️"), Icon::Bank);
        // Same glyph saved without the variation selector
        assert_eq!(migrate_icon("\u{1F3DB}"), Icon::Bank);
        assert_eq!(migrate_icon("🏦"), Icon::PiggyBank);
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(migrate_icon("🦄"), Icon::Sparkles);
        assert_eq!(migrate_icon(""), Icon::Sparkles);
        assert_eq!(migrate_icon("HOME"), Icon::Sparkles);
    }

    #[test]
    fn test_serde_uses_canonical_id() {
        let json = serde_json::to_string(&Icon::MoneyBag).unwrap();
        assert_eq!(json, "\"money-bag\"");
        let icon: Icon = serde_json::from_str("\"🛒\"").unwrap();
        assert_eq!(icon, Icon::Cart);
    }
}
