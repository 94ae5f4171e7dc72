use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a color theme.
///
/// The empty string is the default theme ("Sunny Breeze"). Identifiers are
/// deliberately not validated against the builtin set: an unknown identifier
/// is persisted and applied as-is, it simply matches no selector button and
/// has no builtin swatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

/// Marker used when comparing against the effective theme of a context that
/// has no explicit theme applied.
pub const DEFAULT_MARKER: &str = "default";

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default theme identifier (the empty string).
    pub fn default_theme() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty identifier, i.e. the default theme.
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-stop accent gradient of a theme, as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub start: &'static str,
    pub end: &'static str,
}

/// A builtin color theme: identifier, human-readable name and accent swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub display_name: &'static str,
    pub swatch: Swatch,
}

/// Builtin themes, in panel order. The first entry is the default theme,
/// keyed by the empty identifier.
pub const THEMES: &[Theme] = &[
    Theme {
        id: "",
        display_name: "Sunny Breeze",
        swatch: Swatch {
            start: "#32BFB9",
            end: "#F8D92E",
        },
    },
    Theme {
        id: "fresh-lime-green",
        display_name: "Fresh Lime Green",
        swatch: Swatch {
            start: "#44c59b",
            end: "#c8e6a0",
        },
    },
    Theme {
        id: "sunrise-horizon",
        display_name: "Sunrise Horizon",
        swatch: Swatch {
            start: "#F1BE25",
            end: "#98BCD5",
        },
    },
];

/// Look up a builtin theme by identifier.
pub fn builtin(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// The default theme entry.
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_default() {
        assert!(ThemeId::default_theme().is_default());
        assert!(ThemeId::from("").is_default());
        assert!(!ThemeId::from("sunrise-horizon").is_default());
    }

    #[test]
    fn default_theme_exists() {
        assert_eq!(builtin("").map(|t| t.display_name), Some("Sunny Breeze"));
        assert_eq!(default_theme().id, "");
    }

    #[test]
    fn builtin_lookup() {
        assert!(builtin("fresh-lime-green").is_some());
        assert!(builtin("sunrise-horizon").is_some());
        assert!(builtin("nonexistent").is_none());
    }

    #[test]
    fn unknown_ids_are_still_constructible() {
        let id = ThemeId::from("midnight-violet");
        assert_eq!(id.as_str(), "midnight-violet");
        assert!(builtin(id.as_str()).is_none());
    }
}
