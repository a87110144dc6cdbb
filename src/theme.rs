//! Theme preference values and the literals shared with the page.
//!
//! The stored preference is a plain string. Only the exact value `"dark"`
//! selects the dark theme; anything else, including an absent entry, reads as
//! light.

use std::fmt;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the preference.
pub const STORAGE_KEY: &str = "theme";

/// Class added to the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Element id of the checkbox that drives the theme.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal persisted for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Total: unknown values fall back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme selected by the toggle's checked state.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
