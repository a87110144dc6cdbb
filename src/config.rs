//! Page-level configuration for the theme controller.
//!
//! Defaults match the literals the stylesheet and markup expect. A page may
//! override them with a JSON object; omitted fields keep their defaults.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::{DARK_CLASS, STORAGE_KEY, TOGGLE_ID};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when `raw` is not a JSON object
    /// with string fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
