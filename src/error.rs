//! Error types for preference storage and browser binding.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to persist the preference.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage is disabled or not exposed by the host.
    #[error("preference storage unavailable")]
    Unavailable,
    /// The host rejected the write (quota, privacy mode).
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Failure to bind the controller to the page.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    /// An element the controller needs is not in the page.
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("invalid theme config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
