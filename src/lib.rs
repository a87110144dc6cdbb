//! # theme-toggle
//!
//! Light/dark theme switch for a web page, compiled to WebAssembly.
//!
//! On load the stored preference (`localStorage["theme"]`) is applied to the
//! `<html>` element and to the `#theme-toggle` checkbox; each change of the
//! checkbox updates the root's `dark` class and writes `"dark"` or `"light"`
//! back to storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` values and page literals |
//! | [`config`] | Storage key, marker class, toggle id |
//! | [`controller`] | Initialization and change handling |
//! | [`store`] | Preference storage (`localStorage`, in-memory) |
//! | [`surface`] | Root marker and toggle state (DOM, headless) |
//! | [`components`] | Leptos toggle markup |
//! | [`dom`] | Browser event wiring (listeners are `hydrate` only) |

pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod store;
pub mod surface;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{StoreError, ThemeError};
pub use theme::Theme;

/// WASM entry point: set up console logging and bind the toggle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    if let Err(err) = dom::install() {
        log::error!("theme toggle not installed: {err}");
    }
}
