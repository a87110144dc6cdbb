//! Browser wiring for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs at WASM start. Binding waits for `DOMContentLoaded` when the document
//! is still loading; a module that starts after that event binds immediately.
//! The change listener owns the controller for the rest of the page lifetime.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
#[cfg(feature = "hydrate")]
use crate::controller::ThemeController;
#[cfg(feature = "hydrate")]
use crate::error::ThemeError;
#[cfg(feature = "hydrate")]
use crate::store::LocalStore;
#[cfg(feature = "hydrate")]
use crate::surface::{DomSurface, ThemeSurface};

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
type DomController = ThemeController<LocalStore, DomSurface>;

/// Whether a document in `ready_state` already has its structure parsed.
///
/// Only `"loading"` means `DOMContentLoaded` is still to come; `"interactive"`
/// and `"complete"` are both past it.
#[must_use]
pub fn content_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Bind the controller once the page's structure is available.
///
/// # Errors
///
/// Returns [`ThemeError`] if there is no document, or if the page is already
/// loaded and binding fails.
#[cfg(feature = "hydrate")]
pub fn install() -> Result<(), ThemeError> {
    let document = document()?;
    if !content_ready(&document.ready_state()) {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = bind() {
                log::error!("theme toggle not bound: {err}");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.unchecked_ref::<js_sys::Function>(),
        )?;
        return Ok(());
    }
    bind()
}

#[cfg(feature = "hydrate")]
fn document() -> Result<web_sys::Document, ThemeError> {
    web_sys::window()
        .ok_or(ThemeError::MissingWindow)?
        .document()
        .ok_or(ThemeError::MissingDocument)
}

/// Page config from `#theme-config`, or defaults when the element is absent.
#[cfg(feature = "hydrate")]
fn read_config(document: &web_sys::Document) -> Result<ThemeConfig, ThemeError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) => ThemeConfig::from_json(&raw),
        None => Ok(ThemeConfig::default()),
    }
}

#[cfg(feature = "hydrate")]
fn bind() -> Result<(), ThemeError> {
    let document = document()?;
    let config = read_config(&document)?;
    let surface = DomSurface::locate(&document, &config)?;
    let toggle = surface.toggle().clone();

    let mut controller = ThemeController::new(config, LocalStore::open(), surface);
    let theme = controller.initialize();
    log::info!("theme toggle bound, initial theme {theme}");

    let controller: Rc<RefCell<DomController>> = Rc::new(RefCell::new(controller));
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let mut controller = controller.borrow_mut();
        let checked = controller.surface().toggle_checked();
        controller.on_change(checked);
    });
    toggle.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}
