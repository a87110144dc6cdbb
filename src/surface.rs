//! Visual state the controller drives: the root element's dark marker and the
//! toggle's checked state.
//!
//! DESIGN
//! ======
//! The controller only talks to [`ThemeSurface`], so its logic runs the same
//! against the live DOM and against [`HeadlessSurface`] in native tests.

use std::collections::BTreeSet;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::config::ThemeConfig;
#[cfg(feature = "hydrate")]
use crate::error::ThemeError;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Root marker set and toggle state of a page.
pub trait ThemeSurface {
    /// Add (`true`) or remove (`false`) the dark marker on the root element.
    fn set_dark_marker(&mut self, present: bool);

    fn has_dark_marker(&self) -> bool;

    fn set_toggle_checked(&mut self, checked: bool);

    fn toggle_checked(&self) -> bool;
}

/// Surface without a DOM: a root class set and a checkbox flag. Starts in the
/// page's default state, no marker and toggle unchecked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlessSurface {
    dark_class: String,
    classes: BTreeSet<String>,
    checked: bool,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

impl HeadlessSurface {
    /// Surface using the marker class named by `config`.
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self { dark_class: config.dark_class.clone(), classes: BTreeSet::new(), checked: false }
    }

    /// Root element classes, sorted.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ThemeSurface for HeadlessSurface {
    fn set_dark_marker(&mut self, present: bool) {
        if present {
            self.classes.insert(self.dark_class.clone());
        } else {
            self.classes.remove(&self.dark_class);
        }
    }

    fn has_dark_marker(&self) -> bool {
        self.classes.contains(&self.dark_class)
    }

    fn set_toggle_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn toggle_checked(&self) -> bool {
        self.checked
    }
}

/// The document's root element and the toggle `<input>`.
#[cfg(feature = "hydrate")]
pub struct DomSurface {
    root: web_sys::Element,
    toggle: web_sys::HtmlInputElement,
    dark_class: String,
}

#[cfg(feature = "hydrate")]
impl DomSurface {
    /// Find the root element and the toggle named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingElement`] if either element is absent or
    /// the toggle is not an `<input>`.
    pub fn locate(document: &web_sys::Document, config: &ThemeConfig) -> Result<Self, ThemeError> {
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::MissingElement("documentElement".to_owned()))?;
        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| ThemeError::MissingElement(format!("#{}", config.toggle_id)))?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| ThemeError::MissingElement(format!("input#{}", config.toggle_id)))?;
        Ok(Self { root, toggle, dark_class: config.dark_class.clone() })
    }

    /// The toggle element, for listener registration.
    #[must_use]
    pub fn toggle(&self) -> &web_sys::HtmlInputElement {
        &self.toggle
    }
}

#[cfg(feature = "hydrate")]
impl ThemeSurface for DomSurface {
    fn set_dark_marker(&mut self, present: bool) {
        let classes = self.root.class_list();
        let result = if present {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        if let Err(err) = result {
            log::warn!("failed to update root class {}: {err:?}", self.dark_class);
        }
    }

    fn has_dark_marker(&self) -> bool {
        self.root.class_list().contains(&self.dark_class)
    }

    fn set_toggle_checked(&mut self, checked: bool) {
        self.toggle.set_checked(checked);
    }

    fn toggle_checked(&self) -> bool {
        self.toggle.checked()
    }
}
