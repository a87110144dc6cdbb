//! Theme preference controller.
//!
//! Applies the stored preference once the page is ready and persists every
//! change made through the toggle. After [`ThemeController::initialize`] and
//! after each [`ThemeController::on_change`], the root marker and the toggle's
//! checked state agree.
//!
//! An absent entry displays as light but is never written on load; the first
//! write happens on the first user interaction.

use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, U> {
    config: ThemeConfig,
    store: S,
    surface: U,
    theme: Theme,
}

impl<S: PreferenceStore, U: ThemeSurface> ThemeController<S, U> {
    pub fn new(config: ThemeConfig, store: S, surface: U) -> Self {
        Self { config, store, surface, theme: Theme::Light }
    }

    /// Read the stored preference and apply it.
    ///
    /// Only a stored `"dark"` touches the page; otherwise the default light
    /// state is left as rendered.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.store.load(&self.config.storage_key);
        let theme = Theme::from_stored(stored.as_deref());
        match stored.as_deref() {
            None => log::debug!("no stored theme, using {theme}"),
            Some(raw) => log::debug!("stored theme {raw:?} resolves to {theme}"),
        }
        if theme.is_dark() {
            self.surface.set_dark_marker(true);
            self.surface.set_toggle_checked(true);
        }
        self.theme = theme;
        theme
    }

    /// Handle a toggle change: apply the new state, then persist it.
    ///
    /// The toggle is set to `checked` as well, so callers other than the
    /// browser's own `change` event leave the page consistent.
    ///
    /// A failed write is logged; the visual state is still applied.
    pub fn on_change(&mut self, checked: bool) -> Theme {
        let theme = Theme::from_checked(checked);
        self.surface.set_dark_marker(theme.is_dark());
        self.surface.set_toggle_checked(checked);
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme {theme} not persisted: {err}");
        }
        log::debug!("theme changed to {theme}");
        self.theme = theme;
        theme
    }

    /// Theme currently applied.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Tear down, returning the store (e.g. to simulate a reload).
    pub fn into_store(self) -> S {
        self.store
    }
}
