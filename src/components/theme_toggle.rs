//! Theme toggle checkbox.

use leptos::prelude::*;

use crate::theme::TOGGLE_ID;

#[cfg(all(test, feature = "ssr"))]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Checkbox the controller binds to, unchecked as rendered.
///
/// The controller checks it on load when the stored theme is dark and
/// listens for its `change` events. Pages that override `toggle_id` in
/// `#theme-config` pass the same id here.
#[component]
pub fn ThemeToggle(
    /// Visible label text.
    #[prop(into, optional)]
    label: Option<String>,
    /// Element id of the checkbox; defaults to `theme-toggle`.
    #[prop(into, optional)]
    toggle_id: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Dark mode".to_owned());
    let toggle_id = toggle_id.unwrap_or_else(|| TOGGLE_ID.to_owned());

    view! {
        <label class="theme-switch" for=toggle_id.clone()>
            <input type="checkbox" id=toggle_id.clone() class="theme-switch__input"/>
            <span class="theme-switch__label">{label}</span>
        </label>
    }
}
