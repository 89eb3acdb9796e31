//! Light/dark theme toggle.

use leptos::prelude::*;

use super::{ICON_MOON, ICON_SUN, Icon};

/// Button that flips the root `dark`/`light` class.
///
/// The click handler lives in the page script, keyed on
/// `data-role="theme-toggle"`; CSS shows the sun or the moon depending on
/// the active theme.
#[component]
pub fn ModeToggle() -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-ghost theme-toggle"
            data-role="theme-toggle"
            title="Toggle light/dark mode"
        >
            <span class="theme-icon-light"><Icon path=ICON_SUN size="20" /></span>
            <span class="theme-icon-dark"><Icon path=ICON_MOON size="20" /></span>
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
