//! Light/dark switch in the page header.

use leptos::prelude::*;

use crate::util::theme::{LocalStorage, Theme, ThemeController};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let controller = ThemeController::new(LocalStorage);

    view! {
        <label class="theme-switch" title="Toggle dark mode">
            <input
                id="theme-toggle"
                type="checkbox"
                prop:checked=move || theme.get().is_dark()
                on:change=move |ev| theme.set(controller.toggle(event_target_checked(&ev)))
            />
            <span class="slider"></span>
        </label>
    }
}
