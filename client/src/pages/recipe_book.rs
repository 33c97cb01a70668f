//! Recipe book page: form, card grid, and theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It builds a [`RecipeBook`] over the shared
//! [`BookState`] signal and routes every user action through it. On mount the
//! saved theme is applied first, then the initial list is fetched.

use leptos::prelude::*;

use crate::components::recipe_form::RecipeForm;
use crate::components::recipe_list::RecipeList;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::HttpRecipeApi;
use crate::net::types::{Recipe, RecipeId};
use crate::state::book::{BookState, RecipeBook};
use crate::state::form::Field;
use crate::util::theme::{LocalStorage, Theme, ThemeController};

#[component]
pub fn RecipeBookPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BookState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let book = RecipeBook::new(HttpRecipeApi, state);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        theme.set(ThemeController::new(LocalStorage).init());
        leptos::task::spawn_local(async move {
            book.refresh().await;
        });
    });

    let on_field = Callback::new(move |(field, value): (Field, String)| book.set_field(field, value));
    let on_submit = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            book.submit().await;
        });
    });
    let on_cancel = Callback::new(move |()| book.cancel());
    let on_edit = Callback::new(move |recipe: Recipe| {
        book.start_edit(&recipe);
        scroll_to_top();
    });
    let on_delete = Callback::new(move |(id, course): (RecipeId, String)| {
        leptos::task::spawn_local(async move {
            book.delete(&id, &course).await;
        });
    });

    let show_loading = Memo::new(move |_| state.with(|b| b.loading && b.recipes.is_empty()));

    view! {
        <div class="recipe-book-page">
            <header class="recipe-book-page__header">
                <ThemeToggle/>
            </header>
            <RecipeForm on_field=on_field on_submit=on_submit on_cancel=on_cancel/>
            <Show when=move || show_loading.get()>
                <p class="recipe-book-page__loading">"Loading recipes..."</p>
            </Show>
            <RecipeList on_edit=on_edit on_delete=on_delete/>
        </div>
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
