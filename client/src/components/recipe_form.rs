//! Create/edit form for a single recipe.
//!
//! Mirrors [`FormState`](crate::state::form::FormState): title, submit label,
//! course lock, and cancel visibility all follow the current mode. Inputs
//! carry `required`, so the browser blocks empty submissions before the page
//! sees them.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::book::BookState;
use crate::state::form::Field;

#[component]
pub fn RecipeForm(
    on_field: Callback<(Field, String)>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let book = expect_context::<RwSignal<BookState>>();
    let value = move |field: Field| book.with(|b| b.form.fields.get(field).to_owned());
    let editing = move || book.with(|b| b.form.is_editing());

    view! {
        <form
            id="recipe-form"
            class="recipe-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h1 id="form-title">{move || book.with(|b| b.form.title())}</h1>
            <input
                id="name-input"
                type="text"
                placeholder="Recipe name"
                required=true
                prop:value=move || value(Field::Name)
                on:input=move |ev| on_field.run((Field::Name, event_target_value(&ev)))
            />
            <input
                id="course-input"
                type="text"
                placeholder="Course (e.g. Dinner)"
                required=true
                disabled=move || book.with(|b| b.form.course_locked())
                prop:value=move || value(Field::Course)
                on:input=move |ev| on_field.run((Field::Course, event_target_value(&ev)))
            />
            <textarea
                id="ingredients-input"
                placeholder="Ingredients"
                required=true
                prop:value=move || value(Field::Ingredients)
                on:input=move |ev| on_field.run((Field::Ingredients, event_target_value(&ev)))
            ></textarea>
            <textarea
                id="instructions-input"
                placeholder="Instructions"
                required=true
                prop:value=move || value(Field::Instructions)
                on:input=move |ev| on_field.run((Field::Instructions, event_target_value(&ev)))
            ></textarea>
            <div
                class="form-buttons"
                style:grid-template-columns=move || if editing() { "1fr 1fr" } else { "1fr" }
            >
                <button id="submit-btn" type="submit" disabled=move || book.with(|b| b.pending)>
                    {move || book.with(|b| b.form.submit_label())}
                </button>
                <button
                    id="cancel-edit-btn"
                    type="button"
                    class:hidden=move || !book.with(|b| b.form.cancel_visible())
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
