//! Recipe card grid.
//!
//! DESIGN
//! ======
//! [`card_models`] projects the fetched list into display cards; the
//! components only turn those models into markup and wire the per-card edit
//! and delete buttons back to the page. The grid reads the list through a
//! [`Memo`], so form edits and pending/loading flips on the shared
//! [`BookState`] do not rebuild it. A changed list rebuilds the whole grid,
//! so nothing survives from a previous render.

#[cfg(test)]
#[path = "recipe_list_test.rs"]
mod recipe_list_test;

use leptos::prelude::*;

use crate::net::types::{Recipe, RecipeId};
use crate::state::book::BookState;

/// Cosmetic card backgrounds, assigned by position.
pub const CARD_PALETTE: [&str; 5] = ["card-color-1", "card-color-2", "card-color-3", "card-color-4", "card-color-5"];

/// Display model for one recipe card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeCardModel {
    pub recipe: Recipe,
    pub color_class: &'static str,
}

impl RecipeCardModel {
    pub fn class(&self) -> String {
        format!("recipe-card {}", self.color_class)
    }

    pub fn course_label(&self) -> String {
        format!("Course: {}", self.recipe.course)
    }
}

pub fn card_color(index: usize) -> &'static str {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

/// One card per recipe, in list order.
pub fn card_models(recipes: &[Recipe]) -> Vec<RecipeCardModel> {
    recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| RecipeCardModel { recipe: recipe.clone(), color_class: card_color(index) })
        .collect()
}

/// The recipe list alone; only notifies when the list itself changes.
pub fn recipe_source(book: RwSignal<BookState>) -> Memo<Vec<Recipe>> {
    Memo::new(move |_| book.with(|b| b.recipes.clone()))
}

/// The recipe grid, rendered from the shared [`BookState`].
#[component]
pub fn RecipeList(on_edit: Callback<Recipe>, on_delete: Callback<(RecipeId, String)>) -> impl IntoView {
    let recipes = recipe_source(expect_context::<RwSignal<BookState>>());

    view! {
        <div id="recipe-list" class="recipe-list">
            {move || {
                recipes
                    .with(|r| card_models(r))
                    .into_iter()
                    .map(|card| view! { <RecipeCard card=card on_edit=on_edit on_delete=on_delete/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn RecipeCard(
    card: RecipeCardModel,
    on_edit: Callback<Recipe>,
    on_delete: Callback<(RecipeId, String)>,
) -> impl IntoView {
    let class = card.class();
    let course_label = card.course_label();
    let recipe = card.recipe;
    let Recipe { id, name, course, ingredients, instructions } = recipe.clone();

    view! {
        <div class=class>
            <div class="card-header">
                <h3>{name}</h3>
                <small>{course_label}</small>
            </div>
            <div class="card-body">
                <h4>"Ingredients"</h4>
                <pre>{ingredients}</pre>
                <h4>"Instructions"</h4>
                <pre>{instructions}</pre>
            </div>
            <div class="card-footer">
                <button class="edit-btn" on:click=move |_| on_edit.run(recipe.clone())>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run((id.clone(), course.clone()))>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
