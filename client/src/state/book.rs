//! Recipe list + form orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RecipeBook` turns user actions into API calls and keeps [`BookState`]
//! consistent with the server: every successful mutation is followed by a
//! full refetch, and the form only transitions once the mutation succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and the action is abandoned, leaving state exactly as
//! it was before the call. Nothing is retried.
//!
//! CONCURRENCY
//! ===========
//! Runs on the browser event loop. State is read and written through
//! [`BookStore`] in short closures, so no borrow is held across an await.
//! Only one mutation may be in flight; a second submit or delete while one is
//! pending is dropped.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::form::{Field, FormState, Submission};
use crate::net::api::RecipeApi;
use crate::net::types::{Recipe, RecipeId};

/// Everything the recipe page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookState {
    pub form: FormState,
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    /// A create, update, or delete is awaiting the server.
    pub pending: bool,
}

/// Storage for [`BookState`].
pub trait BookStore {
    fn with_book<R>(&self, f: impl FnOnce(&BookState) -> R) -> R;
    fn update_book(&self, f: impl FnOnce(&mut BookState));
}

impl BookStore for RwSignal<BookState> {
    fn with_book<R>(&self, f: impl FnOnce(&BookState) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }

    fn update_book(&self, f: impl FnOnce(&mut BookState)) {
        Update::update(self, f);
    }
}

impl BookStore for RefCell<BookState> {
    fn with_book<R>(&self, f: impl FnOnce(&BookState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_book(&self, f: impl FnOnce(&mut BookState)) {
        f(&mut self.borrow_mut());
    }
}

impl<T: BookStore> BookStore for Rc<T> {
    fn with_book<R>(&self, f: impl FnOnce(&BookState) -> R) -> R {
        (**self).with_book(f)
    }

    fn update_book(&self, f: impl FnOnce(&mut BookState)) {
        (**self).update_book(f);
    }
}

/// Orchestrates the recipe API against page state.
#[derive(Clone, Copy, Debug)]
pub struct RecipeBook<A, S> {
    api: A,
    store: S,
}

impl<A: RecipeApi, S: BookStore> RecipeBook<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Replace the list with a fresh `GET /api/recipes`.
    ///
    /// Returns `false` if the fetch failed; the previous list is kept.
    pub async fn refresh(&self) -> bool {
        self.store.update_book(|b| b.loading = true);
        match self.api.list_recipes().await {
            Ok(recipes) => {
                log::debug!("fetched {} recipes", recipes.len());
                self.store.update_book(|b| {
                    b.recipes = recipes;
                    b.loading = false;
                });
                true
            }
            Err(e) => {
                log::error!("Could not fetch recipes: {e}");
                self.store.update_book(|b| b.loading = false);
                false
            }
        }
    }

    pub fn start_edit(&self, recipe: &Recipe) {
        self.store.update_book(|b| b.form.start_edit(recipe));
    }

    pub fn cancel(&self) {
        self.store.update_book(|b| b.form.cancel());
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.store.update_book(|b| b.form.set_field(field, value));
    }

    /// Create or update from the form, then refetch.
    ///
    /// Create success clears the inputs; update success also leaves edit
    /// mode. Returns `false` if nothing was written.
    pub async fn submit(&self) -> bool {
        let Some(submission) = self.store.with_book(|b| b.form.submission()) else {
            log::warn!("submit ignored: required field is empty");
            return false;
        };
        if !self.begin_mutation() {
            return false;
        }

        let written = match &submission {
            Submission::Create(input) => match self.api.create_recipe(input).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Could not add recipe: {e}");
                    false
                }
            },
            Submission::Update(id, input) => match self.api.update_recipe(id, input).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Could not update recipe {id}: {e}");
                    false
                }
            },
        };

        self.store.update_book(|b| {
            b.pending = false;
            if written {
                match submission {
                    Submission::Create(_) => b.form.clear_fields(),
                    Submission::Update(..) => b.form.cancel(),
                }
            }
        });
        if written {
            self.refresh().await;
        }
        written
    }

    /// Delete `id`, then refetch.
    ///
    /// If `id` was the edit target the form drops back to create mode, so a
    /// later submit cannot update a record that no longer exists.
    pub async fn delete(&self, id: &RecipeId, course: &str) -> bool {
        if !self.begin_mutation() {
            return false;
        }
        let result = self.api.delete_recipe(id, course).await;
        let deleted = result.is_ok();
        self.store.update_book(|b| {
            b.pending = false;
            if deleted && b.form.editing_id() == Some(id) {
                b.form.cancel();
            }
        });
        match result {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                log::error!("Could not delete recipe {id}: {e}");
                false
            }
        }
    }

    fn begin_mutation(&self) -> bool {
        let mut started = false;
        self.store.update_book(|b| {
            if !b.pending {
                b.pending = true;
                started = true;
            }
        });
        if !started {
            log::warn!("recipe change already in flight; ignoring");
        }
        started
    }
}
