//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the recipe page while reading shared state from Leptos
//! context providers and reporting user actions through callbacks.

pub mod recipe_form;
pub mod recipe_list;
pub mod theme_toggle;
