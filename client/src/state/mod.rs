//! Client-side state for the recipe page.
//!
//! DESIGN
//! ======
//! `form` is the create/edit state machine; `book` owns the list and form
//! together and keeps them in step with the API.

pub mod book;
pub mod form;
