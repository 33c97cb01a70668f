//! Recipe form mode and field values.
//!
//! DESIGN
//! ======
//! The form is either creating a new recipe or editing an existing one. The
//! edit target lives inside [`FormMode::Edit`], so an edit id can never exist
//! without edit mode. Course is locked while editing because the API uses it
//! to locate the record on delete.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Recipe, RecipeId, RecipeInput};

pub const TITLE_CREATE: &str = "My Recipe Book";
pub const TITLE_EDIT: &str = "Edit Recipe";
pub const SUBMIT_LABEL_CREATE: &str = "Add Recipe";
pub const SUBMIT_LABEL_EDIT: &str = "Update Recipe";

/// Whether submit creates a record or updates the one being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(RecipeId),
}

/// One of the four text inputs on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Course,
    Ingredients,
    Instructions,
}

/// Current contents of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub course: String,
    pub ingredients: String,
    pub instructions: String,
}

impl FormFields {
    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            course: recipe.course.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Course => &self.course,
            Field::Ingredients => &self.ingredients,
            Field::Instructions => &self.instructions,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Course => &mut self.course,
            Field::Ingredients => &mut self.ingredients,
            Field::Instructions => &mut self.instructions,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Same rule as the inputs' `required` attribute: any non-empty value passes.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.course.is_empty() && !self.ingredients.is_empty() && !self.instructions.is_empty()
    }

    pub fn to_input(&self) -> RecipeInput {
        RecipeInput {
            name: self.name.clone(),
            course: self.course.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

/// What pressing submit should do with the current form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(RecipeInput),
    Update(RecipeId, RecipeInput),
}

/// Form mode plus field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: FormFields,
}

impl FormState {
    /// Load `recipe` into the form and target it for update.
    pub fn start_edit(&mut self, recipe: &Recipe) {
        self.mode = FormMode::Edit(recipe.id.clone());
        self.fields = FormFields::from_recipe(recipe);
    }

    /// Leave edit mode and clear every input.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Create;
        self.fields = FormFields::default();
    }

    /// Clear the inputs without changing mode.
    pub fn clear_fields(&mut self) {
        self.fields = FormFields::default();
    }

    /// Apply user input. Edits to a locked course are dropped.
    pub fn set_field(&mut self, field: Field, value: String) {
        if field == Field::Course && self.course_locked() {
            return;
        }
        *self.fields.slot(field) = value;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&RecipeId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn course_locked(&self) -> bool {
        self.is_editing()
    }

    pub fn cancel_visible(&self) -> bool {
        self.is_editing()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { TITLE_EDIT } else { TITLE_CREATE }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { SUBMIT_LABEL_EDIT } else { SUBMIT_LABEL_CREATE }
    }

    /// The request submit would send, or `None` if a required field is empty.
    pub fn submission(&self) -> Option<Submission> {
        if !self.fields.is_complete() {
            return None;
        }
        let input = self.fields.to_input();
        Some(match &self.mode {
            FormMode::Create => Submission::Create(input),
            FormMode::Edit(id) => Submission::Update(id.clone(), input),
        })
    }
}
