use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::RecipeInput;
use crate::state::form::FormMode;

// =============================================================
// Fake API
// =============================================================

/// In-memory recipe API with immediate consistency.
#[derive(Default)]
struct FakeRecipeApi {
    recipes: RefCell<Vec<Recipe>>,
    next_id: Cell<u32>,
    fail_with: RefCell<Option<ApiError>>,
    deletes: RefCell<Vec<(RecipeId, String)>>,
    calls: Cell<u32>,
    /// Holds the next create open until the sender fires.
    create_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeRecipeApi {
    fn seeded(recipes: Vec<Recipe>) -> Self {
        let api = Self::default();
        api.next_id.set(u32::try_from(recipes.len()).unwrap());
        *api.recipes.borrow_mut() = recipes;
        api
    }

    fn fail_next(&self, err: ApiError) {
        *self.fail_with.borrow_mut() = Some(err);
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_with.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn position(&self, id: &RecipeId) -> Result<usize, ApiError> {
        self.recipes
            .borrow()
            .iter()
            .position(|r| &r.id == id)
            .ok_or(ApiError::Status { status: 404 })
    }
}

impl RecipeApi for FakeRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.take_failure()?;
        Ok(self.recipes.borrow().clone())
    }

    async fn create_recipe(&self, input: &RecipeInput) -> Result<(), ApiError> {
        self.take_failure()?;
        let gate = self.create_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.recipes.borrow_mut().push(recipe_from(&format!("r{id}"), input));
        Ok(())
    }

    async fn update_recipe(&self, id: &RecipeId, input: &RecipeInput) -> Result<(), ApiError> {
        self.take_failure()?;
        let idx = self.position(id)?;
        let mut recipes = self.recipes.borrow_mut();
        let course = recipes[idx].course.clone();
        recipes[idx] = Recipe { course, ..recipe_from(id.as_str(), input) };
        Ok(())
    }

    async fn delete_recipe(&self, id: &RecipeId, course: &str) -> Result<(), ApiError> {
        self.take_failure()?;
        let idx = self.position(id)?;
        if self.recipes.borrow()[idx].course != course {
            return Err(ApiError::Status { status: 404 });
        }
        self.recipes.borrow_mut().remove(idx);
        self.deletes.borrow_mut().push((id.clone(), course.to_owned()));
        Ok(())
    }
}

// =============================================================
// Helpers
// =============================================================

fn recipe_from(id: &str, input: &RecipeInput) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        name: input.name.clone(),
        course: input.course.clone(),
        ingredients: input.ingredients.clone(),
        instructions: input.instructions.clone(),
    }
}

fn make_recipe(id: &str, name: &str, course: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        name: name.to_owned(),
        course: course.to_owned(),
        ingredients: format!("{name} ingredients"),
        instructions: format!("{name} instructions"),
    }
}

type TestBook = RecipeBook<FakeRecipeApi, Rc<RefCell<BookState>>>;

fn make_book(recipes: Vec<Recipe>) -> TestBook {
    RecipeBook::new(FakeRecipeApi::seeded(recipes), Rc::new(RefCell::new(BookState::default())))
}

fn state(book: &TestBook) -> BookState {
    book.store().borrow().clone()
}

fn fill(book: &TestBook, name: &str, course: &str) {
    book.set_field(Field::Name, name.to_owned());
    book.set_field(Field::Course, course.to_owned());
    book.set_field(Field::Ingredients, "salt".to_owned());
    book.set_field(Field::Instructions, "Season.".to_owned());
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_loads_full_list_in_server_order() {
    let book = make_book(vec![make_recipe("a", "Tacos", "Dinner"), make_recipe("b", "Oats", "Breakfast")]);
    assert!(block_on(book.refresh()));

    let s = state(&book);
    assert!(!s.loading);
    let ids: Vec<_> = s.recipes.iter().map(|r| r.id.as_str().to_owned()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn refresh_failure_keeps_previous_list() {
    let book = make_book(vec![make_recipe("a", "Tacos", "Dinner")]);
    block_on(book.refresh());
    book.api().fail_next(ApiError::Parse("expected array".to_owned()));

    assert!(!block_on(book.refresh()));
    let s = state(&book);
    assert_eq!(s.recipes.len(), 1);
    assert!(!s.loading);
}

// =============================================================
// submit: create
// =============================================================

#[test]
fn submit_create_adds_record_and_clears_form() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner")]);
    block_on(book.refresh());
    fill(&book, "Lemonade", "Drinks");

    assert!(block_on(book.submit()));

    let s = state(&book);
    assert_eq!(s.form.mode, FormMode::Create);
    assert!(s.form.fields.is_empty());
    assert!(!s.pending);
    let created = s.recipes.iter().find(|r| r.name == "Lemonade").expect("new recipe listed");
    assert_eq!(created.course, "Drinks");
    assert_eq!(created.ingredients, "salt");
    assert_eq!(created.instructions, "Season.");
    assert_eq!(s.recipes.len(), 2);
}

#[test]
fn submit_with_empty_required_field_sends_nothing() {
    let book = make_book(Vec::new());
    book.set_field(Field::Name, "Half a recipe".to_owned());

    assert!(!block_on(book.submit()));
    assert_eq!(book.api().calls.get(), 0);
    assert_eq!(state(&book).form.fields.name, "Half a recipe");
}

#[test]
fn submit_create_failure_leaves_form_untouched() {
    let book = make_book(Vec::new());
    fill(&book, "Lemonade", "Drinks");
    book.api().fail_next(ApiError::Status { status: 500 });

    assert!(!block_on(book.submit()));

    let s = state(&book);
    assert_eq!(s.form.fields.name, "Lemonade");
    assert!(!s.pending);
    assert!(s.recipes.is_empty());
    assert!(book.api().recipes.borrow().is_empty());
}

// =============================================================
// submit: update
// =============================================================

#[test]
fn submit_update_rewrites_record_and_returns_to_create() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner"), make_recipe("r2", "Oats", "Breakfast")]);
    block_on(book.refresh());
    let target = state(&book).recipes[0].clone();

    book.start_edit(&target);
    book.set_field(Field::Name, "Fish Tacos".to_owned());
    book.set_field(Field::Course, "Lunch".to_owned());
    book.set_field(Field::Instructions, "Grill the fish.".to_owned());
    assert!(block_on(book.submit()));

    let s = state(&book);
    assert_eq!(s.form.mode, FormMode::Create);
    assert!(s.form.fields.is_empty());
    let updated = s.recipes.iter().find(|r| r.id == target.id).unwrap();
    assert_eq!(updated.name, "Fish Tacos");
    assert_eq!(updated.course, "Dinner");
    assert_eq!(updated.instructions, "Grill the fish.");
    assert_eq!(updated.ingredients, target.ingredients);
    assert_eq!(s.recipes.len(), 2);
}

#[test]
fn submit_update_of_unknown_id_stays_in_edit_mode() {
    let book = make_book(Vec::new());
    book.start_edit(&make_recipe("ghost", "Ghost", "Dinner"));

    assert!(!block_on(book.submit()));

    let s = state(&book);
    assert_eq!(s.form.editing_id(), Some(&RecipeId::new("ghost")));
    assert_eq!(s.form.fields.name, "Ghost");
}

// =============================================================
// cancel
// =============================================================

#[test]
fn cancel_clears_edit_session() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner")]);
    block_on(book.refresh());
    let target = state(&book).recipes[0].clone();
    book.start_edit(&target);
    book.cancel();

    let s = state(&book);
    assert_eq!(s.form.mode, FormMode::Create);
    assert!(s.form.fields.is_empty());
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_record_and_sends_course() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner"), make_recipe("r2", "Oats", "Breakfast")]);
    block_on(book.refresh());

    assert!(block_on(book.delete(&RecipeId::new("r1"), "Dinner")));

    let s = state(&book);
    assert!(s.recipes.iter().all(|r| r.id.as_str() != "r1"));
    assert_eq!(s.recipes.len(), 1);
    assert_eq!(*book.api().deletes.borrow(), vec![(RecipeId::new("r1"), "Dinner".to_owned())]);
}

#[test]
fn delete_of_edit_target_resets_form() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner")]);
    block_on(book.refresh());
    let target = state(&book).recipes[0].clone();
    book.start_edit(&target);

    assert!(block_on(book.delete(&target.id, &target.course)));

    let s = state(&book);
    assert_eq!(s.form.mode, FormMode::Create);
    assert!(s.form.fields.is_empty());
    assert!(s.recipes.is_empty());
}

#[test]
fn delete_of_other_record_keeps_edit_session() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner"), make_recipe("r2", "Oats", "Breakfast")]);
    block_on(book.refresh());
    let target = state(&book).recipes[0].clone();
    book.start_edit(&target);

    assert!(block_on(book.delete(&RecipeId::new("r2"), "Breakfast")));

    let s = state(&book);
    assert_eq!(s.form.editing_id(), Some(&target.id));
    assert_eq!(s.form.fields.name, "Tacos");
}

#[test]
fn delete_failure_keeps_list_and_form() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner")]);
    block_on(book.refresh());
    let target = state(&book).recipes[0].clone();
    book.start_edit(&target);
    book.api().fail_next(ApiError::Request("offline".to_owned()));

    assert!(!block_on(book.delete(&target.id, &target.course)));

    let s = state(&book);
    assert_eq!(s.recipes.len(), 1);
    assert_eq!(s.form.editing_id(), Some(&target.id));
    assert!(!s.pending);
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn delete_is_rejected_while_create_is_in_flight() {
    let book = make_book(vec![make_recipe("r1", "Tacos", "Dinner")]);
    fill(&book, "Lemonade", "Drinks");
    let (release, gate) = oneshot::channel();
    *book.api().create_gate.borrow_mut() = Some(gate);

    let (submitted, deleted) = block_on(async {
        futures::join!(book.submit(), async {
            let deleted = book.delete(&RecipeId::new("r1"), "Dinner").await;
            let _ = release.send(());
            deleted
        })
    });

    assert!(submitted);
    assert!(!deleted);
    assert!(book.api().deletes.borrow().is_empty());
    // create + refresh; the delete never reached the API.
    assert_eq!(book.api().calls.get(), 2);
    let after = state(&book);
    assert!(!after.pending);
    let names: Vec<_> = after.recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Tacos", "Lemonade"]);
}

#[test]
fn second_submit_is_rejected_while_first_is_in_flight() {
    let book = make_book(Vec::new());
    fill(&book, "Lemonade", "Drinks");
    let (release, gate) = oneshot::channel();
    *book.api().create_gate.borrow_mut() = Some(gate);

    let (first, second) = block_on(async {
        futures::join!(book.submit(), async {
            let second = book.submit().await;
            let _ = release.send(());
            second
        })
    });

    assert!(first);
    assert!(!second);
    assert_eq!(book.api().recipes.borrow().len(), 1);
    assert!(!state(&book).pending);
}
