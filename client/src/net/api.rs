//! REST client for the external recipe API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is single-shot with no retry and no timeout. Failures surface as
//! [`ApiError`] so the orchestrator can log and abandon the action without
//! touching UI state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Recipe, RecipeId, RecipeInput};
#[cfg(feature = "hydrate")]
use super::types::DeleteRecipeBody;

/// Collection endpoint for list and create.
pub const RECIPES_ENDPOINT: &str = "/api/recipes";

/// Errors produced by recipe API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never completed (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Called outside the browser.
    #[error("recipe API not available on server")]
    Unavailable,
}

impl ApiError {
    /// `true` for failures of the HTTP exchange itself rather than its payload.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Request(_))
    }
}

/// Operations the orchestrator needs from the recipe backend.
#[allow(async_fn_in_trait)]
pub trait RecipeApi {
    /// `GET /api/recipes`.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;

    /// `POST /api/recipes`.
    async fn create_recipe(&self, input: &RecipeInput) -> Result<(), ApiError>;

    /// `PUT /api/recipes/{id}`.
    async fn update_recipe(&self, id: &RecipeId, input: &RecipeInput) -> Result<(), ApiError>;

    /// `DELETE /api/recipes/{id}` with `{ "course": ... }` so the API can
    /// locate the record within its course partition.
    async fn delete_recipe(&self, id: &RecipeId, course: &str) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn recipe_endpoint(id: &RecipeId) -> String {
    format!("{RECIPES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status { status }) }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn request_failed(err: gloo_net::Error) -> ApiError {
    ApiError::Request(err.to_string())
}

/// Browser implementation of [`RecipeApi`] talking to the same origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRecipeApi;

impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(RECIPES_ENDPOINT)
                .send()
                .await
                .map_err(request_failed)?;
            check_status(resp.status())?;
            resp.json::<Vec<Recipe>>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_recipe(&self, input: &RecipeInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(RECIPES_ENDPOINT)
                .json(input)
                .map_err(request_failed)?
                .send()
                .await
                .map_err(request_failed)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_recipe(&self, id: &RecipeId, input: &RecipeInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&recipe_endpoint(id))
                .json(input)
                .map_err(request_failed)?
                .send()
                .await
                .map_err(request_failed)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, input);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_recipe(&self, id: &RecipeId, course: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = DeleteRecipeBody { course: course.to_owned() };
            let resp = gloo_net::http::Request::delete(&recipe_endpoint(id))
                .json(&body)
                .map_err(request_failed)?
                .send()
                .await
                .map_err(request_failed)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, course);
            Err(ApiError::Unavailable)
        }
    }
}
