//! Wire types for the external recipe API.
//!
//! DESIGN
//! ======
//! `Recipe` mirrors the JSON objects returned by `GET /api/recipes`;
//! `RecipeInput` is the body shape shared by create and update. The record id
//! is server-assigned and opaque, so it is normalized to a string whether the
//! API emits it as a JSON string or a number.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, server-assigned recipe identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(id) => Ok(Self(id)),
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(D::Error::custom(format!("expected string or number recipe id, got {other}"))),
        }
    }
}

/// A recipe record as stored by the external API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub name: String,
    /// Category; the API also uses it to locate the record on delete.
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// The editable fields of this record, as they would be resubmitted.
    pub fn input(&self) -> RecipeInput {
        RecipeInput {
            name: self.name.clone(),
            course: self.course.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

/// Request body for `POST /api/recipes` and `PUT /api/recipes/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    pub course: String,
    pub ingredients: String,
    pub instructions: String,
}

/// Request body for `DELETE /api/recipes/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteRecipeBody {
    pub course: String,
}
