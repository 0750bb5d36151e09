//! Recipe records, categories, and the identifiers that key them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminator tag naming which registered handler understands a recipe
/// record. Replaces runtime-type dispatch: every recipe carries its kind
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeKind(String);

impl RecipeKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a recipe category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a container/inventory screen currently open on the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A class of recipes sharing one handling mechanism (e.g. one crafting
/// station type). Compared by id; the title is display-only.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct RecipeCategory {
    pub id: CategoryId,
    pub title: String,
}

impl RecipeCategory {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
        }
    }
}

impl PartialEq for RecipeCategory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// An opaque recipe record: a kind tag plus a host-defined payload.
///
/// The controller never interprets the payload; registered
/// [`RecipeHandler`](crate::traits::RecipeHandler)s do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub kind: RecipeKind,
    pub data: Value,
}

impl Recipe {
    pub fn new(kind: RecipeKind, data: Value) -> Self {
        Self { kind, data }
    }
}
