//! Strongly-typed identifiers and validation errors used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identity and field-level constraints are visible at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when a category's fields violate a field-level invariant.
///
/// One variant per rule; the first failing check in the canonical order is
/// reported and failures are never aggregated. The messages are fixed and
/// collaborators translate them into their own external representations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name was absent, empty, or whitespace-only.
    #[error("Name should not be empty or null")]
    NameEmpty,
    /// No description was supplied; the empty string is fine, absence is not.
    #[error("Description should not be null")]
    DescriptionMissing,
    /// The name fell short of the minimum length.
    #[error("Name should have at least 3 characters")]
    NameTooShort,
    /// The name exceeded the maximum length.
    #[error("Name should have at most 255 characters")]
    NameTooLong,
    /// The description exceeded the maximum length.
    #[error("Description should have at most 10.000 characters")]
    DescriptionTooLong,
}

/// Unique identifier for a category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Wraps an existing identifier.
    pub const fn new(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the raw `Uuid` backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<Uuid> for CategoryId {
    fn eq(&self, other: &Uuid) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CategoryId> for Uuid {
    fn eq(&self, other: &CategoryId) -> bool {
        *self == other.0
    }
}
