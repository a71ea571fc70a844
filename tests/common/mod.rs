//! Helpers for integration tests.

use catalog_domain::domain::category::Category;

pub const VALID_NAME: &str = "Movie";
pub const VALID_DESCRIPTION: &str = "Feature films";

/// A freshly constructed active category with valid fields.
pub fn sample_category() -> Category {
    Category::new(VALID_NAME, Some(VALID_DESCRIPTION)).expect("valid category")
}
