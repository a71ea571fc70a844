use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregate::{AggregateRoot, Clock, IdProvider, RandomIdProvider, SystemClock};
use crate::domain::types::{CategoryId, ValidationError};

/// Minimum number of characters in a category name.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum number of characters in a category name.
pub const NAME_MAX_CHARS: usize = 255;
/// Maximum number of characters in a category description.
pub const DESCRIPTION_MAX_CHARS: usize = 10_000;

/// A classification tag in the media catalog.
///
/// Every state transition funnels through the same validation routine and a
/// rejected transition returns [`ValidationError`] while the entity keeps its
/// previous valid state. Identity and creation instant are assigned once at
/// construction and never change; callers sharing an instance must serialize
/// access themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    root: AggregateRoot<CategoryId>,
    name: String,
    description: String,
    is_active: bool,
}

impl Category {
    /// Creates an active category with a random identifier, stamped by the
    /// system clock.
    pub fn new(name: &str, description: Option<&str>) -> Result<Self, ValidationError> {
        Self::with_providers(&RandomIdProvider, &SystemClock, name, description, true)
    }

    /// Creates a category with an explicit active flag.
    pub fn with_active(
        name: &str,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::with_providers(&RandomIdProvider, &SystemClock, name, description, is_active)
    }

    /// Creates a category using the supplied identity and clock collaborators.
    ///
    /// The proposed field values are validated before anything is assigned:
    /// on a failing rule no category exists and no identifier is consumed.
    /// `None` for the description models an absent value and is rejected;
    /// `Some("")` is allowed.
    pub fn with_providers<I, C>(
        ids: &I,
        clock: &C,
        name: &str,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, ValidationError>
    where
        I: IdProvider,
        C: Clock,
    {
        let description = validate(name, description)?.to_string();

        Ok(Self {
            root: AggregateRoot::new(CategoryId::new(ids.next_id()), clock.now()),
            name: name.to_string(),
            description,
            is_active,
        })
    }

    /// Returns the identifier assigned at creation.
    pub fn id(&self) -> CategoryId {
        self.root.id()
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the category is currently active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the UTC instant the category was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.root.created_at()
    }

    /// Marks the category active.
    ///
    /// The field invariants are re-checked first; fields other than the flag
    /// are untouched by this call.
    pub fn activate(&mut self) -> Result<(), ValidationError> {
        self.set_active(true)
    }

    /// Marks the category inactive, with the same re-check as
    /// [`Self::activate`].
    pub fn deactivate(&mut self) -> Result<(), ValidationError> {
        self.set_active(false)
    }

    /// Replaces the name and, when supplied, the description.
    ///
    /// An absent description keeps the current value rather than failing. The
    /// proposed new state is validated before any field is written, so a
    /// rejected update leaves the category unchanged.
    pub fn update(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), ValidationError> {
        validate(name, Some(description.unwrap_or(self.description.as_str())))?;

        self.name = name.to_string();
        if let Some(description) = description {
            self.description = description.to_string();
        }
        Ok(())
    }

    fn set_active(&mut self, is_active: bool) -> Result<(), ValidationError> {
        validate(&self.name, Some(&self.description))?;

        self.is_active = is_active;
        Ok(())
    }
}

/// Checks a proposed name/description pair in the canonical rule order,
/// returning the description that passed.
///
/// Only the first failing rule is reported. Lengths are counted in characters,
/// not bytes, and trimming applies to the emptiness check only: the length
/// rules see the name exactly as supplied.
fn validate<'a>(name: &str, description: Option<&'a str>) -> Result<&'a str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    let description = description.ok_or(ValidationError::DescriptionMissing)?;

    let name_chars = name.chars().count();
    if name_chars < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if name_chars > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;
    use crate::domain::test::{FixedClock, FixedIds};

    fn creation_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
    }

    fn sample_with(id: Uuid) -> Category {
        Category::with_providers(
            &FixedIds(id),
            &FixedClock(creation_instant()),
            "Movie",
            Some("Feature films"),
            true,
        )
        .expect("valid category")
    }

    #[test]
    fn providers_determine_id_and_creation_instant() {
        let id = Uuid::new_v4();

        let category = sample_with(id);

        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), creation_instant());
    }

    #[test]
    fn no_identifier_is_consumed_when_construction_fails() {
        struct NoIds;

        impl IdProvider for NoIds {
            fn next_id(&self) -> Uuid {
                panic!("identifier requested for a rejected category");
            }
        }

        let result = Category::with_providers(
            &NoIds,
            &FixedClock(creation_instant()),
            "ab",
            Some("Feature films"),
            true,
        );

        assert_eq!(result.unwrap_err(), ValidationError::NameTooShort);
    }

    #[test]
    fn serializes_with_flattened_identity() {
        let id = Uuid::new_v4();
        let category = sample_with(id);

        let value = serde_json::to_value(&category).expect("serializable category");

        let id_text = id.to_string();
        assert_eq!(value["id"].as_str(), Some(id_text.as_str()));
        assert_eq!(value["name"].as_str(), Some("Movie"));
        assert_eq!(value["description"].as_str(), Some("Feature films"));
        assert_eq!(value["is_active"].as_bool(), Some(true));
        assert!(value.get("created_at").is_some());
        assert!(value.get("root").is_none());
    }

    #[test]
    fn rehydrates_from_its_serialized_form() {
        let id = Uuid::new_v4();
        let category = sample_with(id);

        let json = serde_json::to_string(&category).expect("serializable category");
        let restored: Category = serde_json::from_str(&json).expect("stored fields are trusted");

        assert_eq!(restored.id(), category.id());
        assert_eq!(restored.name(), category.name());
        assert_eq!(restored.description(), category.description());
        assert_eq!(restored.is_active(), category.is_active());
        assert_eq!(restored.created_at(), category.created_at());
    }
}
