use chrono::{DateTime, Utc};

use catalog_core::{Entity, Notification, uuid_value_object, validation};

uuid_value_object!(CategoryId, "CategoryId");

/// Fields accepted by the [`Category::create`] factory. Omitted fields take
/// their defaults (no description, active, created now).
#[derive(Debug, Clone, Default)]
pub struct CreateCategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Catalog category entity.
///
/// Construction never fails: validation records violations into the owned
/// [`Notification`] instead of raising, so a caller can inspect every
/// violation at once and branch on [`Entity::notification`] before
/// persisting. The notification is retained for the entity's whole life;
/// repeated invalid mutations compound its error lists.
#[derive(Debug, Clone)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl Category {
    /// Factory: fresh identity, defaults over the supplied fields, then one
    /// validation pass. Returns the instance regardless of validity.
    pub fn create(props: CreateCategoryProps) -> Self {
        let mut category = Self {
            category_id: CategoryId::new(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: Utc::now(),
            notification: Notification::new(),
        };
        category.validate(None);
        category
    }

    /// Rehydration from storage: identity and timestamp are supplied, no
    /// validation runs (stored state is taken as-is).
    pub fn restore(
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category_id,
            name,
            description,
            is_active,
            created_at,
            notification: Notification::new(),
        }
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renames the category and re-validates the `name` field.
    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(Some(&["name"]));
    }

    /// Replaces the description and re-validates the `description` field.
    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
        self.validate(Some(&["description"]));
    }

    /// No validation: the flag has no constraint.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Runs the registered rules for the declared fields (or the named
    /// subset), recording violations into the notification. Never raises.
    ///
    /// Rules: `name` required, at most 255 characters. `description` is free
    /// text with no registered rule.
    pub fn validate(&mut self, fields: Option<&[&str]>) {
        let touches = |field: &str| fields.is_none_or(|fs| fs.contains(&field));

        if touches("name") {
            validation::required(&mut self.notification, "name", &self.name);
            validation::max_length(&mut self.notification, "name", &self.name, 255);
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const KIND: &'static str = "Category";

    fn id(&self) -> &CategoryId {
        &self.category_id
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_category() -> Category {
        Category::create(CreateCategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn create_applies_defaults() {
        let before = Utc::now();
        let category = valid_category();

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() >= before);
        assert!(category.created_at() <= Utc::now());
        assert_eq!(category.category_id().to_string().len(), 36);
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn create_accepts_supplied_fields() {
        let category = Category::create(CreateCategoryProps {
            name: "Movie".to_string(),
            description: Some("Movie description".to_string()),
            is_active: Some(false),
        });

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn restore_keeps_supplied_identity_and_timestamp() {
        let id = CategoryId::new();
        let created_at = Utc::now();
        let category = Category::restore(
            id,
            "Movie".to_string(),
            Some("Movie description".to_string()),
            false,
            created_at,
        );

        assert_eq!(category.category_id(), id);
        assert_eq!(category.created_at(), created_at);
        assert!(!category.is_active());
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn change_name_mutates_and_revalidates() {
        let mut category = valid_category();
        category.change_name("Other name");

        assert_eq!(category.name(), "Other name");
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn change_description_mutates() {
        let mut category = valid_category();
        category.change_description(Some("Other description".to_string()));
        assert_eq!(category.description(), Some("Other description"));

        category.change_description(None);
        assert_eq!(category.description(), None);
    }

    #[test]
    fn activate_and_deactivate_toggle_the_flag_without_validation() {
        let mut category = Category::create(CreateCategoryProps {
            name: "Movie".to_string(),
            is_active: Some(false),
            ..Default::default()
        });

        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());

        // No validation ran, so nothing was recorded.
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn create_with_over_long_name_records_the_error() {
        let category = Category::create(CreateCategoryProps {
            name: "t".repeat(256),
            ..Default::default()
        });

        assert!(category.notification().has_errors());
        assert_eq!(
            category.notification().messages_for("name"),
            Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
        );
    }

    #[test]
    fn create_with_empty_name_records_the_error() {
        let category = Category::create(CreateCategoryProps::default());

        assert_eq!(
            category.notification().messages_for("name"),
            Some(&["name should not be empty".to_string()][..])
        );
    }

    #[test]
    fn change_name_to_over_long_records_the_error() {
        let mut category = valid_category();
        category.change_name("t".repeat(256));

        assert!(category.notification().has_errors());
        assert_eq!(
            category.notification().messages_for("name"),
            Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
        );
    }

    #[test]
    fn repeated_invalid_mutations_compound_in_the_same_notification() {
        // One validation pass at create, one per change_name: each invalid
        // pass appends its own message, none are reset.
        let mut category = Category::create(CreateCategoryProps {
            name: "t".repeat(256),
            ..Default::default()
        });
        assert_eq!(category.notification().messages_for("name").unwrap().len(), 1);

        category.change_name("u".repeat(256));
        assert_eq!(category.notification().messages_for("name").unwrap().len(), 2);

        // A later valid mutation adds nothing but clears nothing either.
        category.change_name("Movie");
        assert_eq!(category.notification().messages_for("name").unwrap().len(), 2);
        assert!(category.notification().has_errors());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any name of 1..=255 characters is valid.
            #[test]
            fn names_up_to_255_chars_are_valid(name in proptest::collection::vec(any::<char>(), 1..=255)) {
                let name: String = name.into_iter().collect();
                let category = Category::create(CreateCategoryProps {
                    name,
                    ..Default::default()
                });
                prop_assert!(!category.notification().has_errors());
            }

            /// Any name of 256 or more characters records the length error.
            #[test]
            fn names_of_256_chars_or_more_are_invalid(extra in 0usize..64) {
                let category = Category::create(CreateCategoryProps {
                    name: "t".repeat(256 + extra),
                    ..Default::default()
                });
                prop_assert!(category.notification().has_errors());
                prop_assert_eq!(
                    category.notification().messages_for("name"),
                    Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
                );
            }
        }
    }
}
