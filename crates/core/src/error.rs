//! Domain error model.

use thiserror::Error;

use crate::notification::Notification;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Entity
/// validation itself never raises — it records into the entity's
/// [`Notification`] — but a use case surfaces an invalid entity as the
/// `Validation` variant so callers get a distinguishable failure result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity failed validation; carries the accumulated field errors.
    #[error("entity validation failed")]
    Validation(Notification),

    /// A requested entity does not exist in storage.
    #[error("{entity} not found using ID {id}")]
    NotFound { entity: &'static str, id: String },

    /// An identifier was malformed (e.g. UUID parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Infrastructure failure inside a repository (e.g. poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(notification: Notification) -> Self {
        Self::Validation(notification)
    }

    pub fn not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("Category", "deadbeef-0000-0000-0000-000000000000");
        assert_eq!(
            err.to_string(),
            "Category not found using ID deadbeef-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn validation_error_carries_the_notification() {
        let mut notification = Notification::new();
        notification.add_error("name should not be empty", Some("name"));

        let err = DomainError::validation(notification.clone());
        match err {
            DomainError::Validation(n) => assert_eq!(n, notification),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
