//! Field validation rules.
//!
//! Rules never raise: each one checks a single constraint and records any
//! violation into the caller's [`Notification`]. Entities compose these in
//! their `validate` implementation.

use crate::notification::Notification;

/// The value must be non-empty.
pub fn required(notification: &mut Notification, field: &str, value: &str) {
    if value.is_empty() {
        notification.add_error(format!("{field} should not be empty"), Some(field));
    }
}

/// The value must be at most `max` characters long.
pub fn max_length(notification: &mut Notification, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        notification.add_error(
            format!("{field} must be shorter than or equal to {max} characters"),
            Some(field),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_records_nothing_for_non_empty_value() {
        let mut notification = Notification::new();
        required(&mut notification, "name", "Movie");
        assert!(!notification.has_errors());
    }

    #[test]
    fn required_records_error_for_empty_value() {
        let mut notification = Notification::new();
        required(&mut notification, "name", "");
        assert_eq!(
            notification.messages_for("name"),
            Some(&["name should not be empty".to_string()][..])
        );
    }

    #[test]
    fn max_length_boundary_is_inclusive() {
        let mut notification = Notification::new();
        max_length(&mut notification, "name", &"t".repeat(255), 255);
        assert!(!notification.has_errors());

        max_length(&mut notification, "name", &"t".repeat(256), 255);
        assert_eq!(
            notification.messages_for("name"),
            Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
        );
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let mut notification = Notification::new();
        // 255 multi-byte characters still fit.
        max_length(&mut notification, "name", &"é".repeat(255), 255);
        assert!(!notification.has_errors());
    }
}
