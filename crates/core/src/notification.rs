//! Error notification: accumulates validation failures instead of raising.

use std::collections::BTreeMap;

use serde::Serialize;

/// Accumulator of field-keyed validation error messages.
///
/// Every entity owns exactly one `Notification`, created at construction and
/// mutated by each validation run over the entity's life. Errors are never
/// reset: repeated invalid mutations compound the recorded messages.
///
/// A field with zero messages is never present in the map. Errors reported
/// without a field are keyed by the message itself, so they survive merging
/// without a synthetic field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notification {
    errors: BTreeMap<String, Vec<String>>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the named field's error list, creating the list
    /// if absent.
    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        let message = message.into();
        let key = match field {
            Some(field) => field.to_owned(),
            None => message.clone(),
        };
        self.errors.entry(key).or_default().push(message);
    }

    /// Replaces (rather than appends) the error list for a field. An empty
    /// `messages` clears the field entirely, keeping the no-empty-list
    /// invariant.
    pub fn set_error(&mut self, messages: Vec<String>, field: Option<&str>) {
        match field {
            Some(field) => {
                if messages.is_empty() {
                    self.errors.remove(field);
                } else {
                    self.errors.insert(field.to_owned(), messages);
                }
            }
            None => {
                for message in messages {
                    self.errors.insert(message.clone(), vec![message]);
                }
            }
        }
    }

    /// Merges another notification into this one, field by field, preserving
    /// both sets of messages.
    pub fn copy_errors(&mut self, other: &Notification) {
        for (field, messages) in &other.errors {
            self.errors
                .entry(field.clone())
                .or_default()
                .extend(messages.iter().cloned());
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Borrow of the full field → messages mapping.
    pub fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}
