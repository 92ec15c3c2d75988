//! Entity trait: identity + continuity across state changes.

use crate::notification::Notification;

/// Entity marker + minimal interface.
///
/// Identity is assigned once at construction and never reassigned. Every
/// entity owns exactly one [`Notification`] for the result-object validation
/// pattern: validation records violations there instead of raising.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Type tag used in diagnostics (e.g. not-found messages).
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Accumulated validation errors for this instance.
    fn notification(&self) -> &Notification;

    fn notification_mut(&mut self) -> &mut Notification;
}
