//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values; two instances with the same values are equal. Entities, by
/// contrast, are the same object iff their ids match. To "modify" a value
/// object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
