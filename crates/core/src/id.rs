//! Strongly-typed UUID identifiers.
//!
//! Each entity declares its own identifier newtype through
//! [`uuid_value_object!`], keeping ids from different entities
//! incompatible at the type level while sharing one implementation.

/// Declares a UUID-backed identifier value object.
///
/// The generated type is immutable, compared by value, and parses only the
/// canonical hyphenated textual form; malformed input fails with
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId).
#[macro_export]
macro_rules! uuid_value_object {
    ($t:ident, $name:literal) => {
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(::uuid::Uuid);

        impl $t {
            /// Fresh random identifier.
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            pub fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<::uuid::Uuid> for $t {
            fn from(value: ::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for ::uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Canonical hyphenated form only (36 chars); `Uuid` would
                // also accept simple/braced/urn forms.
                if s.len() != 36 {
                    return Err($crate::error::DomainError::invalid_id(format!(
                        "{}: {s:?} is not a canonical UUID",
                        $name
                    )));
                }
                let uuid = ::uuid::Uuid::parse_str(s).map_err(|e| {
                    $crate::error::DomainError::invalid_id(format!("{}: {}", $name, e))
                })?;
                Ok(Self(uuid))
            }
        }

        impl $crate::value_object::ValueObject for $t {}
    };
}

#[cfg(test)]
mod tests {
    use crate::DomainError;

    uuid_value_object!(TestId, "TestId");

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(TestId::new(), TestId::new());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let id = TestId::new();
        let parsed: TestId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn display_is_canonical_36_chars() {
        assert_eq!(TestId::new().to_string().len(), 36);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let err = "not-a-uuid".parse::<TestId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn non_canonical_forms_are_rejected() {
        // Simple (hyphenless) form parses as a Uuid but is not canonical.
        let simple = TestId::new().to_string().replace('-', "");
        assert!(matches!(
            simple.parse::<TestId>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn equality_is_by_value() {
        let id = TestId::new();
        assert_eq!(TestId::from_uuid(*id.as_uuid()), id);
    }
}
