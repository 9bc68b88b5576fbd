//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and required text values are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Macro to generate trimmed, non-empty string newtypes.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(ListingId, "Identifier of a persisted listing.", "listing_id");

non_empty_string_newtype!(SellerId, "Identifier of the seller owning a listing.", "seller_id");
non_empty_string_newtype!(ProductName, "Display name of a listed product.", "name");
non_empty_string_newtype!(CategoryName, "Category label from the taxonomy.", "category");
non_empty_string_newtype!(
    LanguageCode,
    "Language code such as `en`, `hi` or the `auto` marker.",
    "language"
);

impl LanguageCode {
    /// Whether this code is the `auto` marker rather than a concrete language.
    pub fn is_auto(&self) -> bool {
        // Case-insensitive: `AUTO` and `Auto` are the marker too.
        self.0.eq_ignore_ascii_case("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_product_names() {
        let value = ProductName::new("  Steel bottle  ").unwrap();
        assert_eq!(value.as_str(), "Steel bottle");
    }

    #[test]
    fn rejects_whitespace_only_names() {
        let err = ProductName::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("name"));
    }

    #[test]
    fn constraint_errors_name_the_field() {
        for err in [
            TypeConstraintError::NonPositiveId("listing_id"),
            TypeConstraintError::EmptyString("name"),
        ] {
            let message = match &err {
                TypeConstraintError::NonPositiveId(field)
                | TypeConstraintError::EmptyString(field) => err.to_string().starts_with(field),
            };
            assert!(message);
        }
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = ListingId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("listing_id"));
    }

    #[test]
    fn recognises_auto_language_marker() {
        assert!(LanguageCode::new("auto").unwrap().is_auto());
        assert!(LanguageCode::new("AUTO").unwrap().is_auto());
        assert!(LanguageCode::new("Auto").unwrap().is_auto());
        assert!(!LanguageCode::new("ta").unwrap().is_auto());
    }
}
