//! Typed identifiers for type-safe entity references.
//!
//! Using typed IDs prevents accidentally looking up a product with a seller key.
//! Identifiers come from the input data as opaque strings.

use serde::{Deserialize, Serialize};

/// Macro to generate typed string key wrappers.
macro_rules! typed_key {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a key from anything convertible into a `String`.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_key!(SellerId, "Unique identifier for a seller.");
typed_key!(Sku, "Stock-keeping unit identifying a product.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
