//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod email;
pub mod field_type;
pub mod field_value;

pub use email::{Email, EmailError};
pub use field_type::{FieldRule, FieldType, ValueKind};
pub use field_value::FieldValue;

/// Entered values keyed by field id
pub type FormValues = std::collections::HashMap<FieldId, FieldValue>;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh random identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::from_string(id)
            }
        }
    };
}

entity_id! {
    /// Identity of a field, fixed for the field's lifetime
    FieldId
}

entity_id! {
    /// Identity assigned by the schema store on first save
    SchemaId
}

entity_id! {
    /// Identity assigned by the submission sink
    SubmissionId
}
