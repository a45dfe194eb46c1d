//! Values entered in preview mode

use serde::{Deserialize, Serialize};

/// Entered value: text for text-like, choice and file controls, a flag
/// for checkboxes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Empty string and an unticked checkbox both count as no answer
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flag(checked) => !checked,
            Self::Text(s) => s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
