//! Field types and their per-type rule table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of field types a form can contain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Number,
    Select,
    Radio,
    Checkbox,
    Date,
    File,
}

/// What kind of value the preview control produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text
    Text,
    /// Ticked or not
    Flag,
    /// Name of the chosen file
    FileName,
}

/// Capability row for one field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    /// Field carries an editable option list
    pub has_options: bool,
    /// Non-empty values must look like an email address
    pub checks_email_shape: bool,
    pub value_kind: ValueKind,
}

impl FieldType {
    /// Every type, in palette order
    pub const ALL: [FieldType; 9] = [
        Self::Text,
        Self::Textarea,
        Self::Email,
        Self::Number,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
        Self::Date,
        Self::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Number => "number",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::File => "file",
        }
    }

    pub fn rule(&self) -> FieldRule {
        let (has_options, checks_email_shape, value_kind) = match self {
            Self::Text | Self::Textarea | Self::Number | Self::Date => (false, false, ValueKind::Text),
            Self::Email => (false, true, ValueKind::Text),
            Self::Select | Self::Radio => (true, false, ValueKind::Text),
            Self::Checkbox => (false, false, ValueKind::Flag),
            Self::File => (false, false, ValueKind::FileName),
        };
        FieldRule { has_options, checks_email_shape, value_kind }
    }

    pub fn has_options(&self) -> bool {
        self.rule().has_options
    }

    /// `"Text Field"`, `"Textarea Field"`, ...
    pub fn default_label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Field", first.to_ascii_uppercase(), chars.as_str()),
            None => String::from("Field"),
        }
    }

    /// `"Enter text..."`, `"Enter email..."`, ...
    pub fn default_placeholder(&self) -> String {
        format!("Enter {}...", self.as_str())
    }

    /// Initial option list for choice fields
    pub fn default_options(&self) -> Option<Vec<String>> {
        self.has_options()
            .then(|| vec!["Option 1".to_string(), "Option 2".to_string()])
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown field type: {s}"))
    }
}
