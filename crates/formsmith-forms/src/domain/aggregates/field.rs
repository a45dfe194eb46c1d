//! Field entity
//!
//! The atomic schema unit. `id` and `type` are fixed at construction;
//! everything else is edited through [`FieldList`](super::FieldList).

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FieldId, FieldType};

/// One form-input definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    #[serde(rename = "type")]
    field_type: FieldType,
    label: String,
    placeholder: String,
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Field {
    /// New field with the type's default label, placeholder and options
    pub fn new(field_type: FieldType) -> Self {
        Self {
            id: FieldId::new(),
            field_type,
            label: field_type.default_label(),
            placeholder: field_type.default_placeholder(),
            required: false,
            options: field_type.default_options(),
        }
    }

    /// Rebuild a field exactly as stored
    pub fn from_parts(
        id: FieldId,
        field_type: FieldType,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        required: bool,
        options: Option<Vec<String>>,
    ) -> Self {
        Self {
            id,
            field_type,
            label: label.into(),
            placeholder: placeholder.into(),
            required,
            options,
        }
    }

    pub fn id(&self) -> &FieldId { &self.id }
    pub fn field_type(&self) -> FieldType { self.field_type }
    pub fn label(&self) -> &str { &self.label }
    pub fn placeholder(&self) -> &str { &self.placeholder }
    pub fn required(&self) -> bool { self.required }
    pub fn options(&self) -> Option<&[String]> { self.options.as_deref() }

    pub(crate) fn options_mut(&mut self) -> &mut Vec<String> {
        self.options.get_or_insert_with(Vec::new)
    }

    pub(crate) fn apply(&mut self, patch: FieldPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(options) = patch.options {
            self.options = Some(options);
        }
    }
}

/// Partial attribute change for [`FieldList::update`](super::FieldList::update)
///
/// There is no way to express `id` or `type` here; when a patch is
/// deserialized from JSON those keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::default() }
    }

    pub fn required(required: bool) -> Self {
        Self { required: Some(required), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_select_field_defaults() {
        let field = Field::new(FieldType::Select);
        assert_eq!(field.label(), "Select Field");
        assert_eq!(field.placeholder(), "Enter select...");
        assert!(!field.required());
        assert_eq!(field.options().unwrap(), ["Option 1", "Option 2"]);
    }

    #[test]
    fn test_text_field_serializes_without_options() {
        let field = Field::new(FieldType::Text);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["label"], "Text Field");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_patch_ignores_identity_keys() {
        let patch: FieldPatch =
            serde_json::from_str(r#"{"id":"other","type":"email","label":"Name"}"#).unwrap();
        let mut field = Field::new(FieldType::Text);
        let id = field.id().clone();
        field.apply(patch);
        assert_eq!(field.id(), &id);
        assert_eq!(field.field_type(), FieldType::Text);
        assert_eq!(field.label(), "Name");
    }
}
