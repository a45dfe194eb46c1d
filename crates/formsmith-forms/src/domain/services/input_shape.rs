//! Input shapes the preview renders for each field type

use serde::Serialize;

use crate::domain::aggregates::Field;
use crate::domain::value_objects::FieldType;

/// Control a field renders as in preview mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum InputShape {
    /// Single-line input; `input_type` is the native input type
    Text { input_type: FieldType, placeholder: String },
    TextArea { placeholder: String },
    /// Drop-down whose first, empty entry shows `prompt`
    Select { prompt: String, options: Vec<String> },
    RadioGroup { options: Vec<String> },
    /// Tick box captioned with the field's placeholder
    Checkbox { caption: String },
    File,
}

impl InputShape {
    pub fn for_field(field: &Field) -> Self {
        let placeholder = field.placeholder().to_string();
        let options = || field.options().map(<[String]>::to_vec).unwrap_or_default();

        match field.field_type() {
            t @ (FieldType::Text | FieldType::Email | FieldType::Number | FieldType::Date) => {
                Self::Text { input_type: t, placeholder }
            }
            FieldType::Textarea => Self::TextArea { placeholder },
            FieldType::Select => Self::Select { prompt: placeholder, options: options() },
            FieldType::Radio => Self::RadioGroup { options: options() },
            FieldType::Checkbox => Self::Checkbox { caption: placeholder },
            FieldType::File => Self::File,
        }
    }
}
