//! Preview validation
//!
//! Only two rules exist: required fields must be answered, and email
//! fields must look like an email address when answered. Number, date and
//! file formats are left to the input control.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::aggregates::Field;
use crate::domain::value_objects::{Email, FieldId, FieldValue, FormValues};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Field id to message, holding only failing fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldId, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, id: &FieldId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.0.iter().map(|(id, msg)| (id, msg.as_str()))
    }

    pub(crate) fn clear_field(&mut self, id: &FieldId) -> bool {
        self.0.remove(id).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Check every field, in display order, against the entered values
pub fn validate(fields: &[Field], values: &FormValues) -> ValidationErrors {
    let errors = fields
        .iter()
        .filter_map(|field| {
            check_field(field, values.get(field.id())).map(|msg| (field.id().clone(), msg))
        })
        .collect();
    ValidationErrors(errors)
}

/// Message for one field, `None` when the value is acceptable
pub fn check_field(field: &Field, value: Option<&FieldValue>) -> Option<String> {
    let answered = value.filter(|v| !v.is_empty());

    match answered {
        None if field.required() => Some(format!("{} is required", field.label())),
        None => None,
        Some(value) if field.field_type().rule().checks_email_shape => {
            let looks_valid = value.as_text().map(|s| Email::new(s).is_ok()).unwrap_or(false);
            (!looks_valid).then(|| INVALID_EMAIL_MESSAGE.to_string())
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{FieldList, FieldPatch};
    use crate::domain::value_objects::FieldType;

    fn required(list: &mut FieldList, field_type: FieldType) -> FieldId {
        let id = list.insert(field_type, None);
        list.update(&id, FieldPatch::required(true)).unwrap();
        id
    }

    #[test]
    fn test_required_text_missing_then_filled() {
        let mut list = FieldList::create();
        let id = required(&mut list, FieldType::Text);
        let mut values = FormValues::new();

        let errors = validate(list.fields(), &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&id), Some("Text Field is required"));

        values.insert(id.clone(), FieldValue::from("hello"));
        assert!(!validate(list.fields(), &values).contains(&id));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut list = FieldList::create();
        let id = required(&mut list, FieldType::Textarea);
        let mut values = FormValues::new();
        values.insert(id.clone(), FieldValue::from(""));
        assert!(validate(list.fields(), &values).contains(&id));
    }

    #[test]
    fn test_email_shape() {
        let mut list = FieldList::create();
        let id = list.insert(FieldType::Email, None);
        let mut values = FormValues::new();

        values.insert(id.clone(), FieldValue::from("not-an-email"));
        assert_eq!(validate(list.fields(), &values).get(&id), Some(INVALID_EMAIL_MESSAGE));

        values.insert(id.clone(), FieldValue::from("a@b.co"));
        assert!(validate(list.fields(), &values).is_empty());
    }

    #[test]
    fn test_optional_empty_email_passes() {
        let mut list = FieldList::create();
        let id = list.insert(FieldType::Email, None);
        let mut values = FormValues::new();
        values.insert(id, FieldValue::from(""));
        assert!(validate(list.fields(), &values).is_empty());
    }

    #[test]
    fn test_required_email_reports_required_not_shape() {
        let mut list = FieldList::create();
        let id = required(&mut list, FieldType::Email);
        let errors = validate(list.fields(), &FormValues::new());
        assert_eq!(errors.get(&id), Some("Email Field is required"));
    }

    #[test]
    fn test_unticked_required_checkbox_fails() {
        let mut list = FieldList::create();
        let id = required(&mut list, FieldType::Checkbox);
        let mut values = FormValues::new();

        values.insert(id.clone(), FieldValue::from(false));
        assert!(validate(list.fields(), &values).contains(&id));

        values.insert(id.clone(), FieldValue::from(true));
        assert!(validate(list.fields(), &values).is_empty());
    }

    #[test]
    fn test_number_date_file_not_format_checked() {
        let mut list = FieldList::create();
        let mut values = FormValues::new();
        for t in [FieldType::Number, FieldType::Date, FieldType::File] {
            let id = list.insert(t, None);
            values.insert(id, FieldValue::from("???"));
        }
        assert!(validate(list.fields(), &values).is_empty());
    }

    #[test]
    fn test_result_independent_of_field_order() {
        let mut list = FieldList::create();
        let a = required(&mut list, FieldType::Text);
        let b = list.insert(FieldType::Email, None);
        let mut values = FormValues::new();
        values.insert(b.clone(), FieldValue::from("nope"));

        let forward = validate(list.fields(), &values);
        list.move_field(0, 1).unwrap();
        let reversed = validate(list.fields(), &values);

        assert_eq!(forward, reversed);
        assert!(forward.contains(&a) && forward.contains(&b));
    }
}
