//! Submission handoff types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FormValues, SchemaId, SubmissionId};

/// What preview mode hands to the submission sink
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub schema_id: Option<SchemaId>,
    #[serde(rename = "formData")]
    pub values: FormValues,
}

impl SubmissionRequest {
    /// Bundle a schema id with a copy of the entered values
    pub fn build(schema_id: Option<SchemaId>, values: &FormValues) -> Self {
        Self {
            schema_id,
            values: values.clone(),
        }
    }
}

/// Acknowledgement returned by the sink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FieldId, FieldValue};

    #[test]
    fn test_build_copies_values() {
        let mut values = FormValues::new();
        values.insert(FieldId::from("name"), FieldValue::from("Ada"));

        let request = SubmissionRequest::build(Some(SchemaId::from("s1")), &values);
        values.insert(FieldId::from("name"), FieldValue::from("changed"));

        assert_eq!(request.values[&FieldId::from("name")], FieldValue::from("Ada"));
        assert_eq!(request.schema_id.as_ref().map(SchemaId::as_str), Some("s1"));
    }

    #[test]
    fn test_wire_shape() {
        let mut values = FormValues::new();
        values.insert(FieldId::from("agree"), FieldValue::from(true));
        let json = serde_json::to_value(SubmissionRequest::build(None, &values)).unwrap();
        assert_eq!(json, serde_json::json!({ "schemaId": null, "formData": { "agree": true } }));
    }
}
