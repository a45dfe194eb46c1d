//! Data Transfer Objects
//!
//! Shapes exchanged with the schema store and submission sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::SubmissionReceipt;
use crate::domain::value_objects::{FormValues, SchemaId, SubmissionId};
use crate::error::{FormsError, Result};

/// Persisted schema record; `schema` is stored as received
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSchema {
    pub id: SchemaId,
    pub name: String,
    pub schema: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredSchema {
    /// Fresh record with a new id; blank names and null documents are rejected
    pub fn new(name: &str, schema: serde_json::Value) -> Result<Self> {
        if name.trim().is_empty() || schema.is_null() {
            return Err(FormsError::Validation("Name and schema are required".into()));
        }
        let now = Utc::now();
        Ok(Self {
            id: SchemaId::new(),
            name: name.to_string(),
            schema,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Schema listing entry, without the field bodies
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummary {
    pub id: SchemaId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a store save
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSchema {
    pub id: SchemaId,
    pub schema: StoredSchema,
}

/// One stored submission; `schema_id` is `None` for orphan submissions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub schema_id: Option<SchemaId>,
    pub data: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Fresh record with a new id; missing values are rejected
    pub fn new(schema_id: Option<SchemaId>, values: Option<FormValues>) -> Result<Self> {
        let data = values.ok_or_else(|| FormsError::Validation("Form data is required".into()))?;
        Ok(Self {
            id: SubmissionId::new(),
            schema_id,
            data,
            submitted_at: Utc::now(),
        })
    }

    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            submission_id: self.id.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Sort summaries oldest first, ties by id
pub fn sort_summaries(summaries: &mut [SchemaSummary]) {
    summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_schema_requires_name_and_document() {
        assert!(matches!(StoredSchema::new("  ", json!({})), Err(FormsError::Validation(_))));
        assert!(matches!(StoredSchema::new("Form", json!(null)), Err(FormsError::Validation(_))));

        let stored = StoredSchema::new("Form", json!({ "fields": [] })).unwrap();
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[test]
    fn test_stored_schema_wire_shape() {
        let stored = StoredSchema::new("Form", json!({ "name": "Form", "fields": [] })).unwrap();
        let doc = serde_json::to_value(&stored).unwrap();
        for key in ["id", "name", "schema", "createdAt", "updatedAt"] {
            assert!(doc.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_orphan_submission_allowed_but_values_required() {
        let record = SubmissionRecord::new(None, Some(FormValues::new())).unwrap();
        assert!(record.schema_id.is_none());
        assert_eq!(record.receipt().submission_id, record.id);
        assert!(matches!(SubmissionRecord::new(None, None), Err(FormsError::Validation(_))));
    }
}
