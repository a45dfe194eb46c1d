//! Domain Events
//!
//! Raised by the builder aggregates and the form service to report state
//! changes to the presentation layer and to integrations.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{FieldId, FieldType, SchemaId, SubmissionId};

/// All domain events of the form engine
#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Builder(BuilderEvent),
    Schema(SchemaEvent),
}

/// Builder-state changes
#[derive(Clone, Debug, PartialEq)]
pub enum BuilderEvent {
    FieldAdded {
        field_id: FieldId,
        field_type: FieldType,
        index: usize,
    },

    FieldRemoved {
        field_id: FieldId,
    },

    FieldUpdated {
        field_id: FieldId,
    },

    FieldMoved {
        field_id: FieldId,
        from: usize,
        to: usize,
    },

    OptionsChanged {
        field_id: FieldId,
        count: usize,
    },

    SchemaLoaded {
        schema_id: Option<SchemaId>,
        field_count: usize,
    },

    Cleared,
}

/// Persistence and submission outcomes
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaEvent {
    Saved {
        schema_id: SchemaId,
        name: String,
        field_count: usize,
        saved_at: DateTime<Utc>,
    },

    SubmissionAccepted {
        schema_id: Option<SchemaId>,
        submission_id: SubmissionId,
        submitted_at: DateTime<Utc>,
    },

    SubmissionFailed {
        schema_id: Option<SchemaId>,
        reason: String,
    },
}

impl From<BuilderEvent> for DomainEvent {
    fn from(event: BuilderEvent) -> Self {
        Self::Builder(event)
    }
}

impl From<SchemaEvent> for DomainEvent {
    fn from(event: SchemaEvent) -> Self {
        Self::Schema(event)
    }
}
