//! Outbound ports (collaborator traits)
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;

use crate::application::dto::{SavedSchema, SchemaSummary, StoredSchema, SubmissionRecord};
use crate::domain::aggregates::SubmissionReceipt;
use crate::domain::value_objects::{FormValues, SchemaId};
use crate::domain::DomainEvent;
use crate::error::Result;

/// Durable keyed storage of schema documents
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Persist under a fresh id with creation/update timestamps.
    ///
    /// Fails with `Validation` when `name` is blank or `schema` is null.
    async fn save(&self, name: &str, schema: serde_json::Value) -> Result<SavedSchema>;

    /// Fails with `NotFound` for an unknown id
    async fn load(&self, id: &SchemaId) -> Result<StoredSchema>;

    /// Summaries, oldest first
    async fn list(&self) -> Result<Vec<SchemaSummary>>;
}

/// Durable append log of submissions
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Fails with `Validation` when `values` is `None`
    async fn submit(&self, schema_id: Option<SchemaId>, values: Option<FormValues>) -> Result<SubmissionReceipt>;

    /// Submissions in arrival order, optionally only those for one schema
    async fn list(&self, schema_id: Option<&SchemaId>) -> Result<Vec<SubmissionRecord>>;
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish domain events
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<()>;
}
