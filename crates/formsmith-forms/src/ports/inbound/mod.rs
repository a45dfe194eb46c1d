//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use async_trait::async_trait;

use crate::application::dto::{SavedSchema, SchemaSummary, SubmissionRecord};
use crate::domain::aggregates::{FormBuilder, SubmissionReceipt};
use crate::domain::value_objects::SchemaId;
use crate::error::Result;

/// Save/load/submit use cases of one builder session.
///
/// Every operation leaves the builder exactly as it was when it fails.
#[async_trait]
pub trait FormUseCases: Send + Sync {
    /// Encode the builder and persist it, recording the assigned id
    async fn save_schema(&self, builder: &mut FormBuilder) -> Result<SavedSchema>;

    /// Replace the builder's contents with a stored schema
    async fn load_schema(&self, builder: &mut FormBuilder, id: &SchemaId) -> Result<()>;

    /// Stored schema summaries
    async fn list_schemas(&self) -> Result<Vec<SchemaSummary>>;

    /// Validate the preview session and hand its values to the sink.
    ///
    /// Dropping the returned future while the sink call is pending leaves
    /// the session in `Submitting`, so later submits fail with
    /// `SubmissionInFlight`. Leaving and re-entering preview mode starts a
    /// fresh session.
    async fn submit_preview(&self, builder: &mut FormBuilder) -> Result<SubmissionReceipt>;

    /// Stored submissions, optionally for one schema
    async fn list_submissions(&self, schema_id: Option<&SchemaId>) -> Result<Vec<SubmissionRecord>>;
}
