//! Infrastructure adapters for the outbound ports

pub mod json_file;
pub mod persistence;

use std::sync::Arc;

pub use json_file::{JsonFileSchemaStore, JsonFileSubmissionSink};
pub use persistence::{InMemorySchemaStore, InMemorySubmissionSink, NoOpEventPublisher, TracingEventPublisher};

use crate::application::FormService;
use crate::config::{StorageBackend, StorageConfig};
use crate::error::Result;
use crate::ports::outbound::{SchemaStore, SubmissionSink};

/// Wire a `FormService` to the configured storage backend
pub async fn open_service(storage: &StorageConfig) -> Result<FormService> {
    let (schemas, submissions): (Arc<dyn SchemaStore>, Arc<dyn SubmissionSink>) = match storage.backend {
        StorageBackend::Memory => (
            Arc::new(InMemorySchemaStore::new()),
            Arc::new(InMemorySubmissionSink::new()),
        ),
        StorageBackend::JsonFile => (
            Arc::new(JsonFileSchemaStore::open(storage.schemas_path()).await?),
            Arc::new(JsonFileSubmissionSink::open(storage.submissions_path()).await?),
        ),
    };

    tracing::debug!(backend = ?storage.backend, "storage opened");
    Ok(FormService::new(schemas, submissions, Arc::new(TracingEventPublisher)))
}
