//! Command handlers
//!
//! Application service that drives a builder session against the schema
//! store and the submission sink.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{SavedSchema, SchemaSummary, SubmissionRecord};
use crate::domain::aggregates::{FormBuilder, SubmissionReceipt};
use crate::domain::events::{DomainEvent, SchemaEvent};
use crate::domain::services::SchemaCodec;
use crate::domain::value_objects::SchemaId;
use crate::error::Result;
use crate::ports::inbound::FormUseCases;
use crate::ports::outbound::{EventPublisher, SchemaStore, SubmissionSink};

/// Notice shown when the sink rejects or cannot be reached
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to submit form";

/// Form application service
pub struct FormService {
    schema_store: Arc<dyn SchemaStore>,
    submission_sink: Arc<dyn SubmissionSink>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl FormService {
    pub fn new(
        schema_store: Arc<dyn SchemaStore>,
        submission_sink: Arc<dyn SubmissionSink>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            schema_store,
            submission_sink,
            event_publisher,
        }
    }

    async fn publish(&self, event: SchemaEvent) {
        // Events are notifications; a publisher failure never undoes the action.
        if let Err(e) = self.event_publisher.publish(vec![DomainEvent::Schema(event)]).await {
            tracing::warn!(error = %e, "failed to publish domain event");
        }
    }
}

#[async_trait]
impl FormUseCases for FormService {
    async fn save_schema(&self, builder: &mut FormBuilder) -> Result<SavedSchema> {
        let schema = builder.encode();
        let name = schema.name.clone();
        let field_count = schema.field_count();
        let document = serde_json::to_value(&schema)?;

        let saved = self.schema_store.save(&name, document).await?;
        builder.mark_saved(saved.id.clone());

        tracing::info!(schema_id = %saved.id, %name, fields = field_count, "schema saved");
        self.publish(SchemaEvent::Saved {
            schema_id: saved.id.clone(),
            name,
            field_count,
            saved_at: saved.schema.updated_at,
        })
        .await;

        Ok(saved)
    }

    async fn load_schema(&self, builder: &mut FormBuilder, id: &SchemaId) -> Result<()> {
        let stored = self.schema_store.load(id).await?;
        let document = serde_json::to_value(&stored)?;
        let decoded = SchemaCodec::decode(&document).map_err(|e| {
            tracing::warn!(schema_id = %id, error = %e, "refusing to load stored schema");
            e
        })?;

        tracing::info!(schema_id = %id, fields = decoded.fields.len(), "schema loaded");
        builder.apply_loaded(decoded);
        Ok(())
    }

    async fn list_schemas(&self) -> Result<Vec<SchemaSummary>> {
        self.schema_store.list().await
    }

    async fn submit_preview(&self, builder: &mut FormBuilder) -> Result<SubmissionReceipt> {
        let schema_id = builder.current_schema_id().cloned();
        let request = {
            let (fields, session) = builder.preview_parts()?;
            session.begin_submit(fields, schema_id)?
        };

        let outcome = self
            .submission_sink
            .submit(request.schema_id.clone(), Some(request.values))
            .await;
        let session = builder.preview_mut()?;

        match outcome {
            Ok(receipt) => {
                session.complete_submit(receipt.clone());
                tracing::info!(submission_id = %receipt.submission_id, "form submitted");
                self.publish(SchemaEvent::SubmissionAccepted {
                    schema_id: request.schema_id,
                    submission_id: receipt.submission_id.clone(),
                    submitted_at: receipt.submitted_at,
                })
                .await;
                Ok(receipt)
            }
            Err(e) => {
                session.fail_submit(SUBMIT_FAILED_NOTICE);
                tracing::warn!(error = %e, "form submission failed");
                self.publish(SchemaEvent::SubmissionFailed {
                    schema_id: request.schema_id,
                    reason: e.to_string(),
                })
                .await;
                Err(e)
            }
        }
    }

    async fn list_submissions(&self, schema_id: Option<&SchemaId>) -> Result<Vec<SubmissionRecord>> {
        self.submission_sink.list(schema_id).await
    }
}
