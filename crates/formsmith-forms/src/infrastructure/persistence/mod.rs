//! In-memory store implementations
//!
//! Backed by `DashMap`; a per-store sequence number keeps listing order
//! stable when timestamps collide.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::dto::{SavedSchema, SchemaSummary, StoredSchema, SubmissionRecord};
use crate::domain::aggregates::SubmissionReceipt;
use crate::domain::value_objects::{FormValues, SchemaId};
use crate::domain::DomainEvent;
use crate::error::{FormsError, Result};
use crate::ports::outbound::{EventPublisher, SchemaStore, SubmissionSink};

/// In-memory schema store
#[derive(Default)]
pub struct InMemorySchemaStore {
    schemas: DashMap<SchemaId, (u64, StoredSchema)>,
    seq: AtomicU64,
}

impl InMemorySchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[async_trait]
impl SchemaStore for InMemorySchemaStore {
    async fn save(&self, name: &str, schema: serde_json::Value) -> Result<SavedSchema> {
        let stored = StoredSchema::new(name, schema)?;
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.schemas.insert(stored.id.clone(), (seq, stored.clone()));

        tracing::debug!(schema_id = %stored.id, seq, "schema stored in memory");
        Ok(SavedSchema { id: stored.id.clone(), schema: stored })
    }

    async fn load(&self, id: &SchemaId) -> Result<StoredSchema> {
        self.schemas
            .get(id)
            .map(|entry| entry.value().1.clone())
            .ok_or_else(|| FormsError::NotFound(format!("Schema {} not found", id)))
    }

    async fn list(&self) -> Result<Vec<SchemaSummary>> {
        let mut entries: Vec<(u64, SchemaSummary)> = self
            .schemas
            .iter()
            .map(|entry| (entry.value().0, entry.value().1.summary()))
            .collect();
        entries.sort_by(|a, b| a.1.created_at.cmp(&b.1.created_at).then(a.0.cmp(&b.0)));
        Ok(entries.into_iter().map(|(_, summary)| summary).collect())
    }
}

/// In-memory submission sink
#[derive(Default)]
pub struct InMemorySubmissionSink {
    submissions: DashMap<u64, SubmissionRecord>,
    seq: AtomicU64,
}

impl InMemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionSink for InMemorySubmissionSink {
    async fn submit(&self, schema_id: Option<SchemaId>, values: Option<FormValues>) -> Result<SubmissionReceipt> {
        let record = SubmissionRecord::new(schema_id, values)?;
        let receipt = record.receipt();
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.submissions.insert(seq, record);

        tracing::debug!(submission_id = %receipt.submission_id, seq, "submission stored in memory");
        Ok(receipt)
    }

    async fn list(&self, schema_id: Option<&SchemaId>) -> Result<Vec<SubmissionRecord>> {
        let mut entries: Vec<(u64, SubmissionRecord)> = self
            .submissions
            .iter()
            .filter(|entry| schema_id.map_or(true, |id| entry.value().schema_id.as_ref() == Some(id)))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, record)| record).collect())
    }
}

/// No-op event publisher
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _events: Vec<DomainEvent>) -> Result<()> {
        Ok(())
    }
}

/// Publisher that writes each event to the log
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<()> {
        for event in events {
            tracing::info!(event = ?event, "domain event");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::BuilderEvent;
    use crate::domain::value_objects::{FieldId, FieldValue};
    use serde_json::json;

    #[tokio::test]
    async fn test_schema_save_and_load() {
        let store = InMemorySchemaStore::new();
        let saved = store.save("Contact", json!({ "name": "Contact", "fields": [] })).await.unwrap();

        let loaded = store.load(&saved.id).await.unwrap();
        assert_eq!(loaded, saved.schema);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_schema_save_rejects_blank_name_and_null() {
        let store = InMemorySchemaStore::new();
        assert!(matches!(store.save("", json!({})).await, Err(FormsError::Validation(_))));
        assert!(matches!(store.save("Form", json!(null)).await, Err(FormsError::Validation(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_schema_load_unknown() {
        let store = InMemorySchemaStore::new();
        let err = store.load(&SchemaId::from("nope")).await.unwrap_err();
        assert!(matches!(err, FormsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_schema_list_in_save_order() {
        let store = InMemorySchemaStore::new();
        let mut ids = Vec::new();
        for name in ["first", "second", "third"] {
            ids.push(store.save(name, json!({ "fields": [] })).await.unwrap().id);
        }

        let listed: Vec<SchemaId> = store.list().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_submission_filter_and_order() {
        let sink = InMemorySubmissionSink::new();
        let schema = SchemaId::from("s1");
        let mut values = FormValues::new();
        values.insert(FieldId::from("f1"), FieldValue::from("one"));

        let first = sink.submit(Some(schema.clone()), Some(values.clone())).await.unwrap();
        sink.submit(None, Some(values.clone())).await.unwrap();
        let third = sink.submit(Some(schema.clone()), Some(values)).await.unwrap();

        assert_eq!(sink.list(None).await.unwrap().len(), 3);
        let for_schema: Vec<_> = sink
            .list(Some(&schema))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(for_schema, vec![first.submission_id, third.submission_id]);
    }

    #[tokio::test]
    async fn test_submission_requires_values() {
        let sink = InMemorySubmissionSink::new();
        let err = sink.submit(None, None).await.unwrap_err();
        assert!(matches!(err, FormsError::Validation(_)));
        assert!(sink.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publishers_accept_events() {
        let events = vec![DomainEvent::from(BuilderEvent::Cleared)];
        NoOpEventPublisher.publish(events.clone()).await.unwrap();
        TracingEventPublisher.publish(events).await.unwrap();
    }
}
