//! JSON file backed stores
//!
//! Each store keeps its records in memory and rewrites its whole file,
//! pretty-printed, after every change. Missing files open as empty
//! stores; unreadable contents are discarded with a warning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use crate::application::dto::{sort_summaries, SavedSchema, SchemaSummary, StoredSchema, SubmissionRecord};
use crate::domain::aggregates::SubmissionReceipt;
use crate::domain::value_objects::{FormValues, SchemaId};
use crate::error::{FormsError, Result};
use crate::ports::outbound::{SchemaStore, SubmissionSink};

/// Read `path` into `T`, falling back to `T::default()` when absent or unparsable
async fn read_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            FormsError::Storage(format!("Failed to create directory {:?}: {}", parent, e))
        })?;
    }

    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(FormsError::Storage(format!("Failed to read {:?}: {}", path, e))),
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding unreadable store file");
            Ok(T::default())
        }
    }
}

/// Replace `path` with the pretty-printed JSON of `value`
async fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body)
        .await
        .map_err(|e| FormsError::Storage(format!("Failed to write {:?}: {}", tmp, e)))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| FormsError::Storage(format!("Failed to replace {:?}: {}", path, e)))
}

/// Schema store persisted as one JSON object keyed by schema id
pub struct JsonFileSchemaStore {
    path: PathBuf,
    schemas: Mutex<BTreeMap<SchemaId, StoredSchema>>,
}

impl JsonFileSchemaStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let schemas: BTreeMap<SchemaId, StoredSchema> = read_or_default(&path).await?;
        tracing::info!(path = %path.display(), count = schemas.len(), "schema store opened");
        Ok(Self {
            path,
            schemas: Mutex::new(schemas),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SchemaStore for JsonFileSchemaStore {
    async fn save(&self, name: &str, schema: serde_json::Value) -> Result<SavedSchema> {
        let stored = StoredSchema::new(name, schema)?;
        let mut schemas = self.schemas.lock().await;
        schemas.insert(stored.id.clone(), stored.clone());

        if let Err(e) = write_pretty(&self.path, &*schemas).await {
            schemas.remove(&stored.id);
            return Err(e);
        }

        tracing::debug!(schema_id = %stored.id, path = %self.path.display(), "schema written");
        Ok(SavedSchema { id: stored.id.clone(), schema: stored })
    }

    async fn load(&self, id: &SchemaId) -> Result<StoredSchema> {
        self.schemas
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| FormsError::NotFound(format!("Schema {} not found", id)))
    }

    async fn list(&self) -> Result<Vec<SchemaSummary>> {
        let mut summaries: Vec<SchemaSummary> = self.schemas.lock().await.values().map(StoredSchema::summary).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}

/// Submission sink persisted as a JSON array in arrival order
pub struct JsonFileSubmissionSink {
    path: PathBuf,
    submissions: Mutex<Vec<SubmissionRecord>>,
}

impl JsonFileSubmissionSink {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let submissions: Vec<SubmissionRecord> = read_or_default(&path).await?;
        tracing::info!(path = %path.display(), count = submissions.len(), "submission sink opened");
        Ok(Self {
            path,
            submissions: Mutex::new(submissions),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionSink for JsonFileSubmissionSink {
    async fn submit(&self, schema_id: Option<SchemaId>, values: Option<FormValues>) -> Result<SubmissionReceipt> {
        let record = SubmissionRecord::new(schema_id, values)?;
        let receipt = record.receipt();
        let mut submissions = self.submissions.lock().await;
        submissions.push(record);

        if let Err(e) = write_pretty(&self.path, &*submissions).await {
            submissions.pop();
            return Err(e);
        }

        tracing::debug!(submission_id = %receipt.submission_id, path = %self.path.display(), "submission written");
        Ok(receipt)
    }

    async fn list(&self, schema_id: Option<&SchemaId>) -> Result<Vec<SubmissionRecord>> {
        Ok(self
            .submissions
            .lock()
            .await
            .iter()
            .filter(|r| schema_id.map_or(true, |id| r.schema_id.as_ref() == Some(id)))
            .cloned()
            .collect())
    }
}
