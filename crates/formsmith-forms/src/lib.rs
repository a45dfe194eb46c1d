//! Formsmith form engine
//!
//! State engine behind a form builder: an ordered field list, a JSON
//! schema codec, preview-mode validation and the persistence contracts a
//! schema store and submission sink must honour.
//!
//! ## Architecture
//!
//! - **Domain Layer**: field list, preview session, builder session, codec
//! - **Application Layer**: use case orchestration, DTOs
//! - **Ports Layer**: hexagonal interfaces
//! - **Infrastructure Layer**: in-memory and JSON file stores
//!
//! ## Key Aggregates
//!
//! - **FieldList**: ordered fields, every mutation addressed by id
//! - **PreviewSession**: entered values, validation errors, submit state
//! - **FormBuilder**: one builder session holding both

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{FormService, SavedSchema, SchemaSummary, StoredSchema, SubmissionRecord};
pub use config::{FormsConfig, LogConfig, StorageBackend, StorageConfig};
pub use domain::aggregates::{
    BuilderMode, Field, FieldList, FieldPatch, FormBuilder, PreviewPhase, PreviewSession, RenderedField, Schema,
    SubmissionReceipt, SubmissionRequest,
};
pub use domain::events::{BuilderEvent, DomainEvent, SchemaEvent};
pub use domain::services::{InputShape, SchemaCodec, ValidationErrors};
pub use domain::value_objects::{FieldId, FieldType, FieldValue, FormValues, SchemaId, SubmissionId};
pub use error::{FormsError, Result};
pub use infrastructure::open_service;
pub use ports::inbound::FormUseCases;
pub use ports::outbound::{EventPublisher, SchemaStore, SubmissionSink};
