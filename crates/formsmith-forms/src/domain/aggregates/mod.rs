//! Aggregates module
//!
//! - **FieldList**: ordered field collection, id-addressed mutation
//! - **PreviewSession**: values, errors and submit state of preview mode
//! - **FormBuilder**: one builder session tying the two together

pub mod builder;
pub mod field;
pub mod field_list;
pub mod preview_session;
pub mod schema;
pub mod submission;

pub use builder::{BuilderMode, FormBuilder};
pub use field::{Field, FieldPatch};
pub use field_list::FieldList;
pub use preview_session::{PreviewPhase, PreviewSession, RenderedField};
pub use schema::Schema;
pub use submission::{SubmissionReceipt, SubmissionRequest};
