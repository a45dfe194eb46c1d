//! PreviewSession Aggregate
//!
//! Ephemeral state for test-filling a form in preview mode.
//!
//! ```text
//! Editing --begin_submit--> (validate) --errors--> Editing (errors set)
//!                                      \--ok-----> Submitting
//! Submitting --complete_submit--> Editing (values and errors cleared)
//! Submitting --fail_submit------> Editing (values kept, notice set)
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::aggregates::{FieldList, SubmissionReceipt, SubmissionRequest};
use crate::domain::services::{validate, InputShape, ValidationErrors};
use crate::domain::value_objects::{FieldId, FieldValue, FormValues, SchemaId};
use crate::error::{FormsError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewPhase {
    #[default]
    Editing,
    /// A submission is outstanding; re-entry is refused
    Submitting,
}

/// One field as preview mode shows it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedField {
    pub field_id: FieldId,
    pub label: String,
    pub required: bool,
    pub shape: InputShape,
    pub value: Option<FieldValue>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct PreviewSession {
    values: FormValues,
    errors: ValidationErrors,
    phase: PreviewPhase,
    notice: Option<String>,
    last_receipt: Option<SubmissionReceipt>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues { &self.values }
    pub fn errors(&self) -> &ValidationErrors { &self.errors }
    pub fn phase(&self) -> PreviewPhase { self.phase }
    pub fn is_submitting(&self) -> bool { self.phase == PreviewPhase::Submitting }
    /// Transport failure message from the last submit, if any
    pub fn notice(&self) -> Option<&str> { self.notice.as_deref() }
    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> { self.last_receipt.as_ref() }

    pub fn value(&self, id: &FieldId) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Store a value and drop that field's error, leaving the others
    pub fn set_value(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        self.errors.clear_field(&id);
        self.values.insert(id, value.into());
    }

    /// Recompute the error map from scratch
    pub fn validate(&mut self, fields: &FieldList) -> &ValidationErrors {
        self.errors = validate(fields.fields(), &self.values);
        &self.errors
    }

    /// Gate a submission on validation and mark it in flight
    pub fn begin_submit(&mut self, fields: &FieldList, schema_id: Option<SchemaId>) -> Result<SubmissionRequest> {
        if self.is_submitting() {
            return Err(FormsError::SubmissionInFlight);
        }
        self.notice = None;

        if !self.validate(fields).is_empty() {
            return Err(FormsError::InvalidForm(self.errors.clone()));
        }

        self.phase = PreviewPhase::Submitting;
        Ok(SubmissionRequest::build(schema_id, &self.values))
    }

    /// Sink accepted the submission: start over with a blank form
    pub fn complete_submit(&mut self, receipt: SubmissionReceipt) {
        self.values.clear();
        self.errors.clear();
        self.phase = PreviewPhase::Editing;
        self.last_receipt = Some(receipt);
    }

    /// Sink failed: keep the values for a retry, field errors untouched
    pub fn fail_submit(&mut self, reason: impl Into<String>) {
        self.phase = PreviewPhase::Editing;
        self.notice = Some(reason.into());
    }

    /// Fields in display order with their input shape, value and error
    pub fn render(&self, fields: &FieldList) -> Vec<RenderedField> {
        fields
            .iter()
            .map(|field| RenderedField {
                field_id: field.id().clone(),
                label: field.label().to_string(),
                required: field.required(),
                shape: InputShape::for_field(field),
                value: self.values.get(field.id()).cloned(),
                error: self.errors.get(field.id()).map(str::to_string),
            })
            .collect()
    }

    /// Values keyed by field label, handy for showing a submission
    pub fn values_by_label(&self, fields: &FieldList) -> HashMap<String, FieldValue> {
        fields
            .iter()
            .filter_map(|f| self.values.get(f.id()).map(|v| (f.label().to_string(), v.clone())))
            .collect()
    }
}
