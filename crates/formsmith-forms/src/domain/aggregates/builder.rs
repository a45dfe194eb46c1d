//! FormBuilder Aggregate
//!
//! Per-session state holder for the form builder: the field list, the
//! form name, the id of the schema it was loaded from or saved as, and
//! whether preview mode is active. One instance per open builder; nothing
//! here is process-global.

use crate::domain::aggregates::{FieldList, PreviewSession, Schema};
use crate::domain::events::{BuilderEvent, DomainEvent};
use crate::domain::services::{DecodedSchema, SchemaCodec};
use crate::domain::value_objects::SchemaId;
use crate::error::{FormsError, Result};

#[derive(Clone, Debug, Default)]
pub enum BuilderMode {
    #[default]
    Design,
    Preview(PreviewSession),
}

#[derive(Clone, Debug, Default)]
pub struct FormBuilder {
    form_name: String,
    fields: FieldList,
    current_schema_id: Option<SchemaId>,
    mode: BuilderMode,
    events: Vec<DomainEvent>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn form_name(&self) -> &str { &self.form_name }
    pub fn fields(&self) -> &FieldList { &self.fields }
    pub fn current_schema_id(&self) -> Option<&SchemaId> { self.current_schema_id.as_ref() }

    pub fn is_preview(&self) -> bool {
        matches!(self.mode, BuilderMode::Preview(_))
    }

    /// Mutable access for field-list gestures
    pub fn fields_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }

    pub fn preview(&self) -> Result<&PreviewSession> {
        match &self.mode {
            BuilderMode::Preview(session) => Ok(session),
            BuilderMode::Design => Err(FormsError::PreviewInactive),
        }
    }

    pub fn preview_mut(&mut self) -> Result<&mut PreviewSession> {
        match &mut self.mode {
            BuilderMode::Preview(session) => Ok(session),
            BuilderMode::Design => Err(FormsError::PreviewInactive),
        }
    }

    /// Field list and preview session together, for submit handling
    pub fn preview_parts(&mut self) -> Result<(&FieldList, &mut PreviewSession)> {
        match &mut self.mode {
            BuilderMode::Preview(session) => Ok((&self.fields, session)),
            BuilderMode::Design => Err(FormsError::PreviewInactive),
        }
    }

    // =========================================================================
    // Business Operations
    // =========================================================================

    pub fn set_form_name(&mut self, name: impl Into<String>) {
        self.form_name = name.into();
    }

    /// Switch modes; entering preview always starts a fresh session
    pub fn toggle_preview(&mut self) -> bool {
        self.mode = match self.mode {
            BuilderMode::Design => BuilderMode::Preview(PreviewSession::new()),
            BuilderMode::Preview(_) => BuilderMode::Design,
        };
        self.is_preview()
    }

    /// Snapshot the builder as a schema document
    pub fn encode(&self) -> Schema {
        SchemaCodec::encode(&self.fields, &self.form_name)
    }

    /// Replace builder state with a decoded schema, back in design mode
    pub fn apply_loaded(&mut self, decoded: DecodedSchema) {
        self.flush_field_events();
        let field_count = decoded.fields.len();
        self.form_name = decoded.name;
        self.fields = decoded.fields;
        self.current_schema_id = decoded.id.clone();
        self.mode = BuilderMode::Design;
        self.raise_event(BuilderEvent::SchemaLoaded { schema_id: decoded.id, field_count });
    }

    /// Record the id the store assigned
    pub fn mark_saved(&mut self, id: SchemaId) {
        self.current_schema_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.flush_field_events();
        self.form_name.clear();
        self.fields = FieldList::create();
        self.current_schema_id = None;
        self.mode = BuilderMode::Design;
        self.raise_event(BuilderEvent::Cleared);
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    /// Drain builder events, field-list events included, in order raised
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        self.flush_field_events();
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: BuilderEvent) {
        self.events.push(event.into());
    }

    /// Must run before `fields` is replaced so its events are not lost
    fn flush_field_events(&mut self) {
        let mut pending = self.fields.take_events();
        self.events.append(&mut pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldType;

    #[test]
    fn test_toggle_preview_starts_fresh_session() {
        let mut builder = FormBuilder::new();
        let id = builder.fields_mut().insert(FieldType::Text, None);

        assert!(builder.toggle_preview());
        builder.preview_mut().unwrap().set_value(id.clone(), "typed");

        assert!(!builder.toggle_preview());
        assert!(matches!(builder.preview(), Err(FormsError::PreviewInactive)));

        builder.toggle_preview();
        assert!(builder.preview().unwrap().value(&id).is_none());
    }

    #[test]
    fn test_reentering_preview_clears_stuck_submission() {
        let mut builder = FormBuilder::new();
        builder.fields_mut().insert(FieldType::Text, None);
        builder.toggle_preview();
        {
            let (fields, session) = builder.preview_parts().unwrap();
            session.begin_submit(fields, None).unwrap();
        }
        {
            let (fields, session) = builder.preview_parts().unwrap();
            assert!(matches!(session.begin_submit(fields, None), Err(FormsError::SubmissionInFlight)));
        }

        builder.toggle_preview();
        builder.toggle_preview();
        let (fields, session) = builder.preview_parts().unwrap();
        assert!(session.begin_submit(fields, None).is_ok());
    }

    #[test]
    fn test_encode_uses_form_name() {
        let mut builder = FormBuilder::new();
        builder.fields_mut().insert(FieldType::Email, None);
        assert_eq!(builder.encode().name, "Untitled Form");

        builder.set_form_name("Newsletter");
        let schema = builder.encode();
        assert_eq!(schema.name, "Newsletter");
        assert_eq!(schema.field_count(), 1);
    }

    #[test]
    fn test_apply_loaded_replaces_state_and_leaves_preview() {
        let mut builder = FormBuilder::new();
        builder.fields_mut().insert(FieldType::Text, None);
        builder.toggle_preview();

        let mut other = FieldList::create();
        other.insert(FieldType::Radio, None);
        other.insert(FieldType::Date, None);
        builder.apply_loaded(DecodedSchema {
            id: Some(SchemaId::from("s9")),
            name: "Loaded".into(),
            fields: other,
        });

        assert_eq!(builder.form_name(), "Loaded");
        assert_eq!(builder.fields().len(), 2);
        assert_eq!(builder.current_schema_id().map(SchemaId::as_str), Some("s9"));
        assert!(!builder.is_preview());
    }

    #[test]
    fn test_clear() {
        let mut builder = FormBuilder::new();
        builder.set_form_name("X");
        builder.fields_mut().insert(FieldType::Text, None);
        builder.mark_saved(SchemaId::new());
        builder.clear();

        assert!(builder.fields().is_empty());
        assert_eq!(builder.form_name(), "");
        assert!(builder.current_schema_id().is_none());
    }

    #[test]
    fn test_events_keep_order_across_field_list_and_builder() {
        let mut builder = FormBuilder::new();
        builder.fields_mut().insert(FieldType::Text, None);
        builder.clear();
        builder.fields_mut().insert(FieldType::Date, None);

        let events = builder.take_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], DomainEvent::Builder(BuilderEvent::FieldAdded { .. })));
        assert!(matches!(events[1], DomainEvent::Builder(BuilderEvent::Cleared)));
        assert!(matches!(events[2], DomainEvent::Builder(BuilderEvent::FieldAdded { field_type: FieldType::Date, .. })));
    }
}
