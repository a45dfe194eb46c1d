//! Builder session driven through `FormService` with in-memory stores

use std::sync::Arc;

use formsmith_forms::domain::services::validation::INVALID_EMAIL_MESSAGE;
use formsmith_forms::infrastructure::{InMemorySchemaStore, InMemorySubmissionSink, NoOpEventPublisher};
use formsmith_forms::{
    FieldPatch, FieldType, FieldValue, FormBuilder, FormService, FormUseCases, FormsError, InputShape, PreviewPhase,
    SchemaCodec,
};

fn service() -> FormService {
    FormService::new(
        Arc::new(InMemorySchemaStore::new()),
        Arc::new(InMemorySubmissionSink::new()),
        Arc::new(NoOpEventPublisher),
    )
}

#[test]
fn contact_form_encodes_and_decodes() {
    let mut builder = FormBuilder::new();
    builder.fields_mut().insert(FieldType::Text, None);
    builder.fields_mut().insert(FieldType::Select, None);
    builder.set_form_name("Contact");

    let schema = builder.encode();
    let doc = serde_json::to_value(&schema).unwrap();
    assert_eq!(doc["name"], "Contact");
    assert_eq!(doc["fields"][0]["type"], "text");
    assert_eq!(doc["fields"][0]["label"], "Text Field");
    assert_eq!(doc["fields"][0]["required"], false);
    assert_eq!(doc["fields"][1]["type"], "select");
    assert_eq!(doc["fields"][1]["options"], serde_json::json!(["Option 1", "Option 2"]));

    let decoded = SchemaCodec::decode(&doc).unwrap();
    let types: Vec<FieldType> = decoded.fields.iter().map(|f| f.field_type()).collect();
    assert_eq!(types, vec![FieldType::Text, FieldType::Select]);
    assert_eq!(decoded.fields.fields(), builder.fields().fields());
}

#[tokio::test]
async fn design_save_preview_submit() {
    let service = service();
    let mut builder = FormBuilder::new();
    builder.set_form_name("Contact");

    let name = builder.fields_mut().insert(FieldType::Text, None);
    let email = builder.fields_mut().insert(FieldType::Email, None);
    let topic = builder.fields_mut().insert(FieldType::Radio, Some(0));
    {
        let fields = builder.fields_mut();
        fields.update(&name, FieldPatch::label("Name")).unwrap();
        fields.update(&name, FieldPatch::required(true)).unwrap();
        fields.update(&email, FieldPatch::label("Email")).unwrap();
        fields.add_option(&topic).unwrap();
        fields.rename_option(&topic, 2, "Sales").unwrap();
        fields.move_field(0, 2).unwrap();
    }
    let order: Vec<_> = builder.fields().iter().map(|f| f.id().clone()).collect();
    assert_eq!(order, vec![name.clone(), email.clone(), topic.clone()]);

    let saved = service.save_schema(&mut builder).await.unwrap();
    assert_eq!(service.list_schemas().await.unwrap().len(), 1);

    let mut session = FormBuilder::new();
    service.load_schema(&mut session, &saved.id).await.unwrap();
    assert_eq!(session.fields().fields(), builder.fields().fields());
    assert!(session.toggle_preview());

    {
        let (fields, preview) = session.preview_parts().unwrap();
        let rendered = preview.render(fields);
        assert!(matches!(rendered[2].shape, InputShape::RadioGroup { ref options } if options.len() == 3));
        preview.set_value(email.clone(), "not-an-email");
    }

    let err = service.submit_preview(&mut session).await.unwrap_err();
    let FormsError::InvalidForm(errors) = err else {
        panic!("expected InvalidForm");
    };
    assert_eq!(errors.get(&name), Some("Name is required"));
    assert_eq!(errors.get(&email), Some(INVALID_EMAIL_MESSAGE));
    assert!(errors.get(&topic).is_none());

    {
        let preview = session.preview_mut().unwrap();
        preview.set_value(name.clone(), "Ada");
        preview.set_value(email.clone(), "ada@example.com");
        preview.set_value(topic.clone(), "Sales");
        assert!(preview.errors().get(&name).is_none());
    }

    let receipt = service.submit_preview(&mut session).await.unwrap();
    let preview = session.preview().unwrap();
    assert_eq!(preview.phase(), PreviewPhase::Editing);
    assert!(preview.values().is_empty());
    assert!(preview.notice().is_none());

    let records = service.list_submissions(Some(&saved.id)).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, receipt.submission_id);
    assert_eq!(records[0].data[&email], FieldValue::from("ada@example.com"));
}
