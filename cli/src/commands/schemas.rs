//! Schema commands

use std::fs;

use anyhow::Context;
use colored::Colorize;
use formsmith_forms::{
    Field, FieldPatch, FormBuilder, FormService, FormUseCases, Schema, SchemaCodec, SchemaId, SchemaSummary,
};
use tabled::Tabled;

use super::parse_field_spec;
use crate::output::{OutputFormat, TableRows};
use crate::SchemaCommands;

#[derive(Tabled)]
pub struct SchemaRow {
    pub id: String,
    pub name: String,
    pub created: String,
    pub updated: String,
}

#[derive(Tabled)]
pub struct FieldRow {
    pub id: String,
    #[tabled(rename = "type")]
    pub field_type: String,
    pub label: String,
    pub required: bool,
    pub options: String,
}

impl TableRows for Vec<SchemaSummary> {
    type Row = SchemaRow;

    fn rows(&self) -> Vec<SchemaRow> {
        self.iter()
            .map(|s| SchemaRow {
                id: s.id.to_string(),
                name: s.name.clone(),
                created: s.created_at.to_rfc3339(),
                updated: s.updated_at.to_rfc3339(),
            })
            .collect()
    }
}

impl TableRows for Schema {
    type Row = FieldRow;

    fn rows(&self) -> Vec<FieldRow> {
        self.fields.iter().map(field_row).collect()
    }
}

fn field_row(field: &Field) -> FieldRow {
    FieldRow {
        id: field.id().to_string(),
        field_type: field.field_type().to_string(),
        label: field.label().to_string(),
        required: field.required(),
        options: field.options().map(|o| o.join(", ")).unwrap_or_default(),
    }
}

pub async fn handle(action: SchemaCommands, service: &FormService, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        SchemaCommands::List => {
            let schemas = service.list_schemas().await?;
            format.print(&schemas)?;
        }
        SchemaCommands::Show { id } => {
            let mut builder = FormBuilder::new();
            service.load_schema(&mut builder, &SchemaId::from(id.as_str())).await?;
            let mut schema = builder.encode();
            schema.id = builder.current_schema_id().cloned();
            if matches!(format, OutputFormat::Table) {
                println!("{}", schema.name.bold());
            }
            format.print(&schema)?;
        }
        SchemaCommands::Create { name, fields } => {
            let mut builder = FormBuilder::new();
            builder.set_form_name(name);
            for spec in &fields {
                let (field_type, label, required) = parse_field_spec(spec)?;
                let id = builder.fields_mut().insert(field_type, None);
                if let Some(label) = label {
                    builder.fields_mut().update(&id, FieldPatch::label(label))?;
                }
                if required {
                    builder.fields_mut().update(&id, FieldPatch::required(true))?;
                }
            }
            let saved = service.save_schema(&mut builder).await?;
            println!("{} {}", "Created schema:".green(), saved.id);
        }
        SchemaCommands::Import { file, name } => {
            let raw = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
            let decoded = SchemaCodec::decode_str(&raw).with_context(|| format!("decoding {}", file.display()))?;

            let mut builder = FormBuilder::new();
            builder.apply_loaded(decoded);
            if let Some(name) = name {
                builder.set_form_name(name);
            }
            let saved = service.save_schema(&mut builder).await?;
            println!(
                "{} {} ({} fields)",
                "Imported schema:".green(),
                saved.id,
                builder.fields().len()
            );
        }
    }
    Ok(())
}
