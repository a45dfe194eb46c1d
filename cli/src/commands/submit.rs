//! Submit command

use anyhow::{anyhow, bail};
use colored::Colorize;
use formsmith_forms::domain::value_objects::ValueKind;
use formsmith_forms::{FieldValue, FormBuilder, FormService, FormUseCases, FormsError, SchemaId};

use super::{parse_assignment, parse_flag};
use crate::output::OutputFormat;

pub async fn handle(schema_id: &str, values: &[String], service: &FormService, format: OutputFormat) -> anyhow::Result<()> {
    let mut builder = FormBuilder::new();
    service.load_schema(&mut builder, &SchemaId::from(schema_id)).await?;
    builder.toggle_preview();

    let entered = {
        let (fields, session) = builder.preview_parts()?;
        for raw in values {
            let (key, text) = parse_assignment(raw)?;
            let field = fields
                .iter()
                .find(|f| f.id().as_str() == key || f.label() == key)
                .ok_or_else(|| anyhow!("form has no field {:?}", key))?;
            let value = match field.field_type().rule().value_kind {
                ValueKind::Flag => FieldValue::from(parse_flag(&text)?),
                ValueKind::Text | ValueKind::FileName => FieldValue::from(text),
            };
            session.set_value(field.id().clone(), value);
        }
        let mut entered: Vec<(String, FieldValue)> = session.values_by_label(fields).into_iter().collect();
        entered.sort_by(|a, b| a.0.cmp(&b.0));
        entered
    };

    match service.submit_preview(&mut builder).await {
        Ok(receipt) => match format {
            OutputFormat::Table => {
                println!("{} {}", "Submitted:".green(), receipt.submission_id);
                for (label, value) in &entered {
                    match value {
                        FieldValue::Text(text) => println!("  {}: {}", label, text),
                        FieldValue::Flag(flag) => println!("  {}: {}", label, flag),
                    }
                }
            }
            _ => format.print_value(&receipt)?,
        },
        Err(FormsError::InvalidForm(errors)) => {
            for field in builder.fields().iter() {
                if let Some(message) = errors.get(field.id()) {
                    eprintln!("  {}: {}", field.label(), message.red());
                }
            }
            bail!("{} field(s) failed validation", errors.len());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
