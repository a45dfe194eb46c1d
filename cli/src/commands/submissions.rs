//! Submission commands

use formsmith_forms::{FieldValue, FormService, FormUseCases, SchemaId, SubmissionRecord};
use tabled::Tabled;

use crate::output::{OutputFormat, TableRows};
use crate::SubmissionCommands;

#[derive(Tabled)]
pub struct SubmissionRow {
    pub id: String,
    pub schema: String,
    pub submitted: String,
    pub values: String,
}

impl TableRows for Vec<SubmissionRecord> {
    type Row = SubmissionRow;

    fn rows(&self) -> Vec<SubmissionRow> {
        self.iter()
            .map(|r| {
                let mut values: Vec<String> = r
                    .data
                    .iter()
                    .map(|(id, value)| match value {
                        FieldValue::Text(text) => format!("{}={}", id, text),
                        FieldValue::Flag(flag) => format!("{}={}", id, flag),
                    })
                    .collect();
                values.sort();
                SubmissionRow {
                    id: r.id.to_string(),
                    schema: r.schema_id.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".into()),
                    submitted: r.submitted_at.to_rfc3339(),
                    values: values.join("\n"),
                }
            })
            .collect()
    }
}

pub async fn handle(action: SubmissionCommands, service: &FormService, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        SubmissionCommands::List { schema_id } => {
            let schema_id = schema_id.map(|id| SchemaId::from(id.as_str()));
            let records = service.list_submissions(schema_id.as_ref()).await?;
            format.print(&records)?;
        }
    }
    Ok(())
}
