//! Schema codec
//!
//! Turns builder state into a portable schema document and back.
//! `decode` accepts both the bare schema shape (`{ name, fields }`) and
//! the stored record shape (`{ id, name, schema: { name, fields }, ... }`).

use serde_json::{Map, Value};

use crate::domain::aggregates::{Field, FieldList, Schema};
use crate::domain::value_objects::{FieldId, FieldType, SchemaId};
use crate::error::{FormsError, Result};

/// Name used when the builder's form name is blank
pub const DEFAULT_FORM_NAME: &str = "Untitled Form";

/// Builder state recovered from a schema document
#[derive(Clone, Debug)]
pub struct DecodedSchema {
    pub id: Option<SchemaId>,
    pub name: String,
    pub fields: FieldList,
}

pub struct SchemaCodec;

impl SchemaCodec {
    /// Snapshot `fields` under `name`, blank names becoming
    /// [`DEFAULT_FORM_NAME`]
    pub fn encode(fields: &FieldList, name: &str) -> Schema {
        let name = match name.trim() {
            "" => DEFAULT_FORM_NAME,
            trimmed => trimmed,
        };
        Schema {
            id: None,
            name: name.to_string(),
            fields: fields.fields().to_vec(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Rehydrate a field list, preserving stored order and ids
    pub fn decode(document: &Value) -> Result<DecodedSchema> {
        let root = document
            .as_object()
            .ok_or_else(|| malformed("schema document is not an object"))?;
        let nested = root.get("schema").and_then(Value::as_object);

        let entries = match root.get("fields") {
            Some(fields) if !fields.is_null() => fields,
            _ => nested
                .and_then(|s| s.get("fields"))
                .ok_or_else(|| malformed("schema has no fields"))?,
        };
        let entries = entries
            .as_array()
            .ok_or_else(|| malformed("fields is not an array"))?;

        let fields = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| decode_field(i, entry))
            .collect::<Result<Vec<_>>>()?;

        let name = root
            .get("name")
            .or_else(|| nested.and_then(|s| s.get("name")))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let id = root.get("id").and_then(Value::as_str).map(SchemaId::from_string);

        Ok(DecodedSchema {
            id,
            name,
            fields: FieldList::from_fields(fields)?,
        })
    }

    pub fn decode_str(json: &str) -> Result<DecodedSchema> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| malformed(format!("invalid JSON: {e}")))?;
        Self::decode(&document)
    }
}

fn decode_field(index: usize, entry: &Value) -> Result<Field> {
    let obj = entry
        .as_object()
        .ok_or_else(|| malformed(format!("field {index} is not an object")))?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(format!("field {index} has no id")))?;
    let field_type: FieldType = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(format!("field {index} has no type")))?
        .parse()
        .map_err(|e| malformed(format!("field {index}: {e}")))?;

    let label = string_attr(obj, index, "label")?;
    let placeholder = string_attr(obj, index, "placeholder")?;
    let required = match obj.get("required") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(malformed(format!("field {index}: required is not a boolean"))),
    };
    let options = match obj.get("options") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|o| {
                    o.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| malformed(format!("field {index}: option is not a string")))
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(_) => return Err(malformed(format!("field {index}: options is not an array"))),
    };

    Ok(Field::from_parts(
        FieldId::from_string(id),
        field_type,
        label,
        placeholder,
        required,
        options,
    ))
}

fn string_attr(obj: &Map<String, Value>, index: usize, key: &str) -> Result<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(malformed(format!("field {index}: {key} is not a string"))),
    }
}

fn malformed(reason: impl Into<String>) -> FormsError {
    FormsError::MalformedSchema(reason.into())
}
