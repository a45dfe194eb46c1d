//! CLI Commands

pub mod config;
pub mod schemas;
pub mod submissions;
pub mod submit;

use anyhow::{anyhow, bail};
use formsmith_forms::FieldType;

/// Parse `<type>[=<label>][*]` into type, optional label and required flag
pub fn parse_field_spec(spec: &str) -> anyhow::Result<(FieldType, Option<String>, bool)> {
    let (body, required) = match spec.trim().strip_suffix('*') {
        Some(rest) => (rest, true),
        None => (spec.trim(), false),
    };
    let (kind, label) = match body.split_once('=') {
        Some((kind, label)) => (kind, Some(label.trim().to_string())),
        None => (body, None),
    };
    let field_type = kind.trim().parse::<FieldType>().map_err(|e| anyhow!(e))?;
    Ok((field_type, label.filter(|l| !l.is_empty()), required))
}

/// Split `key=value` at the first `=`
pub fn parse_assignment(raw: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => bail!("expected <field>=<value>, got {:?}", raw),
    }
}

pub fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        other => bail!("expected a yes/no value, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_forms() {
        assert_eq!(parse_field_spec("text").unwrap(), (FieldType::Text, None, false));
        assert_eq!(parse_field_spec("email*").unwrap(), (FieldType::Email, None, true));
        assert_eq!(
            parse_field_spec("select=Favourite colour*").unwrap(),
            (FieldType::Select, Some("Favourite colour".to_string()), true)
        );
        assert!(parse_field_spec("slider=Volume").is_err());
    }

    #[test]
    fn test_assignment_keeps_equals_in_value() {
        assert_eq!(parse_assignment("Note=a=b").unwrap(), ("Note".to_string(), "a=b".to_string()));
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("novalue").is_err());
    }

    #[test]
    fn test_flags() {
        assert!(parse_flag("Yes").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
