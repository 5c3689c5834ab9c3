use super::contract::{FieldSpec, FieldType, InputSchema, StringFormat};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// One constraint a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted/indexed path, e.g. `steps[1].description`; empty for the root.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid arguments for tool '{tool}': {}", join_violations(.violations))]
pub struct ValidationError {
    pub tool: String,
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check `arguments` against `schema`, reporting every violation found.
///
/// `null` counts as an empty object. Keys the schema does not declare are
/// ignored, and an optional field set to `null` counts as absent.
pub fn check_arguments(schema: &InputSchema, arguments: &Value) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    match arguments {
        Value::Null => check_fields(&schema.fields, &Map::new(), "", &mut violations),
        Value::Object(map) => check_fields(&schema.fields, map, "", &mut violations),
        other => violations.push(FieldViolation::new(
            "",
            format!("arguments must be an object, received {}", kind_of(other)),
        )),
    }
    violations
}

fn check_fields(
    fields: &[FieldSpec],
    object: &Map<String, Value>,
    prefix: &str,
    violations: &mut Vec<FieldViolation>,
) {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.clone()
        } else {
            format!("{prefix}.{}", field.name)
        };
        match object.get(&field.name) {
            None | Some(Value::Null) if field.required => {
                violations.push(FieldViolation::new(path, "is required"));
            }
            None | Some(Value::Null) => {}
            Some(value) => check_value(&field.ty, value, &path, violations),
        }
    }
}

fn check_value(ty: &FieldType, value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
    match (ty, value) {
        (FieldType::String { format }, Value::String(text)) => {
            if let Some(StringFormat::Url) = format {
                if Url::parse(text).is_err() {
                    violations.push(FieldViolation::new(path, "must be a valid URL"));
                }
            }
        }
        (FieldType::Integer { minimum }, Value::Number(number)) => {
            if number.is_f64() {
                violations.push(FieldViolation::new(
                    path,
                    format!("expected integer, received {number}"),
                ));
            } else if let Some(min) = minimum {
                let below = number.as_i64().is_some_and(|n| n < *min);
                if below {
                    violations.push(FieldViolation::new(
                        path,
                        format!("must be greater than or equal to {min}"),
                    ));
                }
            }
        }
        (FieldType::Number, Value::Number(_)) => {}
        (FieldType::Array(items), Value::Array(elements)) => {
            for (index, element) in elements.iter().enumerate() {
                check_value(items, element, &format!("{path}[{index}]"), violations);
            }
        }
        (FieldType::Object(fields), Value::Object(map)) => {
            check_fields(fields, map, path, violations);
        }
        (expected, other) => violations.push(FieldViolation::new(
            path,
            format!("expected {}, received {}", expected.label(), kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
