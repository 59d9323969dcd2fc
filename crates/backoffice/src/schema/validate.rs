//! The shared payload validator.
//!
//! [`validate`] interprets an [`EntitySchema`] against an untyped payload. It
//! checks every declared field before reporting, so a single call returns
//! every problem the form has.
//!
//! ## Normalization
//!
//! - Strings are trimmed before any length or format check.
//! - JSON `null` and blank strings mean "no value".
//! - Numbers, integers and booleans also accept their string forms, since
//!   form controls submit text.
//! - Lists accept an array of strings or a comma-separated string; blank
//!   items are dropped.
//! - Undeclared keys are dropped.
//!
//! ## Modes
//!
//! | | Create | Update |
//! |-|--------|--------|
//! | `id` | ignored | required UUID |
//! | required fields | must be present | may be absent |
//! | defaults | applied | not applied |
//! | blank optional field | absent | cleared |
//! | no declared field present | n/a | single "at least one field" error |

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::failure::{FieldError, ValidationFailure};
use super::rules::{is_valid_email, is_valid_url, validate_slug};
use super::spec::{label_for, EntitySchema, FieldKind, FieldSpec, Mode};
use super::value::FieldValue;

/// Raw key-value input, as submitted by a form.
pub type Payload = serde_json::Map<String, Value>;

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedPayload {
    pub mode: Mode,
    /// Target record; always set in update mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub fields: BTreeMap<String, FieldValue>,
    /// Optional fields an update explicitly blanked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cleared: Vec<String>,
}

impl ValidatedPayload {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            id: None,
            fields: BTreeMap::new(),
            cleared: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Names of all fields this payload sets or clears.
    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .chain(self.cleared.iter().map(String::as_str))
    }
}

/// Result of checking one field's raw value.
enum Checked {
    Missing,
    Blank,
    Value(FieldValue),
}

/// Validate `payload` against `schema` in the given `mode`.
pub fn validate(
    payload: &Payload,
    schema: &EntitySchema,
    mode: Mode,
) -> Result<ValidatedPayload, ValidationFailure> {
    let mut out = ValidatedPayload::new(mode);
    let mut errors = Vec::new();

    if mode == Mode::Update {
        let changed = schema
            .fields
            .iter()
            .filter(|field| payload.contains_key(field.name))
            .count();
        if changed == 0 {
            tracing::debug!(entity = schema.name, "update payload changes nothing");
            return Err(ValidationFailure::no_change());
        }
        match check_id(payload.get(EntitySchema::ID_FIELD)) {
            Ok(id) => out.id = Some(id),
            Err(error) => errors.push(error),
        }
    }

    for field in schema.fields {
        match check_field(field, payload.get(field.name)) {
            Ok(Checked::Value(value)) => {
                out.fields.insert(field.name.to_string(), value);
            }
            Ok(Checked::Missing) | Ok(Checked::Blank) if field.required && mode == Mode::Create => {
                errors.push(FieldError::new(
                    field.name,
                    format!("{} is required", field.label()),
                ));
            }
            Ok(Checked::Blank) if field.required => {
                errors.push(FieldError::new(
                    field.name,
                    format!("{} cannot be empty", field.label()),
                ));
            }
            Ok(Checked::Blank) if mode == Mode::Update => {
                out.cleared.push(field.name.to_string());
            }
            Ok(Checked::Missing) | Ok(Checked::Blank) => {
                if mode == Mode::Create {
                    if let Some(default) = field.default {
                        out.fields.insert(field.name.to_string(), default.to_value());
                    }
                }
            }
            Err(message) => errors.push(FieldError::new(field.name, message)),
        }
    }

    for refinement in schema.refinements {
        if let Some(error) = refinement.check(&out.fields) {
            errors.push(error);
        }
    }

    for key in payload.keys() {
        if key != EntitySchema::ID_FIELD && !schema.declares(key) {
            tracing::debug!(entity = schema.name, key = %key, "dropping undeclared key");
        }
    }

    match ValidationFailure::from_errors(errors) {
        Some(failure) => {
            tracing::debug!(
                entity = schema.name,
                ?mode,
                fields = ?failure.fields(),
                "payload rejected"
            );
            Err(failure)
        }
        None => Ok(out),
    }
}

pub(crate) fn check_id(raw: Option<&Value>) -> Result<Uuid, FieldError> {
    let label = label_for(EntitySchema::ID_FIELD);
    let text = match raw {
        None | Some(Value::Null) => {
            return Err(FieldError::new(
                EntitySchema::ID_FIELD,
                format!("{} is required", label),
            ))
        }
        Some(Value::String(s)) => s.trim(),
        Some(_) => "",
    };
    Uuid::parse_str(text).map_err(|_| {
        FieldError::new(
            EntitySchema::ID_FIELD,
            format!("{} must be a valid UUID", label),
        )
    })
}

fn check_field(field: &FieldSpec, raw: Option<&Value>) -> Result<Checked, String> {
    let raw = match raw {
        None => return Ok(Checked::Missing),
        Some(Value::Null) => return Ok(Checked::Blank),
        Some(value) => value,
    };
    let label = field.label();

    match field.kind {
        FieldKind::Number | FieldKind::Integer => check_number(field, raw, &label),
        FieldKind::Boolean => check_bool(raw, &label),
        FieldKind::TextList => check_list(field, raw, &label),
        _ => {
            let Value::String(s) = raw else {
                return Err(format!("{} must be a string", label));
            };
            let text = s.trim();
            if text.is_empty() {
                return Ok(Checked::Blank);
            }
            check_text(field, text, &label).map(Checked::Value)
        }
    }
}

/// Checks a trimmed, non-empty string against a string-shaped kind.
fn check_text(field: &FieldSpec, text: &str, label: &str) -> Result<FieldValue, String> {
    if field.kind.is_textual() {
        check_length(field, text, label)?;
    }

    match field.kind {
        FieldKind::Text => Ok(FieldValue::Text(text.to_string())),
        FieldKind::Enum(values) => {
            if values.contains(&text) {
                Ok(FieldValue::Text(text.to_string()))
            } else {
                Err(format!("{} must be one of: {}", label, values.join(", ")))
            }
        }
        FieldKind::Slug => validate_slug(text)
            .map(|_| FieldValue::Text(text.to_string()))
            .map_err(|e| format!("{} {}", label, e)),
        FieldKind::Email => {
            if is_valid_email(text) {
                Ok(FieldValue::Text(text.to_string()))
            } else {
                Err(format!("{} must be a valid email address", label))
            }
        }
        FieldKind::Url => {
            if is_valid_url(text) {
                Ok(FieldValue::Text(text.to_string()))
            } else {
                Err(format!("{} must be a valid URL", label))
            }
        }
        FieldKind::UuidRef => Uuid::parse_str(text)
            .map(FieldValue::Uuid)
            .map_err(|_| format!("{} must be a valid UUID", label)),
        FieldKind::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(FieldValue::Date)
            .map_err(|_| format!("{} must be a date in YYYY-MM-DD format", label)),
        FieldKind::DateTime => DateTime::parse_from_rfc3339(text)
            .map(|dt| FieldValue::DateTime(dt.with_timezone(&Utc)))
            .map_err(|_| format!("{} must be an RFC 3339 date-time", label)),
        FieldKind::Number | FieldKind::Integer | FieldKind::Boolean | FieldKind::TextList => {
            unreachable!("non-string kinds are checked before check_text")
        }
    }
}

fn check_length(field: &FieldSpec, text: &str, label: &str) -> Result<(), String> {
    let len = text.chars().count();
    if let Some(min) = field.min_length {
        if len < min {
            return Err(format!("{} must be at least {} characters", label, min));
        }
    }
    if let Some(max) = field.max_length {
        if len > max {
            return Err(format!("{} must be at most {} characters", label, max));
        }
    }
    Ok(())
}

fn check_number(field: &FieldSpec, raw: &Value, label: &str) -> Result<Checked, String> {
    let text = match raw {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(Checked::Blank);
            }
            Some(s)
        }
        _ => None,
    };

    let (value, number) = if field.kind == FieldKind::Integer {
        // No f64 round trip: values above 2^53 must stay exact.
        let parsed = match (raw, text) {
            (Value::Number(n), _) => n.as_i64(),
            (_, Some(s)) => s.parse::<i64>().ok(),
            _ => None,
        };
        let Some(n) = parsed else {
            return Err(format!("{} must be an integer", label));
        };
        (FieldValue::Integer(n), n as f64)
    } else {
        let parsed = match (raw, text) {
            (Value::Number(n), _) => n.as_f64(),
            (_, Some(s)) => s.parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n.is_finite() => (FieldValue::Number(n), n),
            _ => return Err(format!("{} must be a number", label)),
        }
    };

    if let Some(min) = field.min {
        if number < min {
            return Err(format!("{} must be at least {}", label, min));
        }
    }
    if let Some(max) = field.max {
        if number > max {
            return Err(format!("{} must be at most {}", label, max));
        }
    }
    Ok(Checked::Value(value))
}

fn check_bool(raw: &Value, label: &str) -> Result<Checked, String> {
    match raw {
        Value::Bool(b) => Ok(Checked::Value(FieldValue::Bool(*b))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(Checked::Blank),
            "true" => Ok(Checked::Value(FieldValue::Bool(true))),
            "false" => Ok(Checked::Value(FieldValue::Bool(false))),
            _ => Err(format!("{} must be true or false", label)),
        },
        _ => Err(format!("{} must be true or false", label)),
    }
}

fn check_list(field: &FieldSpec, raw: &Value, label: &str) -> Result<Checked, String> {
    let items: Vec<&str> = match raw {
        Value::Array(values) => {
            let mut items = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::String(s) => items.push(s.trim()),
                    _ => return Err(format!("{} must be a list of strings", label)),
                }
            }
            items
        }
        Value::String(s) => s.split(',').map(str::trim).collect(),
        _ => return Err(format!("{} must be a list of strings", label)),
    };

    let items: Vec<&str> = items.into_iter().filter(|item| !item.is_empty()).collect();
    if items.is_empty() {
        return Ok(Checked::Blank);
    }
    for item in &items {
        let len = item.chars().count();
        if let Some(min) = field.min_length {
            if len < min {
                return Err(format!(
                    "Each {} item must be at least {} characters",
                    label.to_lowercase(),
                    min
                ));
            }
        }
        if let Some(max) = field.max_length {
            if len > max {
                return Err(format!(
                    "Each {} item must be at most {} characters",
                    label.to_lowercase(),
                    max
                ));
            }
        }
    }
    Ok(Checked::Value(FieldValue::List(
        items.into_iter().map(str::to_string).collect(),
    )))
}
