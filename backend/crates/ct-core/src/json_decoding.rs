//! JSON decoding of the contact form.
//!
//! Only a body that is not JSON at all is a parse error. Wrongly typed
//! fields become field errors on those fields, reported together with
//! whatever the remaining fields fail.

use crate::{
    ContactInput, CoreError, CoreResult, FieldError, FieldErrorKind, HONEYPOT_FIELD,
    ValidationErrors,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Wire order of the fields; field errors are reported in this order
const FIELD_ORDER: [&str; 5] = ["name", "email", "company", "project", "services"];

/// Decode a JSON request body into raw input.
///
/// A body that is valid JSON but not an object decodes as an empty record,
/// so every required field is reported missing.
#[track_caller]
pub fn decode_json(body: &[u8]) -> CoreResult<ContactInput> {
    let caller = Location::caller();

    let value: Value = serde_json::from_slice(body).map_err(|source| CoreError::Json {
        source,
        location: ErrorLocation::from(caller),
    })?;

    let fields = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut type_errors = Vec::new();
    let input = ContactInput {
        name: text(&fields, "name", &mut type_errors),
        email: text(&fields, "email", &mut type_errors),
        company: optional_text(&fields, "company", &mut type_errors),
        project: text(&fields, "project", &mut type_errors),
        services: services(&fields, &mut type_errors),
        bot_field: honeypot(&fields),
    };

    // Spam is discarded before validation, whatever its shape
    if type_errors.is_empty() || input.is_spam() {
        return Ok(input);
    }

    let mut errors = type_errors;
    if let Err(rule_errors) = input.validate() {
        let remaining: Vec<FieldError> = rule_errors
            .into_inner()
            .into_iter()
            .filter(|e| !errors.iter().any(|t| t.field == e.field))
            .collect();
        errors.extend(remaining);
    }
    errors.sort_by_key(|e| field_rank(&e.field));

    Err(CoreError::Validation {
        errors: ValidationErrors::new(errors),
        location: ErrorLocation::from(caller),
    })
}

fn text(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> String {
    optional_text(fields, field, errors).unwrap_or_default()
}

fn optional_text(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(type_error(field, "string", other));
            None
        }
    }
}

fn services(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Vec<String> {
    match fields.get("services") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        Some(other) => {
            errors.push(type_error("services", "array of strings", other));
            Vec::new()
        }
    }
}

fn honeypot(fields: &Map<String, Value>) -> Option<String> {
    match fields.get(HONEYPOT_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn type_error(field: &str, expected: &str, actual: &Value) -> FieldError {
    FieldError::new(
        field,
        FieldErrorKind::InvalidFormat,
        &format!("Expected {}, received {}", expected, json_type(actual)),
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}
