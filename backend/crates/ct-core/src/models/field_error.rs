use crate::FieldErrorKind;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears on the wire (e.g. "name", "email")
    pub field: String,
    /// Machine-readable reason
    #[serde(rename = "code")]
    pub kind: FieldErrorKind,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, kind: FieldErrorKind, message: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.kind)
    }
}
