use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason a single field failed validation.
///
/// Serialized with the variant name (`"TooShort"`, `"InvalidFormat"`) so the
/// code survives the trip from server to client unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    TooShort,
    InvalidFormat,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "TooShort",
            Self::InvalidFormat => "InvalidFormat",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
