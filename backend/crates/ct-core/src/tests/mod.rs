mod validation;

use crate::ContactInput;

/// Input that passes every rule
pub(crate) fn valid_input() -> ContactInput {
    ContactInput {
        name: "Jo".to_string(),
        email: "jo@example.com".to_string(),
        project: "Need a redesign soon".to_string(),
        ..ContactInput::default()
    }
}
