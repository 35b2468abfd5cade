
use ct_core::{ContactInput, ContactSubmission};

pub(crate) fn submission(name: &str) -> ContactSubmission {
    ContactInput {
        name: name.to_string(),
        email: "jo@example.com".to_string(),
        project: "Need a redesign soon".to_string(),
        ..ContactInput::default()
    }
    .validate()
    .unwrap()
}
