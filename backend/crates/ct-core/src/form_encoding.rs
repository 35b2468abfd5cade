//! `application/x-www-form-urlencoded` encoding of the contact form.
//!
//! Follows the static-hosting form-detection convention: the body is tagged
//! with `form-name=contact`, services repeat as `services[]`, and a
//! `bot-field` honeypot is always sent empty.

use crate::{ContactInput, ContactSubmission, CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use url::form_urlencoded;

pub const FORM_NAME: &str = "contact";
pub const FORM_NAME_FIELD: &str = "form-name";
pub const HONEYPOT_FIELD: &str = "bot-field";
pub const SERVICES_FIELD: &str = "services[]";

/// Encode a validated submission as a form body
pub fn encode_form(submission: &ContactSubmission) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    serializer
        .append_pair(FORM_NAME_FIELD, FORM_NAME)
        .append_pair("name", submission.name())
        .append_pair("email", submission.email());

    if let Some(company) = submission.company() {
        serializer.append_pair("company", company);
    }

    serializer.append_pair("project", submission.project());

    for service in submission.services() {
        serializer.append_pair(SERVICES_FIELD, service);
    }

    serializer.append_pair(HONEYPOT_FIELD, "");

    serializer.finish()
}

/// Decode a form body into raw input.
///
/// `form-name` is optional, but when present it must be `contact`.
/// Unknown fields are ignored.
#[track_caller]
pub fn decode_form(body: &[u8]) -> CoreResult<ContactInput> {
    let location = ErrorLocation::from(Location::caller());
    let mut input = ContactInput::default();

    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            FORM_NAME_FIELD => {
                if value != FORM_NAME {
                    return Err(CoreError::InvalidForm {
                        message: format!("unexpected form-name '{}'", value),
                        location,
                    });
                }
            }
            "name" => input.name = value.into_owned(),
            "email" => input.email = value.into_owned(),
            "company" => input.company = Some(value.into_owned()),
            "project" => input.project = value.into_owned(),
            SERVICES_FIELD | "services" => input.services.push(value.into_owned()),
            HONEYPOT_FIELD => input.bot_field = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(input)
}
