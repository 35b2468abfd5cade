pub mod error;
pub mod form_encoding;
pub mod json_decoding;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use form_encoding::{
    FORM_NAME, FORM_NAME_FIELD, HONEYPOT_FIELD, SERVICES_FIELD, decode_form, encode_form,
};
pub use json_decoding::decode_json;
pub use models::contact_input::ContactInput;
pub use models::contact_submission::ContactSubmission;
pub use models::field_error::FieldError;
pub use models::field_error_kind::FieldErrorKind;
pub use models::validation_errors::ValidationErrors;
pub use validation::{ContactValidator, MIN_NAME_LENGTH, MIN_PROJECT_LENGTH};
