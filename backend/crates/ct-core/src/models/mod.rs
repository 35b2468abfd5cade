pub mod contact_input;
pub mod contact_submission;
pub mod field_error;
pub mod field_error_kind;
pub mod validation_errors;
