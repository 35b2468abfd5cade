//! Contact form validation rules.
//!
//! The same rules run in the form controller (immediate feedback) and in
//! the API endpoint (never trust the client).

use crate::{ContactInput, ContactSubmission, FieldError, FieldErrorKind, ValidationErrors};

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PROJECT_LENGTH: usize = 10;

/// Name has fewer than [`MIN_NAME_LENGTH`] characters after trimming
pub const NAME_TOO_SHORT_MESSAGE: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address";
/// Project has fewer than [`MIN_PROJECT_LENGTH`] characters after trimming,
/// so a description of only spaces never passes
pub const PROJECT_TOO_SHORT_MESSAGE: &str = "Please provide more details about your project";

// local@label.label.tld, no leading/trailing/double dots in the local part
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(?:\.[A-Za-z0-9_'+\-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("Failed to compile email regex")
});

/// Validates contact form input
pub struct ContactValidator;

impl ContactValidator {
    /// Validate and normalize a contact record.
    ///
    /// Every rule runs, so the error list names all offending fields.
    /// Text is trimmed before measuring; a blank company becomes `None`
    /// and blank service tags are dropped.
    pub fn validate(input: &ContactInput) -> Result<ContactSubmission, ValidationErrors> {
        let name = input.name.trim();
        let email = input.email.trim();
        let project = input.project.trim();

        let errors: Vec<FieldError> = [
            Self::validate_min_length(name, "name", MIN_NAME_LENGTH, NAME_TOO_SHORT_MESSAGE),
            Self::validate_email(email),
            Self::validate_min_length(
                project,
                "project",
                MIN_PROJECT_LENGTH,
                PROJECT_TOO_SHORT_MESSAGE,
            ),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        let company = input
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);

        let services = input
            .services
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(ContactSubmission::new(
            name.to_string(),
            email.to_string(),
            company,
            project.to_string(),
            services,
        ))
    }

    /// Validate a minimum length in characters (not bytes)
    pub fn validate_min_length(
        value: &str,
        field: &str,
        min_length: usize,
        message: &str,
    ) -> Result<(), FieldError> {
        if value.chars().count() < min_length {
            return Err(FieldError::new(field, FieldErrorKind::TooShort, message));
        }

        Ok(())
    }

    pub fn validate_email(value: &str) -> Result<(), FieldError> {
        if !Self::is_valid_email(value) {
            return Err(FieldError::new(
                "email",
                FieldErrorKind::InvalidFormat,
                EMAIL_INVALID_MESSAGE,
            ));
        }

        Ok(())
    }

    pub fn is_valid_email(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}
