//! Raw contact form contents, before validation.

use crate::{ContactSubmission, ContactValidator, CoreResult, ValidationErrors, decode_json};

use serde::{Deserialize, Serialize};

/// Untrusted contact record as typed by the visitor or received over HTTP.
///
/// Every field defaults when absent so that a missing field surfaces as a
/// validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub project: String,
    pub services: Vec<String>,
    /// Honeypot. Hidden from people, so only bots fill it in.
    #[serde(rename = "bot-field", skip_serializing_if = "Option::is_none")]
    pub bot_field: Option<String>,
}

impl ContactInput {
    /// Parse a JSON request body.
    ///
    /// Wrongly typed fields fail as
    /// [`CoreError::Validation`](crate::CoreError::Validation); only a body
    /// that is not JSON fails as [`CoreError::Json`](crate::CoreError::Json).
    #[track_caller]
    pub fn from_json(body: &[u8]) -> CoreResult<Self> {
        decode_json(body)
    }

    /// True when the honeypot field carries any value
    pub fn is_spam(&self) -> bool {
        self.bot_field.as_deref().is_some_and(|v| !v.is_empty())
    }

    pub fn validate(&self) -> Result<ContactSubmission, ValidationErrors> {
        ContactValidator::validate(self)
    }
}

impl From<ContactSubmission> for ContactInput {
    fn from(submission: ContactSubmission) -> Self {
        let (name, email, company, project, services) = submission.into_parts();
        Self {
            name,
            email,
            company,
            project,
            services,
            bot_field: None,
        }
    }
}
