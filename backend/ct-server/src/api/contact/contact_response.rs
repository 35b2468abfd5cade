use ct_core::ValidationErrors;

use serde::Serialize;

pub const CONTACT_RECEIVED_MESSAGE: &str =
    "Thank you for your message! We will get back to you soon.";

/// Body of every contact endpoint response, success or not
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ContactResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_RECEIVED_MESSAGE.to_string(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: Option<ValidationErrors>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }
}
