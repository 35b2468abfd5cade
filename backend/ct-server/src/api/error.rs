//! REST API error types
//!
//! Every variant renders as a `ContactResponse` with `success: false`.
//! Store failures are logged in full and answered with an opaque 500.

use crate::ContactResponse;

use ct_core::{CoreError, ValidationErrors};
use ct_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failure (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    /// Unparseable body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Body could not be read, e.g. over the size limit (413 and friends)
    #[error("Body rejected ({status}): {message} {location}")]
    BodyRejected {
        status: StatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, never returned.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        let body = match self {
            ApiError::Validation { errors, .. } => {
                log::info!("Contact submission rejected: {}", errors);
                ContactResponse::failure(VALIDATION_ERROR_MESSAGE, Some(errors))
            }
            ApiError::BadRequest { message, location } => {
                log::warn!("Bad contact request: {} {}", message, location);
                ContactResponse::failure(message, None)
            }
            ApiError::BodyRejected {
                message, location, ..
            } => {
                log::warn!("Contact request body rejected: {} {}", message, location);
                ContactResponse::failure(message, None)
            }
            ApiError::Internal { .. } => ContactResponse::failure(INTERNAL_ERROR_MESSAGE, None),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body parse errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { errors, .. } => ApiError::Validation { errors, location },
            CoreError::InvalidForm { message, .. } => ApiError::BadRequest { message, location },
            CoreError::Json { source, .. } => ApiError::BadRequest {
                message: format!("Invalid JSON body: {}", source),
                location,
            },
        }
    }
}

/// Convert body extraction failures to API errors
impl From<BytesRejection> for ApiError {
    #[track_caller]
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRejected {
            status: rejection.status(),
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::Internal {
            message: format!("Contact store failure: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
