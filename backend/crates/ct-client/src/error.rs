use ct_config::ConfigError;
use ct_core::ValidationErrors;
use ct_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while delivering a submission
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network failure or timeout
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response without field errors
    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// Submission rejected field by field
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    /// Transport cannot be built from this configuration
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    /// Direct store insert failed
    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        ClientError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for network failures and timeouts
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, ClientError::Http { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<ConfigError> for ClientError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        ClientError::Config {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        ClientError::Store {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
