//! Submission transports.
//!
//! One logical operation ("deliver this submission") with swappable
//! backends chosen by [`TransportConfig`](ct_config::TransportConfig).

pub mod api_transport;
pub mod form_transport;
pub mod store_transport;

use crate::{ApiTransport, ClientError, ClientResult, FormTransport, StoreTransport};

use ct_config::{Config, TransportKind};
use ct_core::{ContactSubmission, ValidationErrors};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// Delivers a validated submission to wherever it gets persisted
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> ClientResult<()>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Build the transport selected by `config.transport.kind`.
///
/// The store transport requires `store.backend = "rest"`.
pub fn from_config(config: &Config) -> ClientResult<Arc<dyn SubmissionTransport>> {
    config.validate_store_transport()?;

    let timeout = Duration::from_secs(config.transport.timeout_secs);
    let base_url = &config.transport.base_url;

    let transport: Arc<dyn SubmissionTransport> = match config.transport.kind {
        TransportKind::Api => Arc::new(ApiTransport::new(base_url, timeout)?),
        TransportKind::Form => Arc::new(FormTransport::new(base_url, timeout)?),
        TransportKind::Store => Arc::new(StoreTransport::new(ct_store::from_config(
            &config.store,
        )?)),
    };

    Ok(transport)
}

/// Error body returned by the contact endpoint
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<ValidationErrors>,
}

/// Map a response to success, field errors, or an API error
pub(crate) async fn check_response(response: Response) -> ClientResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // Error bodies from other hosts may not be JSON at all
    let body: ErrorBody = response.json().await.unwrap_or_default();

    if status == StatusCode::BAD_REQUEST
        && let Some(errors) = body.errors.filter(|e| !e.is_empty())
    {
        return Err(ClientError::validation(errors));
    }

    let message = body.message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    Err(ClientError::api_error(status.as_u16(), message))
}
