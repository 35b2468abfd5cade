use crate::transport::check_response;
use crate::{ClientResult, SubmissionTransport};

use ct_core::ContactSubmission;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

pub const CONTACT_PATH: &str = "/api/contact";

/// JSON POST to the site's own contact endpoint
pub struct ApiTransport {
    endpoint: String,
    client: ReqwestClient,
}

impl ApiTransport {
    /// # Arguments
    /// * `base_url` - Site URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Network timeout for one send
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
            client: ReqwestClient::builder().timeout(timeout).build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for ApiTransport {
    async fn send(&self, submission: &ContactSubmission) -> ClientResult<()> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;
        check_response(response).await
    }

    fn name(&self) -> &'static str {
        "api"
    }
}
