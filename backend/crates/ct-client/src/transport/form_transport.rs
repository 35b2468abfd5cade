use crate::transport::check_response;
use crate::{ClientResult, SubmissionTransport};

use ct_core::{ContactSubmission, encode_form};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form-encoded POST to the site root.
///
/// Static hosts detect the form by its `form-name` field; the honeypot is
/// always sent empty.
pub struct FormTransport {
    endpoint: String,
    client: ReqwestClient,
}

impl FormTransport {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            endpoint: format!("{}/", base_url.trim_end_matches('/')),
            client: ReqwestClient::builder().timeout(timeout).build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for FormTransport {
    async fn send(&self, submission: &ContactSubmission) -> ClientResult<()> {
        debug!("POST {} (form-encoded)", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_form(submission))
            .send()
            .await?;
        check_response(response).await
    }

    fn name(&self) -> &'static str {
        "form"
    }
}
