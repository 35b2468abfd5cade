//! Hosted REST table backend.
//!
//! Speaks the PostgREST convention used by hosted backend-as-a-service
//! databases: `{url}/rest/v1/{table}`, the API key in both the `apikey`
//! header and a bearer token.

use crate::{ContactStore, StoreError, StoreResult};

use ct_config::StoreConfig;
use ct_core::ContactSubmission;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};

const REST_PATH: &str = "rest/v1";

pub struct RestStore {
    endpoint: String,
    table: String,
    key: String,
    client: ReqwestClient,
}

impl RestStore {
    /// Create a store for `table` under `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `key` - API key sent with every request
    /// * `table` - Target table name
    /// * `timeout` - Per-request network timeout
    pub fn new(base_url: &str, key: &str, table: &str, timeout: Duration) -> StoreResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: format!("{}/{}/{}", base_url.trim_end_matches('/'), REST_PATH, table),
            table: table.to_string(),
            key: key.to_string(),
            client,
        })
    }

    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| StoreError::config("store.url is not set"))?;
        let key = config
            .key
            .as_deref()
            .ok_or_else(|| StoreError::config("store.key is not set"))?;

        Self::new(
            url,
            key,
            &config.table,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Turn a non-2xx response into [`StoreError::Rejected`]
    #[track_caller]
    fn rejected(status: StatusCode, message: String) -> StoreError {
        StoreError::Rejected {
            status: status.as_u16(),
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    async fn body_text(response: Response) -> String {
        match response.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => String::from("<empty body>"),
            Err(e) => format!("<unreadable body: {}>", e),
        }
    }
}

#[async_trait]
impl ContactStore for RestStore {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        debug!("Inserting contact submission into {}", self.table);

        let response = self
            .request(Method::POST, &self.endpoint)
            .header("Prefer", "return=minimal")
            .json(&[submission])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = Self::body_text(response).await;
        Err(Self::rejected(status, message))
    }

    async fn check(&self) -> StoreResult<()> {
        let url = format!("{}?select=*", self.endpoint);
        let response = self
            .request(Method::HEAD, &url)
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = if status == StatusCode::NOT_FOUND {
            format!("table '{}' does not exist", self.table)
        } else {
            Self::body_text(response).await
        };
        Err(Self::rejected(status, message))
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}
