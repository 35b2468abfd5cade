use crate::store_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TRANSPORT_BASE_URL, DEFAULT_TRANSPORT_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the client delivers a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// JSON POST to the site's /api/contact endpoint
    #[default]
    Api,
    /// Form-encoded POST to the site root (static-hosting form detection)
    Form,
    /// Insert directly through the configured store
    Store,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Form => "form",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "form" => Ok(Self::Form),
            "store" => Ok(Self::Store),
            other => Err(ConfigError::transport(format!(
                "transport.kind must be api, form or store, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub kind: TransportKind,
    /// Site address the HTTP transports post to
    pub base_url: String,
    /// Network timeout for one send; expiry counts as a transport failure
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            base_url: String::from(DEFAULT_TRANSPORT_BASE_URL),
            timeout_secs: DEFAULT_TRANSPORT_TIMEOUT_SECS,
        }
    }
}

impl TransportConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.kind != TransportKind::Store && !is_http_url(&self.base_url) {
            return Err(ConfigError::transport(format!(
                "transport.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::transport(format!(
                "transport.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
