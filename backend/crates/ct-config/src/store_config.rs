use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORE_TABLE, DEFAULT_STORE_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which persistence backend receives contact submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Log submissions and report success
    #[default]
    Log,
    /// Hosted REST table (PostgREST convention)
    Rest,
    /// Keep submissions in process memory. For tests and local runs only:
    /// nothing survives a restart and the record list is never pruned.
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Rest => "rest",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "rest" => Ok(Self::Rest),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::store(format!(
                "store.backend must be log, rest or memory, got '{}'",
                other
            ))),
        }
    }
}

/// Persistence backend settings.
///
/// `url` and `key` are the hosted store's base URL and API key. The key is a
/// secret and is never logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            key: None,
            table: String::from(DEFAULT_STORE_TABLE),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.table.is_empty()
            || !self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::store(format!(
                "store.table must be a non-empty identifier, got '{}'",
                self.table
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::store(format!(
                "store.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.backend == StoreBackend::Rest {
            match self.url.as_deref() {
                Some(url) if is_http_url(url) => {}
                Some(url) => {
                    return Err(ConfigError::store(format!(
                        "store.url must start with http:// or https://, got '{}'",
                        url
                    )));
                }
                None => {
                    return Err(ConfigError::store(
                        "store.url is required when store.backend = \"rest\"",
                    ));
                }
            }

            if self.key.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::store(
                    "store.key is required when store.backend = \"rest\"",
                ));
            }
        }

        Ok(())
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
