mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;
mod transport_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::{StoreBackend, StoreConfig};
pub use transport_config::{TransportConfig, TransportKind};

const CONFIG_DIR_ENV: &str = "CT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ct";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
const MIN_MAX_BODY_BYTES: usize = 1024;
const MAX_MAX_BODY_BYTES: usize = 1024 * 1024;

const DEFAULT_STORE_TABLE: &str = "contacts";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

const DEFAULT_TRANSPORT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TRANSPORT_TIMEOUT_SECS: u64 = 15;

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
