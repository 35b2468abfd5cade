use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ServerConfig, StoreBackend, StoreConfig, TransportConfig, TransportKind,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub transport: TransportConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CT_CONFIG_DIR env var, else use ./.ct/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply CT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CT_CONFIG_DIR env var > ./.ct/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.transport.validate()?;
        self.validate_store_transport()?;

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::config(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Reject the store transport unless submissions land in the REST store.
    pub fn validate_store_transport(&self) -> ConfigErrorResult<()> {
        if self.transport.kind == TransportKind::Store && self.store.backend != StoreBackend::Rest {
            return Err(ConfigError::transport(format!(
                "transport.kind = \"store\" requires store.backend = \"rest\", got \"{}\"",
                self.store.backend
            )));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max body {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );

        match self.store.backend {
            StoreBackend::Rest => info!(
                "  store: rest {} table={} key={} timeout={}s",
                self.store.url.as_deref().unwrap_or("<unset>"),
                self.store.table,
                if self.store.key.is_some() {
                    "set"
                } else {
                    "unset"
                },
                self.store.timeout_secs
            ),
            backend => info!("  store: {}", backend),
        }

        info!(
            "  transport: {} {} (timeout {}s)",
            self.transport.kind, self.transport.base_url, self.transport.timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("CT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("CT_SERVER_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Store
        Self::apply_env_strict("CT_STORE_BACKEND", &mut self.store.backend)?;
        Self::apply_env_option_string("CT_STORE_URL", &mut self.store.url);
        Self::apply_env_option_string("CT_STORE_KEY", &mut self.store.key);
        Self::apply_env_string("CT_STORE_TABLE", &mut self.store.table);
        Self::apply_env_parse("CT_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);

        // Transport
        Self::apply_env_strict("CT_TRANSPORT_KIND", &mut self.transport.kind)?;
        Self::apply_env_string("CT_TRANSPORT_BASE_URL", &mut self.transport.base_url);
        Self::apply_env_parse(
            "CT_TRANSPORT_TIMEOUT_SECS",
            &mut self.transport.timeout_secs,
        );

        // Logging
        Self::apply_env_parse("CT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CT_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override, failing on unparseable values
    fn apply_env_strict<T>(var_name: &str, target: &mut T) -> ConfigErrorResult<()>
    where
        T: FromStr<Err = ConfigError>,
    {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.parse()?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
