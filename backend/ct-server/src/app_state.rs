use crate::ServerResult;

use ct_config::Config;
use ct_store::ContactStore;

use std::sync::Arc;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, max_body_bytes: usize) -> Self {
        Self {
            store,
            max_body_bytes,
        }
    }

    /// Build the configured store and wrap it with the server limits
    pub fn from_config(config: &Config) -> ServerResult<Self> {
        let store = ct_store::from_config(&config.store)?;
        Ok(Self::new(store, config.server.max_body_bytes))
    }
}
