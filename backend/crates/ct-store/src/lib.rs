//! Persistence for contact submissions.
//!
//! The store is an opaque collaborator with a single insert operation.
//! Backends are chosen by [`StoreConfig`] at process start.

pub mod contact_store;
pub mod error;
pub mod log_store;
pub mod memory_store;
pub mod rest_store;

#[cfg(test)]
mod tests;

pub use contact_store::ContactStore;
pub use error::{Result as StoreResult, StoreError};
pub use log_store::LogStore;
pub use memory_store::MemoryStore;
pub use rest_store::RestStore;

use ct_config::{StoreBackend, StoreConfig};

use std::sync::Arc;

use log::{info, warn};

/// Build the configured store backend
pub fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn ContactStore>> {
    let store: Arc<dyn ContactStore> = match config.backend {
        StoreBackend::Log => Arc::new(LogStore),
        StoreBackend::Memory => {
            warn!("Memory store selected: submissions are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Rest => Arc::new(RestStore::from_config(config)?),
    };

    info!("Contact store initialized: {}", store.name());
    Ok(store)
}
