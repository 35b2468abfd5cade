use crate::{ClientResult, SubmissionTransport};

use ct_core::ContactSubmission;
use ct_store::ContactStore;

use std::sync::Arc;

use async_trait::async_trait;

/// Inserts straight into the store, skipping the API endpoint
pub struct StoreTransport {
    store: Arc<dyn ContactStore>,
}

impl StoreTransport {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmissionTransport for StoreTransport {
    async fn send(&self, submission: &ContactSubmission) -> ClientResult<()> {
        self.store.insert(submission).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "store"
    }
}
