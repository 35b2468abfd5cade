use crate::{ContactStore, StoreResult};

use ct_core::ContactSubmission;

use async_trait::async_trait;
use log::info;

/// Logs each submission and reports success. Nothing is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStore;

#[async_trait]
impl ContactStore for LogStore {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        info!(
            "Contact form submission: name={:?} email={:?} company={:?} services={:?} project={:?}",
            submission.name(),
            submission.email(),
            submission.company(),
            submission.services(),
            submission.project()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
