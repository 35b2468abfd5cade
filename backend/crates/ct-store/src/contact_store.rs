use crate::StoreResult;

use ct_core::ContactSubmission;

use async_trait::async_trait;

/// Insert-only persistence for contact submissions.
///
/// Implementations make a single attempt per call; retrying is up to
/// whoever re-submits.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist one validated submission
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()>;

    /// Verify the backend is reachable and the table exists
    async fn check(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;
}
