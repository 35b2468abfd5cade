use crate::{ContactStore, StoreResult};

use ct_core::ContactSubmission;

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

/// Keeps submissions in process memory, in insertion order.
///
/// Grows without bound; meant for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ContactSubmission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far
    pub fn records(&self) -> Vec<ContactSubmission> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
