
use crate::{ClientError, ClientResult, SubmissionTransport};

use ct_core::{ContactInput, ContactSubmission};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

/// Transport that blocks each send until released, counting calls
pub(crate) struct GatedTransport {
    pub(crate) calls: AtomicUsize,
    pub(crate) gate: Notify,
    pub(crate) fail: bool,
}

impl GatedTransport {
    pub(crate) fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
            fail,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionTransport for GatedTransport {
    async fn send(&self, _submission: &ContactSubmission) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;

        if self.fail {
            return Err(ClientError::api_error(
                503,
                "Service Unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

pub(crate) fn fill_valid(draft: &mut ContactInput) {
    draft.name = "Jo".to_string();
    draft.email = "jo@example.com".to_string();
    draft.project = "Need a redesign soon".to_string();
    draft.services = vec!["UI Design".to_string()];
}
