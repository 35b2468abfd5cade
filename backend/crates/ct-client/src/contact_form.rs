//! Contact form controller.
//!
//! Owns the draft while the visitor edits it and guarantees at most one
//! submission in flight per form instance.

use crate::{ClientError, Notification, SubmissionTransport};

use ct_core::{ContactInput, ContactSubmission, ValidationErrors};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

/// Result of one press of the submit button
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Delivered; the draft was cleared
    Sent(Notification),
    /// Delivery failed; the draft is untouched so the visitor can retry
    Failed {
        notification: Notification,
        error: ClientError,
    },
    /// Draft failed client-side validation; nothing was sent
    Invalid(ValidationErrors),
    /// Another submission is still in flight; nothing was sent
    Busy,
}

impl SubmitOutcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Sent(notification) | Self::Failed { notification, .. } => Some(notification),
            Self::Invalid(_) | Self::Busy => None,
        }
    }
}

pub struct ContactForm {
    transport: Arc<dyn SubmissionTransport>,
    draft: Mutex<ContactInput>,
    submitting: AtomicBool,
}

impl ContactForm {
    pub fn new(transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            transport,
            draft: Mutex::new(ContactInput::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Copy of the current draft
    pub fn draft(&self) -> ContactInput {
        self.lock_draft().clone()
    }

    /// Edit the draft in place
    pub fn update_draft(&self, edit: impl FnOnce(&mut ContactInput)) {
        edit(&mut self.lock_draft());
    }

    /// Immediate, in-form validation of the current draft
    pub fn validate_draft(&self) -> Result<ContactSubmission, ValidationErrors> {
        self.lock_draft().validate()
    }

    /// True while a submission is in flight (submit affordance disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Validate the draft and send it through the transport.
    ///
    /// Returns [`SubmitOutcome::Busy`] without sending when a previous
    /// submit has not resolved yet. There is no cancellation.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            debug!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        };

        let submission = match self.validate_draft() {
            Ok(submission) => submission,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        match self.transport.send(&submission).await {
            Ok(()) => {
                *self.lock_draft() = ContactInput::default();
                SubmitOutcome::Sent(Notification::sent())
            }
            Err(error) => {
                warn!(
                    "Contact submission via {} failed: {}",
                    self.transport.name(),
                    error
                );
                SubmitOutcome::Failed {
                    notification: Notification::failed(),
                    error,
                }
            }
        }
    }

    fn lock_draft(&self) -> MutexGuard<'_, ContactInput> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the submitting flag; releases it on drop whatever the outcome
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
