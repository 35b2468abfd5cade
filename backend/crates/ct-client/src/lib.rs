//! ct-client library
//!
//! Client side of the contact pipeline: the form controller that owns the
//! draft, and the interchangeable transports that deliver a submission.

pub mod contact_form;
pub mod error;
pub mod notification;
pub mod transport;

#[cfg(test)]
mod tests;

pub use contact_form::{ContactForm, SubmitOutcome};
pub use error::{ClientError, Result as ClientResult};
pub use notification::{Notification, NotificationVariant};
pub use transport::{
    SubmissionTransport, api_transport::ApiTransport, form_transport::FormTransport,
    store_transport::StoreTransport,
};
