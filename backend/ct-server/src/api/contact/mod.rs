#[allow(clippy::module_inception)]
pub mod contact;
pub mod contact_response;
