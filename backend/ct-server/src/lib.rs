pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contact::{
        contact::submit_contact,
        contact_response::{CONTACT_RECEIVED_MESSAGE, ContactResponse},
    },
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
