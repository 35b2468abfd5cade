//! Contact endpoint handler
//!
//! Received -> Validating -> Rejected | Persisting -> Persisted | StoreFailed.
//! Nothing is written to the store unless validation passes.

use crate::{ApiResult, AppState, ContactResponse};

use ct_core::{ContactInput, decode_form};

use axum::{
    Json,
    extract::{State, rejection::BytesRejection},
};
use bytes::Bytes;
use http::{HeaderMap, header::CONTENT_TYPE};
use log::{debug, info};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// POST /api/contact (also /.netlify/functions/api/contact and /)
///
/// Accepts JSON or form-encoded bodies, chosen by `Content-Type`. Every
/// outcome, including an unreadable body, answers with a `ContactResponse`.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let body = body?;
    debug!("Contact submission received ({} bytes)", body.len());

    let input = parse_body(&headers, &body)?;

    if input.is_spam() {
        info!("Honeypot field filled; discarding submission");
        return Ok(Json(ContactResponse::received()));
    }

    let submission = input.validate()?;

    state.store.insert(&submission).await?;
    info!(
        "Contact submission persisted via {} store",
        state.store.name()
    );

    Ok(Json(ContactResponse::received()))
}

fn parse_body(headers: &HeaderMap, body: &[u8]) -> ApiResult<ContactInput> {
    let is_form = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(FORM_URLENCODED));

    let input = if is_form {
        decode_form(body)?
    } else {
        ContactInput::from_json(body)?
    };
    Ok(input)
}
