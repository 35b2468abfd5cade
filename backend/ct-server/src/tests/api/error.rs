use crate::ApiError;

use ct_core::{ContactInput, FieldErrorKind};
use ct_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_errors() {
    let errors = ContactInput::default().validate().unwrap_err();

    let (status, json) = body_json(ApiError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation error");
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[0]["code"], FieldErrorKind::TooShort.as_str());
}

#[tokio::test]
async fn test_bad_request_returns_400_without_errors() {
    let error = ApiError::BadRequest {
        message: "Unknown form 'newsletter'".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Unknown form 'newsletter'");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_internal_error_is_opaque() {
    let error = ApiError::from(StoreError::Rejected {
        status: 401,
        message: "permission denied for table contacts".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Internal server error");
    assert!(!json.to_string().contains("permission denied"));
}

#[test]
fn test_json_parse_error_converts_to_bad_request() {
    let core_error = ContactInput::from_json(b"{not json").unwrap_err();

    let error = ApiError::from(core_error);

    assert!(matches!(error, ApiError::BadRequest { .. }));
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_wrongly_typed_json_converts_to_validation() {
    let core_error = ContactInput::from_json(br#"{"email": false}"#).unwrap_err();

    let error = ApiError::from(core_error);

    match &error {
        ApiError::Validation { errors, .. } => {
            assert!(errors.has("email", FieldErrorKind::InvalidFormat));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_rejection_keeps_its_status_in_contact_shape() {
    let error = ApiError::BodyRejected {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        message: "Failed to buffer the request body: length limit exceeded".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["success"], false);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("length limit exceeded")
    );
}
