use crate::ContactResponse;

use ct_core::ContactInput;

#[test]
fn test_received_response_serializes_without_errors() {
    let json = serde_json::to_value(ContactResponse::received()).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your message! We will get back to you soon."
    );
    assert!(json.get("errors").is_none());
}

#[test]
fn test_failure_response_carries_errors() {
    let errors = ContactInput {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        project: "too short".into(),
        ..ContactInput::default()
    }
    .validate()
    .unwrap_err();

    let json =
        serde_json::to_value(ContactResponse::failure("Validation error", Some(errors))).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "project");
    assert_eq!(json["errors"][0]["code"], "TooShort");
}
