use crate::tests::valid_input;
use crate::validation::{EMAIL_INVALID_MESSAGE, NAME_TOO_SHORT_MESSAGE, PROJECT_TOO_SHORT_MESSAGE};
use crate::{ContactInput, ContactValidator, FieldErrorKind, MIN_PROJECT_LENGTH};

// =========================================================================
// Required fields
// =========================================================================

#[test]
fn test_valid_input_passes() {
    let submission = ContactValidator::validate(&valid_input()).unwrap();

    assert_eq!(submission.name(), "Jo");
    assert_eq!(submission.email(), "jo@example.com");
    assert_eq!(submission.project(), "Need a redesign soon");
    assert_eq!(submission.company(), None);
    assert!(submission.services().is_empty());
}

#[test]
fn test_short_names_fail_with_too_short() {
    for name in ["", "J", "é"] {
        let input = ContactInput {
            name: name.to_string(),
            ..valid_input()
        };

        let errors = ContactValidator::validate(&input).unwrap_err();

        assert!(errors.has("name", FieldErrorKind::TooShort), "name {name:?}");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.field("name").unwrap().message, NAME_TOO_SHORT_MESSAGE);
    }
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    let single = ContactInput {
        name: "李".to_string(),
        ..valid_input()
    };
    let double = ContactInput {
        name: "李明".to_string(),
        ..valid_input()
    };

    assert!(ContactValidator::validate(&single).is_err());
    assert!(ContactValidator::validate(&double).is_ok());
}

#[test]
fn test_whitespace_padding_does_not_count_towards_length() {
    let input = ContactInput {
        name: "  J  ".to_string(),
        ..valid_input()
    };

    let errors = ContactValidator::validate(&input).unwrap_err();
    assert!(errors.has("name", FieldErrorKind::TooShort));
}

#[test]
fn test_blank_project_of_minimum_length_fails() {
    let input = ContactInput {
        project: " ".repeat(MIN_PROJECT_LENGTH),
        ..valid_input()
    };

    let errors = ContactValidator::validate(&input).unwrap_err();
    assert!(errors.has("project", FieldErrorKind::TooShort));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_emails_without_at_or_domain_fail_with_invalid_format() {
    for email in [
        "",
        "jo",
        "jo.example.com",
        "jo@",
        "@example.com",
        "jo@example",
        "jo@@example.com",
        "jo..doe@example.com",
        ".jo@example.com",
        "jo @example.com",
    ] {
        let input = ContactInput {
            email: email.to_string(),
            ..valid_input()
        };

        let errors = ContactValidator::validate(&input).unwrap_err();

        assert!(
            errors.has("email", FieldErrorKind::InvalidFormat),
            "email {email:?} should be rejected"
        );
        assert_eq!(errors.field("email").unwrap().message, EMAIL_INVALID_MESSAGE);
    }
}

#[test]
fn test_common_email_shapes_are_accepted() {
    for email in [
        "jo@example.com",
        "jo.doe@studio.example.co.uk",
        "jo+contact@example.io",
        "o'neil@example.com",
        "JO_DOE@EXAMPLE.COM",
    ] {
        assert!(ContactValidator::is_valid_email(email), "{email}");
    }
}

#[test]
fn test_short_project_fails_even_when_everything_else_is_valid() {
    let input = ContactInput {
        project: "too short".to_string(),
        company: Some("Acme".to_string()),
        services: vec!["UI Design".to_string()],
        ..valid_input()
    };

    let errors = ContactValidator::validate(&input).unwrap_err();

    assert!(errors.has("project", FieldErrorKind::TooShort));
    assert_eq!(
        errors.field("project").unwrap().message,
        PROJECT_TOO_SHORT_MESSAGE
    );
}

#[test]
fn test_every_failing_field_is_reported_in_field_order() {
    let input = ContactInput {
        name: "J".to_string(),
        email: "nope".to_string(),
        project: "short".to_string(),
        ..ContactInput::default()
    };

    let errors = ContactValidator::validate(&input).unwrap_err();
    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();

    assert_eq!(fields, vec!["name", "email", "project"]);
}

#[test]
fn test_empty_input_reports_all_required_fields() {
    let errors = ContactValidator::validate(&ContactInput::default()).unwrap_err();

    assert!(errors.has("name", FieldErrorKind::TooShort));
    assert!(errors.has("email", FieldErrorKind::InvalidFormat));
    assert!(errors.has("project", FieldErrorKind::TooShort));
}

// =========================================================================
// Optional fields
// =========================================================================

#[test]
fn test_company_and_services_never_fail() {
    let input = ContactInput {
        company: Some(String::new()),
        services: vec![String::new(), "   ".to_string()],
        ..valid_input()
    };

    let submission = ContactValidator::validate(&input).unwrap();

    assert_eq!(submission.company(), None);
    assert!(submission.services().is_empty());
}

#[test]
fn test_optional_fields_are_normalized() {
    let input = ContactInput {
        company: Some("  Acme Studio ".to_string()),
        services: vec![
            " UX Research".to_string(),
            "".to_string(),
            "Design Systems ".to_string(),
        ],
        ..valid_input()
    };

    let submission = ContactValidator::validate(&input).unwrap();

    assert_eq!(submission.company(), Some("Acme Studio"));
    assert_eq!(submission.services(), ["UX Research", "Design Systems"]);
}

#[test]
fn test_honeypot_does_not_affect_validation() {
    let input = ContactInput {
        bot_field: Some("http://spam.example".to_string()),
        ..valid_input()
    };

    assert!(ContactValidator::validate(&input).is_ok());
}

// =========================================================================
// Purity
// =========================================================================

#[test]
fn test_validation_is_idempotent() {
    let valid = valid_input();
    let invalid = ContactInput {
        name: "J".to_string(),
        project: "too short".to_string(),
        ..valid_input()
    };

    assert_eq!(
        ContactValidator::validate(&valid),
        ContactValidator::validate(&valid)
    );
    assert_eq!(
        ContactValidator::validate(&invalid),
        ContactValidator::validate(&invalid)
    );
}

#[test]
fn test_field_error_code_serializes_as_variant_name() {
    let input = ContactInput {
        name: "J".to_string(),
        ..valid_input()
    };
    let errors = ContactValidator::validate(&input).unwrap_err();

    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(json[0]["field"], "name");
    assert_eq!(json[0]["code"], "TooShort");
    assert_eq!(json[0]["message"], NAME_TOO_SHORT_MESSAGE);
}
