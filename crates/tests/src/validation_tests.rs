use pretty_assertions::assert_eq;
use shared_types::validation::{
    is_valid_dob, is_valid_email, sanitize_dob_input, validate_credentials, validate_new_patient,
    INVALID_DOB_MESSAGE, INVALID_EMAIL_MESSAGE, NAME_REQUIRED_MESSAGE,
};
use shared_types::{AppErrorKind, Credentials};

#[test]
fn test_email_validator() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("john.doe@email.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("has space@x.io"));
}

#[test]
fn test_dob_validator_is_syntactic() {
    assert!(is_valid_dob("15031990"));
    assert!(!is_valid_dob("32011990"));
    assert!(!is_valid_dob("150319"));
    assert!(is_valid_dob("31021990"));
}

#[test]
fn test_dob_input_is_digits_only_and_capped() {
    assert_eq!(sanitize_dob_input("15/03/1990"), "15031990");
    assert_eq!(sanitize_dob_input("1503199012"), "15031990");
    assert_eq!(sanitize_dob_input("ab"), "");
}

#[test]
fn test_credentials_report_email_first() {
    let err = validate_credentials(&Credentials::new("bad", "1")).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.get("email").map(String::as_str), Some(INVALID_EMAIL_MESSAGE));

    let err = validate_credentials(&Credentials::new("john@x.com", "1")).unwrap_err();
    assert_eq!(err.field_errors.get("dob").map(String::as_str), Some(INVALID_DOB_MESSAGE));

    assert!(validate_credentials(&Credentials::new("john@x.com", "15031990")).is_ok());
}

#[test]
fn test_new_patient_collects_all_field_errors() {
    let err = validate_new_patient("  ", "nope", "99").unwrap_err();
    assert_eq!(err.field_errors.len(), 3);
    assert_eq!(err.field_errors["name"], NAME_REQUIRED_MESSAGE);
    assert!(validate_new_patient("Jane Smith", "jane@x.io", "22071992").is_ok());
}
