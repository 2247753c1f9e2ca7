//! Syntactic format checks for sign-in and patient registration forms.
//!
//! These checks are purely lexical. A date of birth like `31021990` passes
//! even though February has no 31st.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{AppError, Credentials};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_DOB_MESSAGE: &str = "Please enter DOB in ddmmyyyy format";
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";

/// Maximum length of a raw `ddmmyyyy` date of birth.
pub const DOB_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static DOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[012])[0-9]{4}$").expect("dob pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `ddmmyyyy` with day 01-31 and month 01-12.
pub fn is_valid_dob(dob: &str) -> bool {
    DOB_RE.is_match(dob)
}

/// Normalize DOB keystrokes: keep ASCII digits, cap at eight characters.
pub fn sanitize_dob_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(DOB_LEN)
        .collect()
}

/// Check sign-in credentials, reporting the first failing field.
///
/// Email is checked before the date of birth, so a form with both fields
/// wrong shows the email message.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), AppError> {
    if !is_valid_email(&credentials.email) {
        return Err(AppError::invalid_field("email", INVALID_EMAIL_MESSAGE));
    }
    if !is_valid_dob(&credentials.dob_raw) {
        return Err(AppError::invalid_field("dob", INVALID_DOB_MESSAGE));
    }
    Ok(())
}

/// Check the clinic's add-patient form, collecting every failing field.
pub fn validate_new_patient(name: &str, email: &str, dob: &str) -> Result<(), AppError> {
    let mut field_errors = HashMap::new();
    if name.trim().is_empty() {
        field_errors.insert("name".to_string(), NAME_REQUIRED_MESSAGE.to_string());
    }
    if !is_valid_email(email) {
        field_errors.insert("email".to_string(), "Please enter a valid email".to_string());
    }
    if !is_valid_dob(dob) {
        field_errors.insert("dob".to_string(), INVALID_DOB_MESSAGE.to_string());
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Validation failed", field_errors))
    }
}
