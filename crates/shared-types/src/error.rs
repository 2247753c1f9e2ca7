use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown when an email/DOB sign-in fails.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Message shown when an identity-provider sign-in fails.
pub const GOOGLE_LOGIN_FAILED_MESSAGE: &str = "Google login failed. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Client-side format check failed before any session call.
    ValidationError,
    /// Email/DOB sign-in was refused.
    LoginFailed,
    /// Identity-provider sign-in was refused.
    GoogleLoginFailed,
    /// A sign-in attempt is already pending.
    LoginInProgress,
    /// The auth service could not be reached.
    NetworkError,
    /// The auth service answered with an error.
    ServerError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::LoginFailed => write!(f, "LoginFailed"),
            AppErrorKind::GoogleLoginFailed => write!(f, "GoogleLoginFailed"),
            AppErrorKind::LoginInProgress => write!(f, "LoginInProgress"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured error shared by the session layer and the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Single-field validation failure; the field message doubles as the summary.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let field_errors = HashMap::from([(field.to_string(), message.clone())]);
        Self::validation(message, field_errors)
    }

    pub fn login_failed() -> Self {
        Self::new(AppErrorKind::LoginFailed, LOGIN_FAILED_MESSAGE)
    }

    pub fn google_login_failed() -> Self {
        Self::new(AppErrorKind::GoogleLoginFailed, GOOGLE_LOGIN_FAILED_MESSAGE)
    }

    pub fn login_in_progress() -> Self {
        Self::new(
            AppErrorKind::LoginInProgress,
            "A sign-in attempt is already in progress.",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NetworkError, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ServerError, message)
    }

    /// Parse an AppError from an auth service response body.
    ///
    /// Accepts raw JSON or text with a JSON object embedded in it
    /// (proxies sometimes wrap the payload).
    pub fn from_response_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }

    /// True for failures the user resolves by resubmitting the form.
    pub fn is_retryable(&self) -> bool {
        !matches!(self.kind, AppErrorKind::LoginInProgress)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_failed_uses_generic_message() {
        let err = AppError::login_failed();
        assert_eq!(err.kind, AppErrorKind::LoginFailed);
        assert_eq!(err.message, LOGIN_FAILED_MESSAGE);
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn google_failure_has_its_own_kind() {
        let err = AppError::google_login_failed();
        assert_eq!(err.kind, AppErrorKind::GoogleLoginFailed);
        assert_eq!(err.message, GOOGLE_LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn invalid_field_populates_map() {
        let err = AppError::invalid_field("dob", "Please enter DOB in ddmmyyyy format");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("dob").map(String::as_str),
            Some("Please enter DOB in ddmmyyyy format")
        );
        assert_eq!(err.message, "Please enter DOB in ddmmyyyy format");
    }

    #[test]
    fn from_response_body_parses_raw_json() {
        let json = r#"{"kind":"ServerError","message":"upstream down"}"#;
        let err = AppError::from_response_body(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::ServerError);
        assert_eq!(err.message, "upstream down");
    }

    #[test]
    fn from_response_body_parses_wrapped_json() {
        let wrapped = r#"502 Bad Gateway: {"kind":"NetworkError","message":"timeout"} (proxy)"#;
        let err = AppError::from_response_body(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NetworkError);
    }

    #[test]
    fn from_response_body_rejects_garbage() {
        assert!(AppError::from_response_body("").is_none());
        assert!(AppError::from_response_body("<html>oops</html>").is_none());
    }

    #[test]
    fn display_includes_kind() {
        assert_eq!(
            AppError::network("unreachable").to_string(),
            "NetworkError: unreachable"
        );
    }

    #[test]
    fn in_progress_is_not_retryable() {
        assert!(!AppError::login_in_progress().is_retryable());
        assert!(AppError::login_failed().is_retryable());
    }
}
