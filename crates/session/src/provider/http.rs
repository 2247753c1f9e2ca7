use async_trait::async_trait;
use serde::Serialize;
use shared_types::{AppError, Credentials, Identity, Role};

use super::AuthProvider;

/// Identity backend reached over JSON/HTTP.
///
/// `POST {base}/api/auth/login` with `{ role, email?, dob_raw? }` and
/// `POST {base}/api/auth/google` with `{ role }`; both answer with an
/// [`Identity`] body on success and an `AppError` body otherwise.
#[derive(Debug, Clone)]
pub struct HttpAuthProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct LoginRequest<'a> {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dob_raw: Option<&'a str>,
}

impl HttpAuthProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post(
        &self,
        path: &str,
        body: &LoginRequest<'_>,
        on_reject: fn() -> AppError,
    ) -> Result<Identity, AppError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "auth service unreachable");
                AppError::network(format!("Could not reach the sign-in service: {e}"))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(on_reject());
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, "auth service returned an error");
            return Err(AppError::from_response_body(&text)
                .unwrap_or_else(|| AppError::server(format!("Sign-in service returned {status}"))));
        }

        let identity: Identity = response
            .json()
            .await
            .map_err(|e| AppError::server(format!("Malformed sign-in response: {e}")))?;

        if identity.role != body.role {
            tracing::warn!(requested = %body.role, issued = %identity.role, "role mismatch from auth service");
            return Err(on_reject());
        }
        Ok(identity)
    }
}

#[async_trait(?Send)]
impl AuthProvider for HttpAuthProvider {
    async fn authenticate(
        &self,
        role: Role,
        credentials: Option<&Credentials>,
    ) -> Result<Identity, AppError> {
        let body = LoginRequest {
            role,
            email: credentials.map(|c| c.email.as_str()),
            dob_raw: credentials.map(|c| c.dob_raw.as_str()),
        };
        self.post("/api/auth/login", &body, AppError::login_failed).await
    }

    async fn authenticate_with_google(&self, role: Role) -> Result<Identity, AppError> {
        let body = LoginRequest {
            role,
            email: None,
            dob_raw: None,
        };
        self.post("/api/auth/google", &body, AppError::google_login_failed)
            .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let provider = HttpAuthProvider::new("https://auth.example.com/");
        assert_eq!(
            provider.endpoint("/api/auth/login"),
            "https://auth.example.com/api/auth/login"
        );
        assert_eq!(
            provider.endpoint("api/auth/google"),
            "https://auth.example.com/api/auth/google"
        );
    }

    #[test]
    fn login_body_includes_credentials() {
        let body = LoginRequest {
            role: Role::Patient,
            email: Some("john@x.com"),
            dob_raw: Some("15031990"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "role": "patient", "email": "john@x.com", "dob_raw": "15031990" })
        );
    }

    #[test]
    fn google_body_is_role_only() {
        let body = LoginRequest {
            role: Role::Clinic,
            email: None,
            dob_raw: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "clinic" }));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let provider = HttpAuthProvider::new("http://127.0.0.1:9");
        let err = provider
            .authenticate_with_google(Role::Clinic)
            .await
            .unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::NetworkError);
    }
}
