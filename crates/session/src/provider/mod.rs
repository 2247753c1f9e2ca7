//! Pluggable identity backends.
//!
//! The session store never talks to a backend directly; the login driver
//! asks an [`AuthProvider`] for an [`Identity`] and commits the answer.

#[cfg(feature = "http")]
pub mod http;
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shared_types::{AppError, AuthSettings, Credentials, Identity, ProviderKind, Role};

pub use mock::{pause, MockAuthProvider};

#[cfg(feature = "http")]
pub use http::HttpAuthProvider;

/// Resolves a role selection (and optional credentials) to an identity.
///
/// Futures are not required to be `Send`: providers run on the UI thread,
/// including on wasm where timers and fetch are thread-local.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Email + date-of-birth sign-in, or a bare role sign-in when
    /// `credentials` is `None`.
    async fn authenticate(
        &self,
        role: Role,
        credentials: Option<&Credentials>,
    ) -> Result<Identity, AppError>;

    /// Sign-in through the external identity provider.
    async fn authenticate_with_google(&self, role: Role) -> Result<Identity, AppError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the provider selected by the `[auth]` config section.
///
/// Falls back to the mock provider when HTTP is requested but no base URL
/// is configured, or when the crate was built without the `http` feature.
pub fn provider_from_settings(settings: &AuthSettings) -> Arc<dyn AuthProvider> {
    let mock = || -> Arc<dyn AuthProvider> {
        Arc::new(MockAuthProvider::new(Duration::from_millis(settings.login_delay_ms)))
    };

    match settings.provider {
        ProviderKind::Mock => mock(),
        ProviderKind::Http => match settings.base_url.as_deref() {
            #[cfg(feature = "http")]
            Some(base_url) => Arc::new(HttpAuthProvider::new(base_url)),
            #[cfg(not(feature = "http"))]
            Some(base_url) => {
                tracing::warn!(base_url, "built without `http` feature, using mock provider");
                mock()
            }
            None => {
                tracing::warn!("auth.provider = \"http\" but auth.base_url is unset, using mock provider");
                mock()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_is_default() {
        let provider = provider_from_settings(&AuthSettings::default());
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn http_without_base_url_falls_back_to_mock() {
        let settings = AuthSettings {
            provider: ProviderKind::Http,
            base_url: None,
            ..Default::default()
        };
        assert_eq!(provider_from_settings(&settings).name(), "mock");
    }

    #[cfg(feature = "http")]
    #[test]
    fn http_with_base_url() {
        let settings = AuthSettings {
            provider: ProviderKind::Http,
            base_url: Some("https://auth.example.com".into()),
            ..Default::default()
        };
        assert_eq!(provider_from_settings(&settings).name(), "http");
    }
}
