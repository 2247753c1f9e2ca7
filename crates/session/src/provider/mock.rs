use std::time::Duration;

use async_trait::async_trait;
use shared_types::{AppError, Credentials, Identity, Role};

use super::AuthProvider;

/// Stand-in backend: one canned identity per role after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAuthProvider {
    delay: Duration,
    fail: bool,
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl MockAuthProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// No simulated round trip.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Every attempt fails with the generic failure for its method.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// The identity issued for `role`. Callers get a fresh copy each time.
    pub fn canned_identity(role: Role) -> Identity {
        let (id, email, display_name) = match role {
            Role::Clinic => ("clinic-1", "clinic@example.com", "City Health Clinic"),
            Role::Patient => ("patient-1", "john.doe@email.com", "John Doe"),
            Role::Family => ("family-1", "jane.doe@email.com", "Jane Doe"),
        };
        Identity {
            id: id.to_string(),
            email: email.to_string(),
            role,
            display_name: display_name.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockAuthProvider {
    async fn authenticate(
        &self,
        role: Role,
        credentials: Option<&Credentials>,
    ) -> Result<Identity, AppError> {
        pause(self.delay).await;
        if self.fail {
            return Err(AppError::login_failed());
        }
        let mut identity = Self::canned_identity(role);
        if let Some(credentials) = credentials {
            identity.email = credentials.email.clone();
        }
        Ok(identity)
    }

    async fn authenticate_with_google(&self, role: Role) -> Result<Identity, AppError> {
        pause(self.delay).await;
        if self.fail {
            return Err(AppError::google_login_failed());
        }
        Ok(Self::canned_identity(role))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Simulated round-trip latency. Zero returns immediately.
#[cfg(not(target_arch = "wasm32"))]
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        gloo_timers::future::sleep(delay).await;
    }
}
