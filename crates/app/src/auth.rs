use std::sync::Arc;

use dioxus::prelude::*;
use session::{AuthProvider, LoginOutcome, SessionCell, SessionStore};
use shared_types::{AppError, AppErrorKind, Credentials, Role, SessionSnapshot};

/// Session context provided once at the app root.
///
/// Reads go through [`AuthState::snapshot`], which subscribes the calling
/// component. Writes are short `with_mut` borrows taken by the login driver.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub store: Signal<SessionStore>,
    provider: CopyValue<Arc<dyn AuthProvider>>,
}

impl AuthState {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        tracing::info!(provider = provider.name(), "session initialised");
        Self {
            store: Signal::new(SessionStore::new()),
            provider: CopyValue::new(provider),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.store.read().snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    /// Email + DOB sign-in, or a bare role sign-in without credentials.
    ///
    /// Runs detached from the calling component so that navigating away
    /// cannot strand the in-flight ticket.
    pub fn login(&self, role: Role, credentials: Option<Credentials>) {
        let auth = *self;
        spawn_forever(async move {
            let provider = auth.provider.cloned();
            let result = session::login(&auth, provider.as_ref(), role, credentials).await;
            report(role, result);
        });
    }

    pub fn login_with_google(&self, role: Role) {
        let auth = *self;
        spawn_forever(async move {
            let provider = auth.provider.cloned();
            let result = session::login_with_google(&auth, provider.as_ref(), role).await;
            report(role, result);
        });
    }

    pub fn logout(&self) {
        tracing::info!("logout");
        SessionCell::logout(self);
    }

    pub fn clear_error(&self) {
        // No write (and no re-render) when already clear.
        if self.store.peek().error().is_some() {
            SessionCell::clear_error(self);
        }
    }
}

impl SessionCell for AuthState {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        let mut store = self.store;
        store.with_mut(f)
    }
}

fn report(role: Role, result: Result<LoginOutcome, AppError>) {
    match result {
        Ok(LoginOutcome::SignedIn(identity)) => {
            tracing::info!(%role, user_id = %identity.id, "signed in");
        }
        Ok(LoginOutcome::Failed(err)) => {
            tracing::warn!(%role, kind = %err.kind, "sign-in failed");
        }
        Ok(LoginOutcome::Superseded) => {
            tracing::debug!(%role, "sign-in result discarded after logout");
        }
        Err(err) if err.kind == AppErrorKind::LoginInProgress => {
            tracing::debug!(%role, "sign-in already pending, request ignored");
        }
        Err(err) => {
            tracing::warn!(%role, error = %err, "sign-in not started");
        }
    }
}

/// Hook to access the session.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
