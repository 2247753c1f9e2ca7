//! Async sign-in drivers.
//!
//! A driver takes a ticket from the store, awaits the provider without
//! holding any borrow of the store, then commits the result against the
//! ticket. Whatever owns the store (a Dioxus signal in the app, a mutex in
//! tests and native tools) only has to implement [`SessionCell`].

use std::sync::Arc;

use parking_lot::Mutex;
use shared_types::{AppError, Credentials, Identity, Role, SessionSnapshot};

use crate::provider::AuthProvider;
use crate::store::{Commit, SessionStore};

/// Short, synchronous access to a [`SessionStore`].
///
/// Implementations must not hold the borrow past the closure.
pub trait SessionCell {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R;

    fn snapshot(&self) -> SessionSnapshot {
        self.with_store(|s| s.snapshot())
    }

    fn logout(&self) {
        self.with_store(SessionStore::logout);
    }

    fn clear_error(&self) {
        self.with_store(SessionStore::clear_error);
    }
}

/// Thread-safe handle used outside the UI.
#[derive(Debug, Clone, Default)]
pub struct SharedSession(Arc<Mutex<SessionStore>>);

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCell for SharedSession {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        f(&mut self.0.lock())
    }
}

/// How an accepted sign-in attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(Identity),
    /// The provider refused; the error is now on the session.
    Failed(AppError),
    /// A logout happened while the provider was working.
    Superseded,
}

impl LoginOutcome {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            LoginOutcome::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Email + DOB (or bare role) sign-in.
///
/// Returns `Err` only when the attempt was not started because another one
/// is still pending. Credential format is the caller's job.
pub async fn login<C: SessionCell>(
    cell: &C,
    provider: &dyn AuthProvider,
    role: Role,
    credentials: Option<Credentials>,
) -> Result<LoginOutcome, AppError> {
    let ticket = cell.with_store(SessionStore::begin_login)?;
    tracing::debug!(%role, provider = provider.name(), with_credentials = credentials.is_some(), "login started");

    let result = provider.authenticate(role, credentials.as_ref()).await;
    Ok(commit(cell, ticket, result))
}

/// Sign-in through the external identity provider.
pub async fn login_with_google<C: SessionCell>(
    cell: &C,
    provider: &dyn AuthProvider,
    role: Role,
) -> Result<LoginOutcome, AppError> {
    let ticket = cell.with_store(SessionStore::begin_login)?;
    tracing::debug!(%role, provider = provider.name(), "google login started");

    let result = provider.authenticate_with_google(role).await;
    Ok(commit(cell, ticket, result))
}

fn commit<C: SessionCell>(
    cell: &C,
    ticket: crate::store::LoginTicket,
    result: Result<Identity, AppError>,
) -> LoginOutcome {
    let outcome = match &result {
        Ok(identity) => LoginOutcome::SignedIn(identity.clone()),
        Err(err) => LoginOutcome::Failed(err.clone()),
    };
    match cell.with_store(|s| s.complete_login(ticket, result)) {
        Commit::Stale => LoginOutcome::Superseded,
        Commit::SignedIn | Commit::Failed => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAuthProvider;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, ALL_ROLES, LOGIN_FAILED_MESSAGE};

    #[tokio::test]
    async fn every_role_signs_in() {
        let provider = MockAuthProvider::instant();
        for role in ALL_ROLES {
            let session = SharedSession::new();
            let outcome = login(&session, &provider, *role, None).await.unwrap();
            assert_eq!(outcome.identity().map(|u| u.role), Some(*role));

            let snap = session.snapshot();
            assert!(snap.is_authenticated());
            assert_eq!(snap.role(), Some(*role));
            assert!(!snap.loading);
        }
    }

    #[tokio::test]
    async fn failure_sets_generic_message() {
        let session = SharedSession::new();
        let provider = MockAuthProvider::instant().failing();
        let outcome = login(&session, &provider, Role::Patient, None).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Failed(_)));
        assert_eq!(session.snapshot().error_message(), Some(LOGIN_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn rejected_while_pending() {
        let session = SharedSession::new();
        session.with_store(|s| s.begin_login()).unwrap();

        let err = login_with_google(&session, &MockAuthProvider::instant(), Role::Clinic)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::LoginInProgress);
        let snap = session.snapshot();
        assert!(snap.loading);
        assert!(snap.error.is_none());
    }

    #[tokio::test]
    async fn logout_and_clear_error_through_cell() {
        let session = SharedSession::new();
        login(&session, &MockAuthProvider::instant().failing(), Role::Family, None)
            .await
            .unwrap();
        session.clear_error();
        assert!(session.snapshot().error.is_none());

        login(&session, &MockAuthProvider::instant(), Role::Family, None)
            .await
            .unwrap();
        session.logout();
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }
}
