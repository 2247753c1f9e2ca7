use std::time::Duration;

use session::{MockAuthProvider, SessionCell, SharedSession};
use shared_types::{Identity, Role, SessionSnapshot};

/// Delay long enough for a second call to land while the first is pending.
pub const SLOW: Duration = Duration::from_millis(60);

/// Fresh session with logging installed.
pub fn session() -> SharedSession {
    session::telemetry::init_logging();
    SharedSession::new()
}

pub fn instant() -> MockAuthProvider {
    MockAuthProvider::instant()
}

pub fn slow() -> MockAuthProvider {
    MockAuthProvider::new(SLOW)
}

/// Sign in through the mock provider and return the committed snapshot.
pub async fn signed_in_as(role: Role) -> (SharedSession, SessionSnapshot) {
    let session = session();
    session::login(&session, &instant(), role, None)
        .await
        .expect("no login pending on a fresh session");
    let snapshot = session.snapshot();
    (session, snapshot)
}

/// Snapshot carrying `role` without going through a provider.
pub fn snapshot_for(role: Role) -> SessionSnapshot {
    SessionSnapshot {
        user: Some(MockAuthProvider::canned_identity(role)),
        ..Default::default()
    }
}

pub fn identity_of(snapshot: &SessionSnapshot) -> &Identity {
    snapshot.user.as_ref().expect("snapshot has a signed-in user")
}
