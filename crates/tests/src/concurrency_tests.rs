use pretty_assertions::assert_eq;
use session::{login, login_with_google, LoginOutcome, SessionCell};
use shared_types::{AppErrorKind, Role};

use crate::common;

#[tokio::test]
async fn test_overlapping_login_is_rejected() {
    let session = common::session();
    let provider = common::slow();

    let (first, second) = tokio::join!(
        login(&session, &provider, Role::Patient, None),
        async {
            tokio::task::yield_now().await;
            assert!(session.snapshot().loading);
            login_with_google(&session, &provider, Role::Clinic).await
        }
    );

    let first = first.unwrap();
    assert_eq!(first.identity().map(|u| u.role), Some(Role::Patient));
    assert_eq!(second.unwrap_err().kind, AppErrorKind::LoginInProgress);

    let snap = session.snapshot();
    assert_eq!(snap.role(), Some(Role::Patient));
    assert!(snap.error.is_none());
    assert!(!snap.loading);
}

#[tokio::test]
async fn test_logout_during_pending_login_discards_result() {
    let session = common::session();
    let provider = common::slow();

    let (outcome, ()) = tokio::join!(
        login_with_google(&session, &provider, Role::Clinic),
        async {
            tokio::task::yield_now().await;
            session.logout();
        }
    );

    assert_eq!(outcome.unwrap(), LoginOutcome::Superseded);
    let snap = session.snapshot();
    assert!(!snap.is_authenticated());
    assert!(!snap.loading);
    assert!(snap.error.is_none());
}

#[tokio::test]
async fn test_login_after_superseded_attempt_succeeds() {
    let session = common::session();
    let provider = common::slow();

    let (stale, ()) = tokio::join!(
        login(&session, &provider, Role::Family, None),
        async {
            tokio::task::yield_now().await;
            session.logout();
        }
    );
    assert_eq!(stale.unwrap(), LoginOutcome::Superseded);

    login(&session, &common::instant(), Role::Patient, None)
        .await
        .unwrap();
    assert_eq!(session.snapshot().role(), Some(Role::Patient));
}

#[tokio::test]
async fn test_shared_session_is_visible_across_clones() {
    let session = common::session();
    let view = session.clone();
    login(&session, &common::instant(), Role::Family, None)
        .await
        .unwrap();
    assert_eq!(view.snapshot().role(), Some(Role::Family));
}
