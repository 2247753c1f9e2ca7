use pretty_assertions::assert_eq;
use session::{login, login_with_google, LoginOutcome, MockAuthProvider, SessionCell};
use shared_types::{
    AppErrorKind, Credentials, Role, SessionSnapshot, ALL_ROLES, GOOGLE_LOGIN_FAILED_MESSAGE,
    LOGIN_FAILED_MESSAGE,
};

use crate::common;

#[tokio::test]
async fn test_login_each_role_authenticates() {
    for role in ALL_ROLES {
        let (_session, snap) = common::signed_in_as(*role).await;
        assert!(snap.is_authenticated());
        assert_eq!(common::identity_of(&snap).role, *role);
        assert!(!snap.loading);
        assert!(snap.error.is_none());
    }
}

#[tokio::test]
async fn test_patient_credentials_login_uses_supplied_email() {
    let session = common::session();
    let creds = Credentials::new("john@x.com", "15031990");
    let outcome = login(&session, &common::instant(), Role::Patient, Some(creds))
        .await
        .unwrap();

    let snap = session.snapshot();
    assert_eq!(outcome.identity(), snap.user.as_ref());
    let user = common::identity_of(&snap);
    assert_eq!(user.email, "john@x.com");
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.display_name, "John Doe");
}

#[tokio::test]
async fn test_clinic_google_login_gets_canned_identity() {
    let session = common::session();
    login_with_google(&session, &common::instant(), Role::Clinic)
        .await
        .unwrap();

    let snap = session.snapshot();
    assert_eq!(
        common::identity_of(&snap),
        &MockAuthProvider::canned_identity(Role::Clinic)
    );
    assert_eq!(common::identity_of(&snap).email, "clinic@example.com");
}

#[tokio::test]
async fn test_logout_from_any_state_resets() {
    // Signed in.
    let (session, _) = common::signed_in_as(Role::Family).await;
    session.logout();
    assert_eq!(session.snapshot(), SessionSnapshot::default());

    // Failed.
    let session = common::session();
    login(&session, &common::instant().failing(), Role::Patient, None)
        .await
        .unwrap();
    assert!(session.snapshot().error.is_some());
    session.logout();
    assert_eq!(session.snapshot(), SessionSnapshot::default());

    // Already empty.
    session.logout();
    assert_eq!(session.snapshot(), SessionSnapshot::default());
}

#[tokio::test]
async fn test_failed_logins_use_generic_messages() {
    let failing = common::instant().failing();
    let session = common::session();

    let outcome = login(&session, &failing, Role::Family, None).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Failed(ref e) if e.kind == AppErrorKind::LoginFailed));
    assert_eq!(session.snapshot().error_message(), Some(LOGIN_FAILED_MESSAGE));

    login_with_google(&session, &failing, Role::Clinic).await.unwrap();
    assert_eq!(session.snapshot().error_message(), Some(GOOGLE_LOGIN_FAILED_MESSAGE));
    assert!(!session.snapshot().is_authenticated());
}

#[tokio::test]
async fn test_new_attempt_clears_previous_error() {
    let session = common::session();
    login(&session, &common::instant().failing(), Role::Patient, None)
        .await
        .unwrap();
    login(&session, &common::instant(), Role::Patient, None)
        .await
        .unwrap();

    let snap = session.snapshot();
    assert!(snap.error.is_none());
    assert!(snap.is_authenticated());
}

#[tokio::test]
async fn test_relogin_replaces_identity_wholesale() {
    let (session, first) = common::signed_in_as(Role::Patient).await;
    login_with_google(&session, &common::instant(), Role::Clinic)
        .await
        .unwrap();
    let second = session.snapshot();

    assert_eq!(common::identity_of(&first).role, Role::Patient);
    assert_eq!(common::identity_of(&second).role, Role::Clinic);
    assert_eq!(common::identity_of(&second).id, "clinic-1");
}
