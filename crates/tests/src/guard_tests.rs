use pretty_assertions::assert_eq;
use session::{authorize, evaluate, DenyReason, GuardDecision, MemoryAuditSink, SessionCell};
use shared_types::{Role, RoleSet, SessionSnapshot, ALL_ROLES};

use crate::common;

#[test]
fn test_clinic_allow_list() {
    assert!(!evaluate(&common::snapshot_for(Role::Patient), Some(RoleSet::CLINIC)).is_proceed());
    assert!(!evaluate(&common::snapshot_for(Role::Family), Some(RoleSet::CLINIC)).is_proceed());
    assert_eq!(
        evaluate(&common::snapshot_for(Role::Clinic), Some(RoleSet::CLINIC)),
        GuardDecision::Proceed
    );
}

#[test]
fn test_patient_or_family_allow_list() {
    let allow = Some(RoleSet::PATIENT_OR_FAMILY);
    assert!(evaluate(&common::snapshot_for(Role::Patient), allow).is_proceed());
    assert!(evaluate(&common::snapshot_for(Role::Family), allow).is_proceed());
    assert_eq!(
        evaluate(&common::snapshot_for(Role::Clinic), allow),
        GuardDecision::Redirect {
            to: "/",
            reason: DenyReason::RoleNotAllowed {
                role: Role::Clinic,
                allowed: RoleSet::PATIENT_OR_FAMILY,
            },
        }
    );
}

#[test]
fn test_any_authenticated_route() {
    assert_eq!(
        evaluate(&SessionSnapshot::default(), None),
        GuardDecision::Redirect {
            to: "/",
            reason: DenyReason::Unauthenticated,
        }
    );
    for role in ALL_ROLES {
        assert!(evaluate(&common::snapshot_for(*role), None).is_proceed());
    }
}

#[tokio::test]
async fn test_guard_follows_session_through_logout() {
    let (session, snap) = common::signed_in_as(Role::Clinic).await;
    assert!(evaluate(&snap, Some(RoleSet::CLINIC)).is_proceed());

    session.logout();
    assert!(!evaluate(&session.snapshot(), Some(RoleSet::CLINIC)).is_proceed());
}

#[test]
fn test_denials_reach_audit_sink() {
    let sink = MemoryAuditSink::new();

    authorize("/clinic", &common::snapshot_for(Role::Patient), Some(RoleSet::CLINIC), &sink);
    authorize("/clinic", &common::snapshot_for(Role::Clinic), Some(RoleSet::CLINIC), &sink);
    authorize("/alerts", &SessionSnapshot::default(), None, &sink);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].path, "/clinic");
    assert_eq!(events[0].role, Some(Role::Patient));
    assert_eq!(events[1].path, "/alerts");
    assert_eq!(events[1].role, None);
    assert_eq!(events[1].reason, DenyReason::Unauthenticated);
}

#[test]
fn test_tracing_sink_accepts_events() {
    common::session();
    let decision = authorize(
        "/dashboard",
        &common::snapshot_for(Role::Clinic),
        Some(RoleSet::PATIENT_OR_FAMILY),
        session::audit_sink(true),
    );
    assert!(!decision.is_proceed());
}
