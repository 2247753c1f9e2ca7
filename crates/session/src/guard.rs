//! Route access decisions.
//!
//! [`evaluate`] is pure: the same snapshot and allow-list always give the
//! same answer. [`authorize`] wraps it and reports denials to an audit sink.

use std::fmt;

use shared_types::{Role, RoleSet, SessionSnapshot};

use crate::audit::{AccessDenied, AuditSink};

/// Where every denied visitor is sent.
pub const LANDING_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    RoleNotAllowed { role: Role, allowed: RoleSet },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::Unauthenticated => write!(f, "not signed in"),
            DenyReason::RoleNotAllowed { role, allowed } => {
                write!(f, "role {role} not in {allowed}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect { to: &'static str, reason: DenyReason },
}

impl GuardDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, GuardDecision::Proceed)
    }
}

/// `allow == None` (or an empty set) admits any signed-in role.
pub fn evaluate(snapshot: &SessionSnapshot, allow: Option<RoleSet>) -> GuardDecision {
    let Some(role) = snapshot.role() else {
        return GuardDecision::Redirect {
            to: LANDING_PATH,
            reason: DenyReason::Unauthenticated,
        };
    };
    match allow {
        Some(allowed) if !allowed.is_empty() && !allowed.contains(role) => GuardDecision::Redirect {
            to: LANDING_PATH,
            reason: DenyReason::RoleNotAllowed { role, allowed },
        },
        _ => GuardDecision::Proceed,
    }
}

/// [`evaluate`] plus an audit record for every redirect.
pub fn authorize(
    path: &str,
    snapshot: &SessionSnapshot,
    allow: Option<RoleSet>,
    sink: &dyn AuditSink,
) -> GuardDecision {
    let decision = evaluate(snapshot, allow);
    if let GuardDecision::Redirect { reason, .. } = decision {
        sink.record(&AccessDenied {
            path: path.to_string(),
            role: snapshot.role(),
            reason,
        });
    }
    decision
}
