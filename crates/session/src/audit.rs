use parking_lot::Mutex;
use shared_types::Role;

use crate::guard::DenyReason;

/// A route-guard denial.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessDenied {
    pub path: String,
    pub role: Option<Role>,
    pub reason: DenyReason,
}

/// Receives route-guard denials. The redirect itself stays silent.
pub trait AuditSink {
    fn record(&self, event: &AccessDenied);
}

/// Structured warning on the `audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &AccessDenied) {
        match &event.reason {
            DenyReason::Unauthenticated => {
                tracing::warn!(target: "audit", path = %event.path, "unauthenticated access denied");
            }
            DenyReason::RoleNotAllowed { role, allowed } => {
                tracing::warn!(
                    target: "audit",
                    path = %event.path,
                    %role,
                    %allowed,
                    "role not allowed on route"
                );
            }
        }
    }
}

/// Used when `features.audit_log` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &AccessDenied) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AccessDenied>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AccessDenied> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: &AccessDenied) {
        self.events.lock().push(event.clone());
    }
}

/// Sink selected by the `audit_log` feature flag.
pub fn audit_sink(enabled: bool) -> &'static dyn AuditSink {
    static TRACING: TracingAuditSink = TracingAuditSink;
    static NOOP: NoopAuditSink = NoopAuditSink;
    if enabled {
        &TRACING
    } else {
        &NOOP
    }
}
