//! Sign-in state and route authorization for Pulsewatch.
//!
//! [`store::SessionStore`] holds the session; [`login`] drives provider
//! round trips against it; [`guard`] decides who may see which route.

pub mod audit;
pub mod config;
pub mod guard;
pub mod login;
pub mod provider;
pub mod store;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

pub use audit::{audit_sink, AccessDenied, AuditSink, MemoryAuditSink, NoopAuditSink, TracingAuditSink};
pub use guard::{authorize, evaluate, DenyReason, GuardDecision, LANDING_PATH};
pub use login::{login, login_with_google, LoginOutcome, SessionCell, SharedSession};
pub use provider::{pause, provider_from_settings, AuthProvider, MockAuthProvider};
pub use store::{Commit, LoginTicket, SessionStore};
