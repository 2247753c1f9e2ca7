use shared_types::{AppError, Identity, SessionSnapshot};

/// Handle for one pending sign-in attempt.
///
/// A result is only committed while its ticket is still the one in flight
/// and no logout has happened since it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTicket {
    epoch: u64,
    seq: u64,
}

/// What `complete_login` did with a provider result.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    SignedIn,
    Failed,
    /// The ticket was no longer current; nothing changed.
    Stale,
}

/// Authentication state for one running application.
///
/// Only `begin_login`/`complete_login`, `logout` and `clear_error` mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    user: Option<Identity>,
    error: Option<AppError>,
    in_flight: Option<LoginTicket>,
    epoch: u64,
    next_seq: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            loading: self.is_loading(),
            error: self.error.clone(),
        }
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a sign-in attempt. Clears the previous error.
    ///
    /// Rejected while another attempt is pending; the pending attempt and
    /// the current error are left untouched in that case.
    pub fn begin_login(&mut self) -> Result<LoginTicket, AppError> {
        if self.in_flight.is_some() {
            tracing::debug!(epoch = self.epoch, "login rejected: attempt already in flight");
            return Err(AppError::login_in_progress());
        }
        self.next_seq += 1;
        let ticket = LoginTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.in_flight = Some(ticket);
        self.error = None;
        Ok(ticket)
    }

    /// Commit a provider result for `ticket`.
    ///
    /// A failure keeps whatever user was signed in before and records the error.
    pub fn complete_login(&mut self, ticket: LoginTicket, result: Result<Identity, AppError>) -> Commit {
        if ticket.epoch != self.epoch || self.in_flight != Some(ticket) {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "discarding stale login result"
            );
            return Commit::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(identity) => {
                tracing::info!(user_id = %identity.id, role = %identity.role, "signed in");
                self.user = Some(identity);
                self.error = None;
                Commit::SignedIn
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, "sign-in failed");
                self.error = Some(err);
                Commit::Failed
            }
        }
    }

    /// Reset to the empty session. Any pending attempt becomes stale.
    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.user = None;
        self.error = None;
        self.in_flight = None;
        self.epoch += 1;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
