use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

/// Who a signed-in user is to the product.
///
/// - `Clinic`: healthcare provider staff. Manages the patient roster.
/// - `Patient`: wears the monitor and reads their own vitals.
/// - `Family`: caregiver with read access to a patient's dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Clinic,
    Patient,
    Family,
}

/// All roles in role-selector display order.
pub const ALL_ROLES: &[Role] = &[Role::Clinic, Role::Patient, Role::Family];

impl Role {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Clinic => "clinic",
            Role::Patient => "patient",
            Role::Family => "family",
        }
    }

    /// Parse a wire name. Unknown values are rejected rather than defaulted,
    /// since there is no safe fallback role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clinic" => Some(Role::Clinic),
            "patient" => Some(Role::Patient),
            "family" => Some(Role::Family),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Clinic => "Clinic",
            Role::Patient => "Patient",
            Role::Family => "Family",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Clinic => "Healthcare provider",
            Role::Patient => "Monitor your health",
            Role::Family => "Caregiver access",
        }
    }

    /// Landing path after a successful sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Clinic => "/clinic",
            Role::Patient | Role::Family => "/dashboard",
        }
    }

    /// Clinic staff sign in through the identity provider only.
    pub fn uses_credentials(&self) -> bool {
        match self {
            Role::Clinic => false,
            Role::Patient | Role::Family => true,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Role::Clinic => 0b001,
            Role::Patient => 0b010,
            Role::Family => 0b100,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed set of roles, used as a route allow-list.
///
/// An empty set carries the same meaning as no allow-list at all:
/// any authenticated role may pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    pub const CLINIC: RoleSet = RoleSet::only(Role::Clinic);
    pub const PATIENT_OR_FAMILY: RoleSet = RoleSet::only(Role::Patient).with(Role::Family);

    pub const fn only(role: Role) -> Self {
        RoleSet(role.bit())
    }

    pub const fn with(self, role: Role) -> Self {
        RoleSet(self.0 | role.bit())
    }

    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        ALL_ROLES.iter().copied().filter(|r| self.contains(*r))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::EMPTY, RoleSet::with)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|r| r.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Profile of the signed-in user. Replaced wholesale on every login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub display_name: String,
}

impl Identity {
    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(self.role.label())
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Email + date-of-birth sign-in input for patients and family members.
///
/// The date of birth is kept raw (`ddmmyyyy`); it is format-checked only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub dob_raw: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, dob_raw: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            dob_raw: dob_raw.into(),
        }
    }
}

/// Read-only view of the session handed to views and the route guard.
///
/// `authenticated` is derived from `user`, so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
    #[serde(default)]
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AppError>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// User-facing error text, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str) -> Identity {
        Identity {
            id: "patient-1".into(),
            email: "john.doe@email.com".into(),
            role: Role::Patient,
            display_name: name.into(),
        }
    }

    #[test]
    fn role_parse_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
        assert_eq!(Role::parse("Clinic"), Some(Role::Clinic));
        assert_eq!(Role::parse(" family "), Some(Role::Family));
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Clinic).unwrap(), r#""clinic""#);
        let role: Role = serde_json::from_str(r#""family""#).unwrap();
        assert_eq!(role, Role::Family);
    }

    #[test]
    fn home_path_per_role() {
        assert_eq!(Role::Clinic.home_path(), "/clinic");
        assert_eq!(Role::Patient.home_path(), "/dashboard");
        assert_eq!(Role::Family.home_path(), "/dashboard");
    }

    #[test]
    fn role_set_membership() {
        assert!(RoleSet::CLINIC.contains(Role::Clinic));
        assert!(!RoleSet::CLINIC.contains(Role::Patient));
        assert!(RoleSet::PATIENT_OR_FAMILY.contains(Role::Patient));
        assert!(RoleSet::PATIENT_OR_FAMILY.contains(Role::Family));
        assert!(!RoleSet::PATIENT_OR_FAMILY.contains(Role::Clinic));
        assert!(RoleSet::EMPTY.is_empty());
    }

    #[test]
    fn role_set_from_iter_and_display() {
        let set: RoleSet = [Role::Family, Role::Clinic].into_iter().collect();
        assert!(set.contains(Role::Clinic));
        assert!(set.contains(Role::Family));
        assert!(!set.contains(Role::Patient));
        assert_eq!(set.to_string(), "{clinic, family}");
    }

    #[test]
    fn identity_name_helpers() {
        let id = identity("John Doe");
        assert_eq!(id.first_name(), "John");
        assert_eq!(id.initials(), "JD");
        assert_eq!(identity("").first_name(), "Patient");
    }

    #[test]
    fn snapshot_authenticated_tracks_user() {
        let empty = SessionSnapshot::default();
        assert!(!empty.is_authenticated());
        assert_eq!(empty.role(), None);

        let signed_in = SessionSnapshot {
            user: Some(identity("John Doe")),
            ..Default::default()
        };
        assert!(signed_in.is_authenticated());
        assert_eq!(signed_in.role(), Some(Role::Patient));
    }
}
