pub mod add_patient;
pub mod alerts;
pub mod clinic_dashboard;
pub mod device;
pub mod history;
pub mod index;
pub mod layout;
pub mod not_found;
pub mod patient_dashboard;
pub mod patient_details;
pub mod settings;

use crate::auth::use_auth;
use dioxus::prelude::*;
use session::GuardDecision;
use shared_types::{FeatureFlags, Role, RoleSet};

use add_patient::AddPatient;
use alerts::Alerts;
use clinic_dashboard::{ClinicDashboard, ClinicPatients};
use device::Device;
use history::History;
use index::Index;
use layout::DashboardLayout;
use not_found::NotFound;
use patient_dashboard::PatientDashboard;
use patient_details::PatientDetails;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},

    // ── Patient & family ──
    #[layout(PatientGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    PatientDashboard {},
    #[route("/history")]
    History {},
    #[route("/device")]
    Device {},
    #[end_layout]
    #[end_layout]

    // ── Clinic ──
    #[layout(ClinicGuard)]
    #[layout(DashboardLayout)]
    #[route("/clinic")]
    ClinicDashboard {},
    #[route("/clinic/patients")]
    ClinicPatients {},
    #[route("/clinic/patient/:id")]
    PatientDetails { id: String },
    #[route("/clinic/add-patient")]
    AddPatient {},
    #[end_layout]
    #[end_layout]

    // ── Any signed-in role ──
    #[layout(MemberGuard)]
    #[layout(DashboardLayout)]
    #[route("/alerts")]
    Alerts {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any authenticated role.
    SignedIn,
    Roles(RoleSet),
}

pub const CLINIC_ONLY: Access = Access::Roles(RoleSet::CLINIC);
pub const PATIENT_AND_FAMILY: Access = Access::Roles(RoleSet::PATIENT_OR_FAMILY);
pub const MEMBERS: Access = Access::SignedIn;

impl Access {
    /// Allow-list handed to the guard. `None` admits every signed-in role.
    pub fn allow_list(self) -> Option<RoleSet> {
        match self {
            Access::Roles(roles) => Some(roles),
            Access::Public | Access::SignedIn => None,
        }
    }

    pub fn permits(self, role: Role) -> bool {
        match self {
            Access::Public | Access::SignedIn => true,
            Access::Roles(roles) => roles.contains(role),
        }
    }
}

/// Access rule for every route. Must agree with the guard layout each
/// variant sits under.
pub fn access(route: &Route) -> Access {
    match route {
        Route::Index {} | Route::NotFound { .. } => Access::Public,
        Route::PatientDashboard {} | Route::History {} | Route::Device {} => PATIENT_AND_FAMILY,
        Route::ClinicDashboard {}
        | Route::ClinicPatients {}
        | Route::PatientDetails { .. }
        | Route::AddPatient {} => CLINIC_ONLY,
        Route::Alerts {} | Route::Settings {} => MEMBERS,
    }
}

/// Landing route after sign-in.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Clinic => Route::ClinicDashboard {},
        Role::Patient | Role::Family => Route::PatientDashboard {},
    }
}

/// Shared body of the guard layouts: authorise the current route against
/// the live session, then either render the outlet or bounce to `/`.
fn guarded_outlet(rule: Access) -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let route: Route = use_route();

    let snapshot = auth.snapshot();
    let path = route.to_string();
    let decision = session::authorize(
        &path,
        &snapshot,
        rule.allow_list(),
        session::audit_sink(flags.audit_log),
    );

    match decision {
        GuardDecision::Proceed => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect { to, .. } => {
            navigator().replace(to.parse::<Route>().unwrap_or(Route::Index {}));
            rsx! {
                div { class: "guard-pending", "aria-busy": "true" }
            }
        }
    }
}

/// Guard layout: clinic staff only.
#[component]
fn ClinicGuard() -> Element {
    guarded_outlet(CLINIC_ONLY)
}

/// Guard layout: patients and their family members.
#[component]
fn PatientGuard() -> Element {
    guarded_outlet(PATIENT_AND_FAMILY)
}

/// Guard layout: any signed-in role.
#[component]
fn MemberGuard() -> Element {
    guarded_outlet(MEMBERS)
}

// ── Navigation ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    AddPatient,
    History,
    Alerts,
    Device,
    Settings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

impl NavLink {
    /// Detail and list pages under the clinic dashboard keep its entry lit.
    pub fn is_active(&self, current: &Route) -> bool {
        match (&self.route, current) {
            (Route::ClinicDashboard {}, Route::ClinicPatients {} | Route::PatientDetails { .. }) => true,
            (link, current) => link == current,
        }
    }
}

fn all_nav_links() -> [NavLink; 7] {
    let link = |label, route, icon| NavLink { label, route, icon };
    [
        link("Dashboard", Route::PatientDashboard {}, NavIcon::Dashboard),
        link("Dashboard", Route::ClinicDashboard {}, NavIcon::Dashboard),
        link("Add Patient", Route::AddPatient {}, NavIcon::AddPatient),
        link("History", Route::History {}, NavIcon::History),
        link("Alerts", Route::Alerts {}, NavIcon::Alerts),
        link("Device", Route::Device {}, NavIcon::Device),
        link("Settings", Route::Settings {}, NavIcon::Settings),
    ]
}

/// Sidebar entries for `role`, derived from the same access table the
/// guards enforce so a link is never shown for a route that would bounce.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    all_nav_links()
        .into_iter()
        .filter(|link| access(&link.route).permits(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Identity, SessionSnapshot, ALL_ROLES};

    fn guarded_routes() -> Vec<Route> {
        vec![
            Route::PatientDashboard {},
            Route::History {},
            Route::Device {},
            Route::ClinicDashboard {},
            Route::ClinicPatients {},
            Route::PatientDetails { id: "1".into() },
            Route::AddPatient {},
            Route::Alerts {},
            Route::Settings {},
        ]
    }

    fn signed_in(role: Role) -> SessionSnapshot {
        SessionSnapshot {
            user: Some(Identity {
                id: "u1".into(),
                email: "u@example.com".into(),
                role,
                display_name: "Test User".into(),
            }),
            loading: false,
            error: None,
        }
    }

    fn labels(role: Role) -> Vec<&'static str> {
        nav_links(role).iter().map(|l| l.label).collect()
    }

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Index {}));
        assert_eq!("/clinic".parse::<Route>().ok(), Some(Route::ClinicDashboard {}));
        assert_eq!(
            "/clinic/patient/42".parse::<Route>().ok(),
            Some(Route::PatientDetails { id: "42".into() })
        );
        assert_eq!(
            "/admin/users".parse::<Route>().ok(),
            Some(Route::NotFound { route: vec!["admin".into(), "users".into()] })
        );
    }

    #[test]
    fn home_route_matches_role_home_path() {
        for &role in ALL_ROLES {
            assert_eq!(home_route(role).to_string(), role.home_path());
            assert!(access(&home_route(role)).permits(role));
        }
    }

    #[test]
    fn clinic_pages_reject_patients_and_family() {
        for route in [Route::ClinicDashboard {}, Route::AddPatient {}] {
            assert!(access(&route).permits(Role::Clinic));
            assert!(!access(&route).permits(Role::Patient));
            assert!(!access(&route).permits(Role::Family));
        }
    }

    #[test]
    fn patient_pages_reject_clinic() {
        for route in [Route::PatientDashboard {}, Route::History {}, Route::Device {}] {
            assert!(!access(&route).permits(Role::Clinic));
            assert!(access(&route).permits(Role::Family));
        }
    }

    #[test]
    fn guard_decisions_agree_with_access_table() {
        for route in guarded_routes() {
            let rule = access(&route);
            assert_ne!(rule, Access::Public, "{route} must be guarded");
            for &role in ALL_ROLES {
                let decision = session::evaluate(&signed_in(role), rule.allow_list());
                assert_eq!(decision.is_proceed(), rule.permits(role), "{route} as {role}");
            }
            let anonymous = session::evaluate(&SessionSnapshot::default(), rule.allow_list());
            assert!(!anonymous.is_proceed(), "{route} admitted an anonymous visitor");
        }
    }

    #[test]
    fn patient_nav_links() {
        assert_eq!(labels(Role::Patient), vec!["Dashboard", "History", "Alerts", "Device", "Settings"]);
        assert_eq!(labels(Role::Family), labels(Role::Patient));
    }

    #[test]
    fn clinic_nav_links() {
        assert_eq!(labels(Role::Clinic), vec!["Dashboard", "Add Patient", "Alerts", "Settings"]);
        let dashboard = &nav_links(Role::Clinic)[0];
        assert_eq!(dashboard.route, Route::ClinicDashboard {});
    }

    #[test]
    fn clinic_dashboard_link_stays_active_on_patient_pages() {
        let dashboard = &nav_links(Role::Clinic)[0];
        assert!(dashboard.is_active(&Route::PatientDetails { id: "3".into() }));
        assert!(dashboard.is_active(&Route::ClinicPatients {}));
        assert!(!dashboard.is_active(&Route::Alerts {}));
    }
}
