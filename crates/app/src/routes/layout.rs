use crate::auth::use_auth;
use crate::format_helpers::sync_age;
use crate::mock_data;
use crate::role_gate::RoleGate;
use crate::routes::{nav_links, NavIcon, Route};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdHistory, LdLayoutDashboard, LdSettings, LdSmartphone, LdUserPlus,
};
use dioxus_free_icons::Icon;
use shared_types::RoleSet;
use shared_ui::{SideNav, SideNavItem, TopBar};

/// Signed-in shell: top bar, role-filtered sidebar, page outlet.
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let mut menu_open = use_signal(|| false);

    // The guard above has already checked the session; an empty layout
    // covers the frame between logout and the redirect.
    let Some(user) = auth.snapshot().user else {
        return rsx! {};
    };
    let links = nav_links(user.role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "app-shell",
            TopBar {
                display_name: user.display_name.clone(),
                initials: user.initials(),
                role_label: user.role.label().to_string(),
                on_logout: move |_| {
                    auth.logout();
                    navigator().replace(Route::Index {});
                },
                on_toggle_menu: move |_| menu_open.toggle(),
            }

            div { class: "app-body",
                aside { class: "app-sidebar", "data-open": menu_open(),
                    SideNav { open: menu_open(),
                        for link in links {
                            SideNavItem { key: "{link.route}", active: link.is_active(&route),
                                Link {
                                    to: link.route.clone(),
                                    class: "side-nav-link",
                                    onclick: move |_| menu_open.set(false),
                                    {nav_icon(link.icon)}
                                    span { "{link.label}" }
                                }
                            }
                        }
                    }
                    RoleGate { allow: RoleSet::PATIENT_OR_FAMILY,
                        DeviceTile {}
                    }
                }

                if menu_open() {
                    div {
                        class: "app-scrim",
                        onclick: move |_| menu_open.set(false),
                    }
                }

                main { class: "app-main fade-in",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::AddPatient => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 } },
        NavIcon::History => rsx! { Icon::<LdHistory> { icon: LdHistory, width: 18, height: 18 } },
        NavIcon::Alerts => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        NavIcon::Device => rsx! { Icon::<LdSmartphone> { icon: LdSmartphone, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Compact monitor status pinned under the patient sidebar.
#[component]
fn DeviceTile() -> Element {
    let now = Utc::now();
    let status = mock_data::own_device(now);
    let connection = if status.is_connected { "Connected" } else { "Disconnected" };
    let synced = sync_age(&status.last_sync, &now);

    rsx! {
        div { class: "device-tile", "data-connected": status.is_connected,
            p { class: "device-tile-title", "Device Status" }
            p { class: "device-tile-state",
                span { class: "device-tile-dot" }
                "{connection}"
            }
            p { class: "device-tile-meta", "Battery {status.battery}% · Synced {synced}" }
        }
    }
}
