use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeartPulse, LdLogOut, LdMenu};
use dioxus_free_icons::Icon;

/// Top bar: brand, signed-in user, sign-out.
#[component]
pub fn TopBar(
    display_name: String,
    initials: String,
    role_label: String,
    on_logout: EventHandler<()>,
    #[props(default)] on_toggle_menu: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "top-bar",
            if let Some(toggle) = on_toggle_menu {
                button {
                    r#type: "button",
                    class: "top-bar-menu",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| toggle.call(()),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
            }
            div { class: "top-bar-brand",
                Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 22, height: 22 }
                span { "Pulsewatch" }
            }
            div { class: "top-bar-spacer" }
            div { class: "top-bar-user",
                span { class: "top-bar-avatar", "aria-hidden": "true", "{initials}" }
                div { class: "top-bar-identity",
                    span { class: "top-bar-name", "{display_name}" }
                    span { class: "top-bar-role", "{role_label}" }
                }
            }
            button {
                r#type: "button",
                class: "top-bar-logout",
                onclick: move |_| on_logout.call(()),
                Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                span { "Logout" }
            }
        }
    }
}

/// Vertical navigation column.
#[component]
pub fn SideNav(#[props(default = false)] open: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "side-nav", "data-open": open, "aria-label": "Main",
            ul { class: "side-nav-list", {children} }
        }
    }
}

/// One entry in [`SideNav`]. The caller supplies the link as `children`.
#[component]
pub fn SideNavItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        li {
            class: "side-nav-item",
            "data-active": active,
            "aria-current": if active { "page" } else { "false" },
            {children}
        }
    }
}
