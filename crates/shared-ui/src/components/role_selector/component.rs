use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding2, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{Role, ALL_ROLES};

/// Three-way role picker shown above the sign-in form.
#[component]
pub fn RoleSelector(selected: Role, on_change: EventHandler<Role>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "role-selector", role: "radiogroup", "aria-label": "Sign in as",
            for role in ALL_ROLES.iter().copied() {
                button {
                    key: "{role}",
                    r#type: "button",
                    class: "role-option",
                    role: "radio",
                    "aria-checked": role == selected,
                    "data-selected": role == selected,
                    onclick: move |_| on_change.call(role),
                    span { class: "role-option-icon",
                        {match role {
                            Role::Clinic => rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 22, height: 22 } },
                            Role::Patient => rsx! { Icon::<LdUser> { icon: LdUser, width: 22, height: 22 } },
                            Role::Family => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
                        }}
                    }
                    span { class: "role-option-label", "{role.label()}" }
                    span { class: "role-option-description", "{role.description()}" }
                }
            }
        }
    }
}
