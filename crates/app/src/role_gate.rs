use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::RoleSet;

/// Check if the signed-in user's role is in `allow`.
pub fn use_role_check(allow: RoleSet) -> bool {
    let auth = use_auth();
    auth.snapshot().role().is_some_and(|role| allow.contains(role))
}

/// Conditionally render children based on the user's role.
/// Shows `fallback` (nothing by default) otherwise.
#[component]
pub fn RoleGate(allow: RoleSet, #[props(default)] fallback: Element, children: Element) -> Element {
    if use_role_check(allow) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
