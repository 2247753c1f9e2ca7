use dioxus::prelude::*;
use shared_types::Role;

/// "Sign in with Google" button. The hover ring follows the selected role.
#[component]
pub fn GoogleLoginButton(
    on_click: EventHandler<()>,
    #[props(default = false)] loading: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = Role::Patient)] role: Role,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            class: "google-button",
            "data-role": role.as_str(),
            disabled: loading || disabled,
            "aria-busy": loading,
            onclick: move |_| on_click.call(()),
            if loading {
                span { class: "google-spinner", "aria-hidden": "true" }
                "Signing in…"
            } else {
                GoogleMark {}
                "Sign in with Google"
            }
        }
    }
}

#[component]
fn GoogleMark() -> Element {
    rsx! {
        svg { class: "google-mark", view_box: "0 0 48 48", "aria-hidden": "true",
            path { fill: "#EA4335", d: "M24 9.5c3.54 0 6.69 1.23 9.19 3.26l6.85-6.85C35.9 1.86 30.47 0 24 0 14.62 0 6.51 5.38 2.56 13.22l7.98 6.19C12.43 13.41 17.74 9.5 24 9.5z" }
            path { fill: "#4285F4", d: "M46.5 24c0-1.64-.15-3.21-.43-4.73H24v9.01h12.7c-.55 2.96-2.18 5.47-4.63 7.18l7.12 5.53C43.73 36.71 46.5 30.9 46.5 24z" }
            path { fill: "#FBBC05", d: "M10.54 28.41c-.48-1.45-.76-2.99-.76-4.41s.27-2.96.76-4.41l-7.98-6.19C.92 16.07 0 19.94 0 24s.92 7.93 2.56 11.6l7.98-6.19z" }
            path { fill: "#34A853", d: "M24 48c6.48 0 11.93-2.14 15.91-5.82l-7.12-5.53c-1.97 1.32-4.5 2.1-8.79 2.1-6.26 0-11.57-3.91-13.46-9.31l-7.98 6.19C6.51 42.62 14.62 48 24 48z" }
        }
    }
}
