use crate::auth::use_auth;
use crate::routes::home_route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeartPulse, LdShieldCheck};
use dioxus_free_icons::Icon;
use shared_types::validation::{sanitize_dob_input, validate_credentials, DOB_LEN};
use shared_types::{Credentials, FeatureFlags, Role};
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, FormField, GoogleLoginButton, RoleSelector,
};

/// Landing page: role selection and sign-in.
#[component]
pub fn Index() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();

    let mut role = use_signal(|| Role::Patient);
    let mut email = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut validation_error = use_signal(|| Option::<String>::None);

    // A signed-in visitor (including one who just finished logging in)
    // goes straight to their dashboard.
    use_effect(move || {
        if let Some(role) = auth.snapshot().role() {
            navigator().replace(home_route(role));
        }
    });

    let snapshot = auth.snapshot();
    let loading = snapshot.loading;
    let selected = role();
    let shown_error = validation_error().or_else(|| snapshot.error_message().map(str::to_string));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials::new(email.read().trim(), dob.read().clone());
        match validate_credentials(&credentials) {
            Ok(()) => {
                validation_error.set(None);
                auth.login(role(), Some(credentials));
            }
            Err(err) => validation_error.set(Some(err.message)),
        }
    };

    let google = move |_: ()| {
        validation_error.set(None);
        auth.login_with_google(role());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./index.css") }

        div { class: "login-page",
            div { class: "login-column fade-in",
                header { class: "login-brand",
                    span { class: "login-logo",
                        Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 28, height: 28 }
                    }
                    h1 { "BP Monitor" }
                    p { "Blood Pressure Monitoring System" }
                }

                Card { class: "login-card",
                    CardHeader {
                        CardTitle { "Welcome Back" }
                        p { class: "login-lead", "Select your role" }
                    }
                    CardContent {
                        RoleSelector {
                            selected,
                            on_change: move |next: Role| {
                                role.set(next);
                                validation_error.set(None);
                                auth.clear_error();
                            },
                        }

                        if !selected.uses_credentials() {
                            div { class: "login-actions",
                                if flags.google_login {
                                    GoogleLoginButton { on_click: google, loading, role: selected }
                                } else {
                                    Button {
                                        full_width: true,
                                        loading,
                                        loading_label: "Signing in…",
                                        onclick: move |_| auth.login(Role::Clinic, None),
                                        "Sign In"
                                    }
                                }
                            }
                        } else {
                            form { class: "login-form", onsubmit: handle_submit,
                                FormField {
                                    id: "login-email",
                                    label: "Email",
                                    input_type: "email",
                                    placeholder: "you@example.com",
                                    value: email(),
                                    disabled: loading,
                                    on_input: move |evt: FormEvent| email.set(evt.value()),
                                }
                                FormField {
                                    id: "login-dob",
                                    label: "Date of Birth",
                                    placeholder: "DDMMYYYY",
                                    input_mode: "numeric",
                                    max_length: DOB_LEN,
                                    hint: "Example: 15031990",
                                    value: dob(),
                                    disabled: loading,
                                    on_input: move |evt: FormEvent| dob.set(sanitize_dob_input(&evt.value())),
                                }
                                Button {
                                    button_type: "submit",
                                    full_width: true,
                                    loading,
                                    loading_label: "Signing in…",
                                    "Sign In"
                                }
                            }

                            if flags.google_login {
                                div { class: "login-divider", span { "OR" } }
                                GoogleLoginButton { on_click: google, loading, role: selected }
                            }
                        }

                        if let Some(message) = shown_error {
                            div { class: "login-error", role: "alert", "{message}" }
                        }
                    }
                }

                p { class: "login-footer",
                    Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 14, height: 14 }
                    "Protected by industry-standard encryption. Your health data is secure."
                }
            }
        }
    }
}
