use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdKeyRound, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{
    use_toast, Badge, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
    FormField, PageHeader, SettingToggle, ToastOptions, Tone,
};
use std::time::Duration;

use crate::routes::Route;

/// Notification preferences. Kept for the session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotificationPrefs {
    email_alerts: bool,
    push: bool,
    critical_only: bool,
    daily_report: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_alerts: true,
            push: true,
            critical_only: false,
            daily_report: true,
        }
    }
}

/// Profile, notification and security settings for any role.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let user = auth.snapshot().user;
    let initial_name = user.as_ref().map(|u| u.display_name.clone()).unwrap_or_default();
    let initial_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut phone = use_signal(String::new);
    let mut prefs = use_signal(NotificationPrefs::default);
    let mut saving = use_signal(|| false);

    let save_profile = move |_: MouseEvent| {
        saving.set(true);
        spawn(async move {
            session::pause(Duration::from_millis(1000)).await;
            saving.set(false);
            toast.success("Profile Updated".to_string(), ToastOptions::new());
        });
    };

    let p = prefs();

    rsx! {
        div { class: "page narrow",
            PageHeader { title: "Settings", subtitle: "Manage your account and preferences" }

            Card {
                CardHeader { CardTitle { "Profile" } }
                CardContent { class: "stack",
                    FormField {
                        id: "settings-name",
                        label: "Full Name",
                        value: name(),
                        on_input: move |evt: FormEvent| name.set(evt.value()),
                    }
                    FormField {
                        id: "settings-email",
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        on_input: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FormField {
                        id: "settings-phone",
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "+1 555 000 0000",
                        value: phone(),
                        on_input: move |evt: FormEvent| phone.set(evt.value()),
                    }
                }
                CardFooter {
                    Button { loading: saving(), loading_label: "Saving…", onclick: save_profile, "Save Changes" }
                }
            }

            if flags.google_login {
                Card {
                    CardHeader { CardTitle { "Connected Accounts" } }
                    CardContent {
                        div { class: "sensor-row",
                            div {
                                p { class: "sensor-name", "Google" }
                                p { class: "muted-text", "Used for single sign-on" }
                            }
                            Badge { tone: Tone::Success, "Connected" }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Notifications" } }
                CardContent { class: "stack",
                    SettingToggle {
                        title: "Email Alerts",
                        description: "Receive alerts by email",
                        checked: p.email_alerts,
                        on_change: move |on: bool| prefs.write().email_alerts = on,
                    }
                    SettingToggle {
                        title: "Push Notifications",
                        description: "Receive alerts on this device",
                        checked: p.push,
                        on_change: move |on: bool| prefs.write().push = on,
                    }
                    SettingToggle {
                        title: "Critical Alerts Only",
                        description: "Mute warning and info alerts",
                        checked: p.critical_only,
                        on_change: move |on: bool| prefs.write().critical_only = on,
                    }
                    SettingToggle {
                        title: "Daily Report",
                        description: "A summary of the day's readings every evening",
                        checked: p.daily_report,
                        on_change: move |on: bool| prefs.write().daily_report = on,
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Security" } }
                CardContent { class: "action-row",
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdKeyRound> { icon: LdKeyRound, width: 16, height: 16 }
                        "Change Password"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            auth.logout();
                            navigator().replace(Route::Index {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }
        }
    }
}
