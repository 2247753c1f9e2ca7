use chrono::{DateTime, Datelike, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdInfo, LdTriangleAlert, LdX};
use dioxus_free_icons::Icon;
use shared_types::{Alert, AlertSeverity};

use crate::Tone;

/// Relative age of an alert: `Just now`, `5m ago`, `3h ago`, `2d ago`,
/// then a short date (with year only when it differs from `now`).
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else if at.year() == now.year() {
        at.format("%b %-d").to_string()
    } else {
        at.format("%b %-d, %Y").to_string()
    }
}

/// One health or device alert with an optional dismiss control.
#[component]
pub fn AlertCard(
    alert: Alert,
    #[props(default)] on_dismiss: Option<EventHandler<String>>,
    #[props(default = false)] compact: bool,
    #[props(default)] now: Option<DateTime<Utc>>,
) -> Element {
    let tone = Tone::from(alert.severity);
    let critical = alert.severity == AlertSeverity::Critical;
    let age = format_relative(&alert.timestamp, &now.unwrap_or_else(Utc::now));
    let stamp = alert.timestamp.to_rfc3339();
    let id = alert.id.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "alert-card",
            role: "alert",
            "aria-live": if critical { "assertive" } else { "polite" },
            "data-tone": tone.as_str(),
            "data-compact": compact,
            "data-read": alert.is_read,
            span { class: "alert-card-icon", "aria-hidden": "true",
                {match alert.severity {
                    AlertSeverity::Critical => rsx! { Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 20, height: 20 } },
                    AlertSeverity::Warning => rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 20, height: 20 } },
                    AlertSeverity::Info => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 20, height: 20 } },
                }}
            }
            div { class: "alert-card-body",
                if critical && !compact {
                    span { class: "alert-card-urgent", "Urgent" }
                }
                p { class: "alert-card-message", "{alert.message}" }
                time { class: "alert-card-time", datetime: "{stamp}", "{age}" }
            }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    class: "alert-card-dismiss",
                    "aria-label": "Dismiss alert",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        handler.call(id.clone());
                    },
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
        }
    }
}
