use crate::format_helpers::count_label;
use crate::mock_data;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheckCheck;
use dioxus_free_icons::Icon;
use shared_types::{Alert, AlertSeverity, AlertSummary};
use shared_ui::{AlertCard, Button, ButtonVariant, Card, CardContent, PageHeader, StatCard, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    Unread,
    Critical,
}

impl AlertFilter {
    pub const ALL: [AlertFilter; 3] = [AlertFilter::All, AlertFilter::Unread, AlertFilter::Critical];

    pub fn label(&self) -> &'static str {
        match self {
            AlertFilter::All => "All",
            AlertFilter::Unread => "Unread",
            AlertFilter::Critical => "Critical",
        }
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unread => !alert.is_read,
            AlertFilter::Critical => alert.severity == AlertSeverity::Critical,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            AlertFilter::All => "No alerts",
            AlertFilter::Unread => "No unread alerts",
            AlertFilter::Critical => "No critical alerts",
        }
    }
}

/// Alert inbox shared by every role.
#[component]
pub fn Alerts() -> Element {
    let now = use_hook(Utc::now);
    let mut alerts = use_signal(move || mock_data::alert_feed(now));
    let mut filter = use_signal(|| AlertFilter::All);

    let summary = AlertSummary::from_alerts(&alerts.read());
    let active = filter();
    let visible: Vec<Alert> = alerts.read().iter().filter(|a| active.matches(a)).cloned().collect();

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Alerts",
                subtitle: count_label(summary.unread, "unread alert"),
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: summary.unread == 0,
                    onclick: move |_| {
                        for alert in alerts.write().iter_mut() {
                            alert.is_read = true;
                        }
                    },
                    Icon::<LdCheckCheck> { icon: LdCheckCheck, width: 16, height: 16 }
                    "Mark All as Read"
                }
            }

            div { class: "page-grid three",
                StatCard { label: "Critical", value: summary.critical.to_string(), tone: Tone::Danger }
                StatCard { label: "Warning", value: summary.warning.to_string(), tone: Tone::Warning }
                StatCard { label: "Info", value: summary.info.to_string(), tone: Tone::Info }
            }

            div { class: "segmented", role: "tablist",
                for option in AlertFilter::ALL {
                    button {
                        key: "{option.label()}",
                        r#type: "button",
                        role: "tab",
                        class: "segmented-item",
                        "aria-selected": option == active,
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            if visible.is_empty() {
                Card {
                    CardContent { class: "empty-state",
                        p { "{active.empty_message()}" }
                    }
                }
            } else {
                div { class: "stack",
                    for alert in visible {
                        AlertCard {
                            key: "{alert.id}",
                            alert: alert.clone(),
                            now,
                            on_dismiss: move |id: String| alerts.write().retain(|a| a.id != id),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn feed() -> Vec<Alert> {
        mock_data::alert_feed(Utc.with_ymd_and_hms(2024, 12, 12, 12, 0, 0).unwrap())
    }

    fn count(filter: AlertFilter, alerts: &[Alert]) -> usize {
        alerts.iter().filter(|a| filter.matches(a)).count()
    }

    #[test]
    fn filters_partition_the_feed() {
        let alerts = feed();
        assert_eq!(count(AlertFilter::All, &alerts), 5);
        assert_eq!(count(AlertFilter::Unread, &alerts), 3);
        assert_eq!(count(AlertFilter::Critical, &alerts), 1);
    }

    #[test]
    fn unread_filter_empties_after_mark_all() {
        let mut alerts = feed();
        for alert in alerts.iter_mut() {
            alert.is_read = true;
        }
        assert_eq!(count(AlertFilter::Unread, &alerts), 0);
        assert_eq!(AlertFilter::Unread.empty_message(), "No unread alerts");
    }
}
