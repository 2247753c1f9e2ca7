use crate::auth::use_auth;
use crate::mock_data;
use crate::routes::Route;
use chrono::Utc;
use dioxus::prelude::*;
use shared_types::HeartRateStatus;
use shared_ui::{
    AlertCard, BpReadingCard, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DeviceStatusCard, HeartRateCard, PageHeader, TrendChart,
};

/// Home page for patients and family members.
#[component]
pub fn PatientDashboard() -> Element {
    let auth = use_auth();
    let now = use_hook(Utc::now);
    let mut alerts = use_signal(move || mock_data::dashboard_alerts(now));

    let (latest, previous) = mock_data::current_readings(now);
    let device = mock_data::own_device(now);
    let heart_status = HeartRateStatus::from_bpm(latest.heart_rate);
    let greeting = auth
        .snapshot()
        .user
        .map(|user| format!("Welcome back, {}", user.first_name()))
        .unwrap_or_else(|| "Welcome back".to_string());
    let visible = alerts.read().clone();

    rsx! {
        div { class: "page",
            PageHeader {
                title: greeting,
                subtitle: "Here's your health overview for today",
            }

            div { class: "page-grid three",
                BpReadingCard { reading: latest.clone(), previous: previous }
                HeartRateCard { heart_rate: latest.heart_rate, status: heart_status }
                DeviceStatusCard { status: device }
            }

            TrendChart { data: mock_data::weekly_trend(), title: "Weekly BP Trends" }

            Card {
                CardHeader {
                    action: rsx! {
                        Link { to: Route::Alerts {},
                            Button { variant: ButtonVariant::Ghost, "View all" }
                        }
                    },
                    CardTitle { "Recent Alerts" }
                }
                CardContent { class: "stack",
                    if visible.is_empty() {
                        p { class: "empty-state", "You're all caught up" }
                    }
                    for alert in visible {
                        AlertCard {
                            key: "{alert.id}",
                            alert: alert.clone(),
                            compact: true,
                            now,
                            on_dismiss: move |id: String| alerts.write().retain(|a| a.id != id),
                        }
                    }
                }
            }
        }
    }
}
