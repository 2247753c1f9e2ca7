use crate::format_helpers::format_dob;
use crate::mock_data;
use crate::roster::use_roster;
use crate::routes::Route;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdMail};
use dioxus_free_icons::Icon;
use shared_types::{HeartRateStatus, Patient};
use shared_ui::{
    AlertCard, BpReadingCard, BpStatusBadge, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, DeviceStatusCard, HeartRateCard, TrendChart,
};

/// Clinic view of one patient.
#[component]
pub fn PatientDetails(id: String) -> Element {
    let roster = use_roster();
    let now = use_hook(Utc::now);

    let Some(patient) = roster.find(&id) else {
        tracing::debug!(patient_id = %id, "patient not on roster");
        return rsx! {
            div { class: "page",
                Card {
                    CardContent { class: "empty-state",
                        p { "Patient not found." }
                        BackButton {}
                    }
                }
            }
        };
    };

    rsx! {
        div { class: "page",
            div { class: "page-toolbar",
                BackButton {}
            }
            ProfileCard { patient: patient.clone() }

            div { class: "page-grid three",
                if let Some(reading) = patient.latest_bp.clone() {
                    BpReadingCard { reading: reading.clone() }
                    HeartRateCard {
                        heart_rate: reading.heart_rate,
                        status: HeartRateStatus::from_bpm(reading.heart_rate),
                    }
                } else {
                    Card {
                        CardContent { class: "empty-state",
                            p { "No readings yet. Readings appear once the device syncs." }
                        }
                    }
                }
                DeviceStatusCard { status: patient.device_status.clone() }
            }

            TrendChart { data: mock_data::patient_trend(), title: "Blood Pressure History" }

            Card {
                CardHeader { CardTitle { "Alert History" } }
                CardContent { class: "stack",
                    for alert in mock_data::patient_alert_history(now) {
                        AlertCard { key: "{alert.id}", alert: alert.clone(), now }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileCard(patient: Patient) -> Element {
    let initials = patient.initials();

    rsx! {
        Card {
            CardContent { class: "profile",
                span { class: "profile-avatar", "aria-hidden": "true", "{initials}" }
                div { class: "profile-body",
                    h1 { class: "profile-name", "{patient.name}" }
                    p { class: "profile-meta",
                        Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                        "{patient.email}"
                    }
                    p { class: "profile-meta", "DOB: {format_dob(&patient.dob)}" }
                }
                if let Some(reading) = &patient.latest_bp {
                    BpStatusBadge { status: reading.status }
                }
            }
        }
    }
}

#[component]
fn BackButton() -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| { navigator().push(Route::ClinicDashboard {}); },
            Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
            "Back to Dashboard"
        }
    }
}
