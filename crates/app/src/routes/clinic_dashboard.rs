use crate::format_helpers::count_label;
use crate::mock_data;
use crate::roster::use_roster;
use crate::routes::Route;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::{Patient, PatientStats};
use shared_ui::{
    AlertCard, Button, Card, CardContent, CardHeader, CardTitle, PageHeader, PatientTable,
    StatCard, Tone,
};

/// Patients whose name or email contains `query`, in roster order.
pub fn filter_patients(patients: &[Patient], query: &str) -> Vec<Patient> {
    patients.iter().filter(|p| p.matches_query(query)).cloned().collect()
}

/// Clinic home: roster statistics, searchable patient list, recent alerts.
#[component]
pub fn ClinicDashboard() -> Element {
    let roster = use_roster();
    let now = use_hook(Utc::now);
    let alerts = use_hook(move || mock_data::clinic_alerts(now));

    let stats = PatientStats::from_patients(&roster.patients.read());

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Clinic Dashboard",
                subtitle: "Monitor all your patients at a glance",
                Button {
                    onclick: move |_| { navigator().push(Route::AddPatient {}); },
                    Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                    "Add Patient"
                }
            }

            div { class: "page-grid four",
                StatCard { label: "Total Patients", value: stats.total.to_string() }
                StatCard { label: "Critical", value: stats.critical.to_string(), tone: Tone::Danger }
                StatCard { label: "Elevated", value: stats.elevated.to_string(), tone: Tone::Warning }
                StatCard { label: "Normal", value: stats.normal.to_string(), tone: Tone::Success }
            }

            PatientDirectory {}

            Card {
                CardHeader { CardTitle { "Recent Alerts" } }
                CardContent { class: "stack",
                    for alert in alerts {
                        AlertCard { key: "{alert.id}", alert: alert.clone(), compact: true, now }
                    }
                }
            }
        }
    }
}

/// `/clinic/patients` shows the same dashboard.
#[component]
pub fn ClinicPatients() -> Element {
    rsx! { ClinicDashboard {} }
}

/// Search box plus patient table. Selecting a row opens its details page.
#[component]
fn PatientDirectory() -> Element {
    let roster = use_roster();
    let mut query = use_signal(String::new);

    let all = roster.patients.read().clone();
    let matches = filter_patients(&all, &query.read());
    let summary = if query.read().trim().is_empty() {
        count_label(all.len(), "patient")
    } else {
        format!("{} of {}", matches.len(), count_label(all.len(), "patient"))
    };

    rsx! {
        Card {
            CardHeader {
                action: rsx! {
                    label { class: "search-box",
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        input {
                            r#type: "search",
                            placeholder: "Search patients…",
                            "aria-label": "Search patients",
                            value: "{query}",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                    }
                },
                CardTitle { "Patients" }
            }
            CardContent {
                p { class: "muted-text", "{summary}" }
                PatientTable {
                    patients: matches,
                    on_select: move |id: String| {
                        navigator().push(Route::PatientDetails { id });
                    },
                }
            }
        }
    }
}
