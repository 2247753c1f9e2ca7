use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBattery, LdBell};
use dioxus_free_icons::Icon;
use shared_types::{BpStatus, Patient};

use crate::{Badge, BpStatusBadge, Tone};

/// Clinic roster. Rows open the patient via `on_select(id)`.
#[component]
pub fn PatientTable(
    patients: Vec<Patient>,
    on_select: EventHandler<String>,
    #[props(default = "No patients match your search".to_string())] empty_message: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "patient-table",
            table {
                thead {
                    tr {
                        th { "Patient" }
                        th { "Latest BP" }
                        th { "Status" }
                        th { "Alerts" }
                        th { "Device" }
                        th { class: "patient-table-actions", "Actions" }
                    }
                }
                tbody {
                    if patients.is_empty() {
                        tr {
                            td { colspan: "6", class: "patient-table-empty", "{empty_message}" }
                        }
                    }
                    for patient in patients {
                        PatientRow { key: "{patient.id}", patient, on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn PatientRow(patient: Patient, on_select: EventHandler<String>) -> Element {
    let status = patient.latest_bp.as_ref().map_or(BpStatus::Normal, |r| r.status);
    let reading = patient
        .latest_bp
        .as_ref()
        .map(|r| format!("{}/{}", r.systolic, r.diastolic));
    let battery_tone = Tone::from(patient.device_status.battery_level());
    let row_id = patient.id.clone();
    let button_id = patient.id.clone();

    rsx! {
        tr {
            class: "patient-row",
            "data-status": status.as_str(),
            onclick: move |_| on_select.call(row_id.clone()),
            td {
                div { class: "patient-cell",
                    span { class: "patient-name", "{patient.name}" }
                    span { class: "patient-email", "{patient.email}" }
                }
            }
            td { class: "patient-bp",
                match reading {
                    Some(bp) => rsx! { "{bp}" span { class: "patient-bp-unit", " mmHg" } },
                    None => rsx! { span { class: "patient-muted", "No data" } },
                }
            }
            td { BpStatusBadge { status } }
            td {
                if patient.alerts > 0 {
                    Badge { tone: Tone::Danger,
                        Icon::<LdBell> { icon: LdBell, width: 12, height: 12 }
                        "{patient.alerts}"
                    }
                } else {
                    span { class: "patient-muted", "None" }
                }
            }
            td {
                span { class: "patient-device", "data-tone": battery_tone.as_str(),
                    Icon::<LdBattery> { icon: LdBattery, width: 16, height: 16 }
                    "{patient.device_status.battery}%"
                }
            }
            td { class: "patient-table-actions",
                button {
                    r#type: "button",
                    class: "patient-view",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_select.call(button_id.clone());
                    },
                    "View"
                }
            }
        }
    }
}
