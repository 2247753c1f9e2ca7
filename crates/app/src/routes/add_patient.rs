use crate::roster::use_roster;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::validation::{sanitize_dob_input, validate_new_patient, DOB_LEN};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
    FormField, PageHeader, ToastOptions,
};
use std::collections::HashMap;
use std::time::Duration;

/// Simulated save round-trip.
const SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Clinic form for enrolling a new patient.
#[component]
pub fn AddPatient() -> Element {
    let roster = use_roster();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let (n, e, d) = (name.read().clone(), email.read().clone(), dob.read().clone());
        if let Err(err) = validate_new_patient(&n, &e, &d) {
            field_errors.set(err.field_errors);
            return;
        }
        field_errors.set(HashMap::new());
        saving.set(true);
        spawn(async move {
            session::pause(SAVE_DELAY).await;
            roster.admit(&n, &e, &d);
            saving.set(false);
            toast.success(
                format!("{} has been added to your patient list.", n.trim()),
                ToastOptions::new(),
            );
            navigator().replace(Route::ClinicDashboard {});
        });
    };

    rsx! {
        div { class: "page narrow",
            PageHeader {
                title: "Add New Patient",
                subtitle: "Register a patient to start remote monitoring",
            }

            form { onsubmit: handle_submit,
                Card {
                    CardHeader { CardTitle { "Patient Information" } }
                    CardContent { class: "stack",
                        FormField {
                            id: "patient-name",
                            label: "Full Name",
                            placeholder: "John Doe",
                            value: name(),
                            error: error_for("name"),
                            disabled: saving(),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        FormField {
                            id: "patient-email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "patient@example.com",
                            value: email(),
                            error: error_for("email"),
                            disabled: saving(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FormField {
                            id: "patient-dob",
                            label: "Date of Birth",
                            placeholder: "DDMMYYYY",
                            input_mode: "numeric",
                            max_length: DOB_LEN,
                            hint: "The patient signs in with this date",
                            value: dob(),
                            error: error_for("dob"),
                            disabled: saving(),
                            on_input: move |evt: FormEvent| dob.set(sanitize_dob_input(&evt.value())),
                        }
                        FormField {
                            id: "patient-phone",
                            label: "Phone (optional)",
                            input_type: "tel",
                            placeholder: "+1 555 000 0000",
                            value: phone(),
                            disabled: saving(),
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: saving(),
                            onclick: move |_| { navigator().go_back(); },
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            loading: saving(),
                            loading_label: "Adding…",
                            "Add Patient"
                        }
                    }
                }
            }
        }
    }
}
