use dioxus::prelude::*;

/// Labelled text input with an inline error line.
///
/// The input is marked `aria-invalid` while `error` is non-empty.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default, into)] input_mode: Option<String>,
    #[props(default)] max_length: Option<usize>,
    #[props(default)] error: Option<String>,
    #[props(default, into)] hint: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let invalid = error.as_ref().is_some_and(|e| !e.is_empty());
    let error_id = format!("{id}-error");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            label { class: "form-field-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "form-field-input",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                inputmode: input_mode,
                maxlength: max_length.map(|n| n.to_string()),
                "aria-invalid": invalid,
                "aria-describedby": if invalid { Some(error_id.clone()) } else { None },
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = error.filter(|e| !e.is_empty()) {
                p { id: "{error_id}", class: "form-field-error", role: "alert", "{err}" }
            } else if let Some(hint) = hint {
                p { class: "form-field-hint", "{hint}" }
            }
        }
    }
}
