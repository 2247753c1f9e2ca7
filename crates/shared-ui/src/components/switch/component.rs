use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Settings row: title and description on the left, a switch on the right.
#[component]
pub fn SettingToggle(
    title: String,
    #[props(default)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "setting-toggle",
            div { class: "setting-toggle-text",
                span { class: "setting-toggle-title", "{title}" }
                if !description.is_empty() {
                    span { class: "setting-toggle-description", "{description}" }
                }
            }
            Switch {
                checked,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
        }
    }
}
