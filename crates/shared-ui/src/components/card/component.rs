use dioxus::prelude::*;

use crate::Tone;

/// Surface container. `accent` draws a colored left edge.
#[component]
pub fn Card(
    #[props(default)] accent: Option<Tone>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![Attribute::new("class", "card", None, false)];
    if let Some(tone) = accent {
        base.push(Attribute::new("data-accent", tone.as_str(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row: heading on the left, `action` on the right.
#[component]
pub fn CardHeader(
    #[props(default)] action: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card-header",
            div { class: "card-header-main", {children} }
            if let Some(action) = action {
                div { class: "card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Single number with a caption, used in dashboard stat rows.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] tone: Tone) -> Element {
    rsx! {
        Card { accent: Some(tone),
            div { class: "stat-card",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-value", "data-tone": tone.as_str(), "{value}" }
            }
        }
    }
}
