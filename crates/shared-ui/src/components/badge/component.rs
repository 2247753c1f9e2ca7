use dioxus::prelude::*;
use shared_types::{AlertSeverity, BatteryLevel, BpStatus, SensorStatus};

/// Semantic color of a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    #[default]
    Info,
    Muted,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Muted => "muted",
        }
    }
}

impl From<BpStatus> for Tone {
    fn from(status: BpStatus) -> Self {
        match status {
            BpStatus::Normal => Tone::Success,
            BpStatus::Elevated | BpStatus::High => Tone::Warning,
            BpStatus::Critical => Tone::Danger,
        }
    }
}

impl From<AlertSeverity> for Tone {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::Critical => Tone::Danger,
            AlertSeverity::Warning => Tone::Warning,
            AlertSeverity::Info => Tone::Info,
        }
    }
}

impl From<SensorStatus> for Tone {
    fn from(status: SensorStatus) -> Self {
        match status {
            SensorStatus::Active => Tone::Success,
            SensorStatus::Inactive => Tone::Muted,
            SensorStatus::Error => Tone::Danger,
        }
    }
}

impl From<BatteryLevel> for Tone {
    fn from(level: BatteryLevel) -> Self {
        match level {
            BatteryLevel::Good => Tone::Success,
            BatteryLevel::Low => Tone::Warning,
            BatteryLevel::Critical => Tone::Danger,
        }
    }
}

/// Pill label colored by [`Tone`].
#[component]
pub fn Badge(
    #[props(default)] tone: Tone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge for a blood-pressure category.
#[component]
pub fn BpStatusBadge(status: BpStatus) -> Element {
    rsx! {
        Badge { tone: Tone::from(status), "{status.label()}" }
    }
}
