use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBattery, LdBluetooth, LdCpu, LdHeart, LdRefreshCw, LdTrendingDown, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::{BpReading, DeviceStatus, HeartRateStatus, SensorStatus};

use crate::{Badge, BpStatusBadge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Tone};

const PULSE_BARS: usize = 12;

/// `Dec 12, 2024 8:30 AM`
pub fn format_reading_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// `+5 sys` / `-3 dia`. Zero reads as `0`.
pub fn format_delta(delta: i32, unit: &str) -> String {
    if delta > 0 {
        format!("+{delta} {unit}")
    } else {
        format!("{delta} {unit}")
    }
}

/// Bar heights (percent) for the pulse strip. Deterministic for a given rate.
pub fn pulse_bar_heights(heart_rate: u16) -> [u8; PULSE_BARS] {
    let mut bars = [0u8; PULSE_BARS];
    for (i, bar) in bars.iter_mut().enumerate() {
        let wobble = (usize::from(heart_rate) * (i + 3) * 37) % 60;
        *bar = 20 + wobble as u8;
    }
    bars
}

/// Latest reading, its category, and the change since `previous`.
#[component]
pub fn BpReadingCard(reading: BpReading, #[props(default)] previous: Option<BpReading>) -> Element {
    let tone = Tone::from(reading.status);
    let taken = format_reading_time(&reading.timestamp);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { accent: Some(tone), class: "vitals-card",
            CardHeader {
                action: rsx! { BpStatusBadge { status: reading.status } },
                CardTitle {
                    span { class: "vitals-icon", "data-tone": tone.as_str(),
                        Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 }
                    }
                    "Blood Pressure"
                }
            }
            CardContent {
                div { class: "bp-value",
                    span { class: "bp-systolic", "{reading.systolic}" }
                    span { class: "bp-separator", "/" }
                    span { class: "bp-diastolic", "{reading.diastolic}" }
                    span { class: "vitals-unit", "mmHg" }
                }
                if let Some(prev) = previous {
                    {
                        let (sys, dia) = reading.delta_from(&prev);
                        rsx! {
                            div { class: "bp-deltas",
                                DeltaChip { delta: sys, unit: "sys" }
                                DeltaChip { delta: dia, unit: "dia" }
                            }
                        }
                    }
                }
                p { class: "vitals-footnote", "Last reading: {taken}" }
            }
        }
    }
}

#[component]
fn DeltaChip(delta: i32, unit: &'static str) -> Element {
    let rising = delta > 0;
    let label = format_delta(delta, unit);
    rsx! {
        span { class: "bp-delta", "data-rising": rising,
            if rising {
                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
            } else {
                Icon::<LdTrendingDown> { icon: LdTrendingDown, width: 16, height: 16 }
            }
            "{label}"
        }
    }
}

#[component]
pub fn HeartRateCard(heart_rate: u16, #[props(default)] status: HeartRateStatus) -> Element {
    let bars = pulse_bar_heights(heart_rate);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "vitals-card",
            CardHeader {
                CardTitle {
                    span { class: "vitals-icon heartbeat", "data-tone": "danger",
                        Icon::<LdHeart> { icon: LdHeart, width: 20, height: 20 }
                    }
                    "Heart Rate"
                }
            }
            CardContent {
                div { class: "hr-value",
                    span { class: "hr-number", "data-status": status.as_str(), "{heart_rate}" }
                    span { class: "vitals-unit", "BPM" }
                }
                div { class: "pulse-strip", "aria-hidden": "true",
                    for (i, height) in bars.iter().enumerate() {
                        div { key: "{i}", class: "pulse-bar",
                            div { class: "pulse-bar-fill", style: "height: {height}%" }
                        }
                    }
                }
                p { class: "vitals-footnote", "Live monitoring active" }
            }
        }
    }
}

/// Battery, sensors and sync time of the wearable.
#[component]
pub fn DeviceStatusCard(
    status: DeviceStatus,
    #[props(default)] on_sync: Option<EventHandler<()>>,
) -> Element {
    let battery_tone = Tone::from(status.battery_level());
    let synced = format_reading_time(&status.last_sync);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "vitals-card",
            CardHeader {
                action: rsx! {
                    if let Some(handler) = on_sync {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| handler.call(()),
                            Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                            "Sync"
                        }
                    }
                },
                CardTitle {
                    span { class: "vitals-icon", "data-tone": if status.is_connected { "info" } else { "muted" },
                        Icon::<LdBluetooth> { icon: LdBluetooth, width: 20, height: 20 }
                    }
                    "Device Status"
                }
            }
            CardContent {
                div { class: "device-row",
                    span { class: "device-row-label",
                        span { class: "vitals-icon", "data-tone": battery_tone.as_str(),
                            Icon::<LdBattery> { icon: LdBattery, width: 18, height: 18 }
                        }
                        "Battery"
                    }
                    span { class: "battery-meter",
                        span { class: "battery-track",
                            span {
                                class: "battery-fill",
                                "data-tone": battery_tone.as_str(),
                                style: "width: {status.battery}%",
                            }
                        }
                        span { class: "battery-percent", "{status.battery}%" }
                    }
                }
                SensorRow { label: "PPG Sensor", status: status.ppg_status, cpu: false }
                SensorRow { label: "IMU Sensor", status: status.imu_status, cpu: true }
                p { class: "vitals-footnote device-sync", "Last sync: {synced}" }
            }
        }
    }
}

#[component]
fn SensorRow(label: &'static str, status: SensorStatus, cpu: bool) -> Element {
    rsx! {
        div { class: "device-row",
            span { class: "device-row-label",
                span { class: "vitals-icon", "data-tone": "info",
                    if cpu {
                        Icon::<LdCpu> { icon: LdCpu, width: 18, height: 18 }
                    } else {
                        Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 }
                    }
                }
                "{label}"
            }
            Badge { tone: Tone::from(status), "{status.label()}" }
        }
    }
}
