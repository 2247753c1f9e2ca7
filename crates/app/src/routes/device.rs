use crate::format_helpers::sync_age;
use crate::mock_data::{self, DeviceInfo};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBattery, LdBluetooth, LdRefreshCw, LdWifi};
use dioxus_free_icons::Icon;
use shared_types::{BatteryLevel, SensorStatus};
use shared_ui::{
    use_toast, Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader,
    ToastOptions, Tone,
};

/// Fill level of a 0–100 meter rendered as five segments.
pub fn meter_segments(percent: u8) -> usize {
    (usize::from(percent.min(100)) + 19) / 20
}

/// Wearable status, sensors and hardware details.
#[component]
pub fn Device() -> Element {
    let now = use_hook(Utc::now);
    let info: DeviceInfo = use_hook(move || mock_data::device_info(now));
    let toast = use_toast();
    let mut syncing = use_signal(|| false);

    let status = info.status.clone();
    let battery_tone = Tone::from(status.battery_level());
    let low_battery = status.battery_level() != BatteryLevel::Good;
    let (link_tone, link_label) = if status.is_connected {
        (Tone::Success, "Connected")
    } else {
        (Tone::Danger, "Disconnected")
    };

    let sync_now = move |_: MouseEvent| {
        syncing.set(true);
        spawn(async move {
            session::pause(std::time::Duration::from_millis(1200)).await;
            syncing.set(false);
            toast.success("Device synced".to_string(), ToastOptions::new());
        });
    };

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Device Management",
                subtitle: "Monitor and manage your BP monitoring device",
            }

            Card {
                CardHeader {
                    action: rsx! {
                        Badge { tone: link_tone, "{link_label}" }
                    },
                    CardTitle { "{info.name}" }
                }
                CardContent {
                    div { class: "page-grid two",
                        Meter {
                            label: "Battery",
                            percent: status.battery,
                            tone: battery_tone,
                            icon: rsx! { Icon::<LdBattery> { icon: LdBattery, width: 18, height: 18 } },
                        }
                        Meter {
                            label: "Signal",
                            percent: info.signal_strength,
                            tone: Tone::Info,
                            icon: rsx! { Icon::<LdWifi> { icon: LdWifi, width: 18, height: 18 } },
                        }
                    }
                    if low_battery {
                        p { class: "inline-note", "data-tone": battery_tone.as_str(),
                            "Battery is running low. Charge your monitor soon."
                        }
                    }
                    p { class: "muted-text", "Last synced {sync_age(&status.last_sync, &now)}" }
                }
            }

            div { class: "page-grid two",
                Card {
                    CardHeader { CardTitle { "Sensor Status" } }
                    CardContent { class: "stack",
                        SensorRow { name: "PPG Sensor", detail: "Optical heart-rate and pulse wave", status: status.ppg_status }
                        SensorRow { name: "IMU Sensor", detail: "Motion and posture detection", status: status.imu_status }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Device Information" } }
                    CardContent {
                        dl { class: "detail-list",
                            dt { "Model" }
                            dd { "{info.model}" }
                            dt { "Serial Number" }
                            dd { "{info.serial_number}" }
                            dt { "Firmware" }
                            dd { "{info.firmware}" }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Quick Actions" } }
                CardContent { class: "action-row",
                    Button {
                        loading: syncing(),
                        loading_label: "Syncing…",
                        onclick: sync_now,
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                        "Sync Now"
                    }
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdBluetooth> { icon: LdBluetooth, width: 16, height: 16 }
                        "Pair New Device"
                    }
                }
            }
        }
    }
}

#[component]
fn Meter(label: String, percent: u8, tone: Tone, icon: Element) -> Element {
    let filled = meter_segments(percent);

    rsx! {
        div { class: "meter",
            div { class: "meter-head",
                span { class: "meter-label", {icon} "{label}" }
                span { class: "meter-value", "{percent}%" }
            }
            div { class: "meter-segments", "data-tone": tone.as_str(),
                for i in 0..5usize {
                    span { key: "{i}", class: "meter-segment", "data-filled": i < filled }
                }
            }
        }
    }
}

#[component]
fn SensorRow(name: String, detail: String, status: SensorStatus) -> Element {
    rsx! {
        div { class: "sensor-row",
            div {
                p { class: "sensor-name", "{name}" }
                p { class: "muted-text", "{detail}" }
            }
            Badge { tone: Tone::from(status), "{status.label()}" }
        }
    }
}
