use chrono::{Duration, TimeZone, Utc};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{
    Alert, AlertSeverity, BpReading, BpStatus, DeviceStatus, Patient, Role, SensorStatus, TrendPoint,
};

use super::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn reading(systolic: u16, diastolic: u16, status: BpStatus) -> BpReading {
    BpReading {
        id: format!("r-{systolic}"),
        timestamp: Utc.with_ymd_and_hms(2024, 12, 12, 8, 30, 0).unwrap(),
        systolic,
        diastolic,
        heart_rate: 72,
        status,
    }
}

fn patient(id: &str, name: &str, battery: u8, alerts: u32, bp: Option<BpReading>) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        dob: "15031990".to_string(),
        latest_bp: bp,
        alerts,
        device_status: DeviceStatus {
            battery,
            last_sync: Utc.with_ymd_and_hms(2024, 12, 12, 8, 0, 0).unwrap(),
            ppg_status: SensorStatus::Active,
            imu_status: SensorStatus::Active,
            is_connected: true,
        },
    }
}

#[test]
fn polyline_spans_plot_area() {
    assert_eq!(polyline_points(&[Y_MIN, Y_MAX]), "36.0,196.0 588.0,10.0");
}

#[test]
fn polyline_single_point_is_centered() {
    assert_eq!(polyline_points(&[120]), "312.0,103.0");
}

#[test]
fn polyline_clamps_out_of_range_values() {
    assert_eq!(polyline_points(&[20, 240]), polyline_points(&[Y_MIN, Y_MAX]));
    assert_eq!(polyline_points(&[]), "");
}

#[test]
fn delta_formatting_signs() {
    assert_eq!(format_delta(5, "sys"), "+5 sys");
    assert_eq!(format_delta(-3, "dia"), "-3 dia");
    assert_eq!(format_delta(0, "sys"), "0 sys");
}

#[test]
fn reading_time_format() {
    let at = Utc.with_ymd_and_hms(2024, 12, 12, 20, 5, 0).unwrap();
    assert_eq!(format_reading_time(&at), "Dec 12, 2024 8:05 PM");
}

#[test]
fn pulse_bars_are_stable_and_bounded() {
    let bars = pulse_bar_heights(72);
    assert_eq!(bars, pulse_bar_heights(72));
    assert_eq!(bars[0], 32);
    assert!(bars.iter().all(|h| (20..80).contains(h)));
}

#[test]
fn relative_age_buckets() {
    let now = Utc.with_ymd_and_hms(2024, 12, 12, 12, 0, 0).unwrap();
    assert_eq!(format_relative(&(now - Duration::seconds(20)), &now), "Just now");
    assert_eq!(format_relative(&(now - Duration::minutes(5)), &now), "5m ago");
    assert_eq!(format_relative(&(now - Duration::hours(3)), &now), "3h ago");
    assert_eq!(format_relative(&(now - Duration::days(2)), &now), "2d ago");
    assert_eq!(format_relative(&(now - Duration::days(10)), &now), "Dec 2");
    let last_year = Utc.with_ymd_and_hms(2023, 11, 30, 9, 0, 0).unwrap();
    assert_eq!(format_relative(&last_year, &now), "Nov 30, 2023");
}

#[test]
fn tone_mapping_covers_statuses() {
    assert_eq!(Tone::from(BpStatus::Critical), Tone::Danger);
    assert_eq!(Tone::from(BpStatus::High), Tone::Warning);
    assert_eq!(Tone::from(AlertSeverity::Info), Tone::Info);
    assert_eq!(Tone::from(SensorStatus::Inactive), Tone::Muted);
}

#[test]
fn status_badge_renders_label_and_tone() {
    fn app() -> Element {
        rsx! { BpStatusBadge { status: BpStatus::Elevated } }
    }
    let html = render(app);
    assert!(html.contains("Elevated"), "{html}");
    assert!(html.contains(r#"data-tone="warning""#), "{html}");
}

#[test]
fn reading_card_shows_delta_against_previous() {
    fn app() -> Element {
        rsx! {
            BpReadingCard {
                reading: reading(128, 84, BpStatus::Elevated),
                previous: Some(reading(122, 86, BpStatus::Normal)),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("128"), "{html}");
    assert!(html.contains("+6 sys"), "{html}");
    assert!(html.contains("-2 dia"), "{html}");
}

#[test]
fn patient_table_lists_rows() {
    fn app() -> Element {
        rsx! {
            PatientTable {
                patients: vec![
                    patient("p-1", "John Doe", 85, 2, Some(reading(145, 92, BpStatus::High))),
                    patient("p-2", "Mary Major", 15, 0, None),
                ],
                on_select: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains("John Doe"), "{html}");
    assert!(html.contains("145/92"), "{html}");
    assert!(html.contains("No data"), "{html}");
    assert!(html.contains(r#"data-tone="danger""#), "{html}");
}

#[test]
fn patient_table_empty_message() {
    fn app() -> Element {
        rsx! { PatientTable { patients: Vec::new(), on_select: move |_| {} } }
    }
    assert!(render(app).contains("No patients match your search"));
}

#[test]
fn trend_chart_without_data_shows_placeholder() {
    fn app() -> Element {
        rsx! { TrendChart { data: Vec::new() } }
    }
    let html = render(app);
    assert!(html.contains("No readings yet"), "{html}");
    assert!(!html.contains("<polyline"), "{html}");
}

#[test]
fn trend_chart_draws_both_series() {
    fn app() -> Element {
        rsx! {
            TrendChart {
                data: vec![TrendPoint::new("Mon", 120, 80), TrendPoint::new("Tue", 130, 85)],
            }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("<polyline").count(), 2, "{html}");
    assert!(html.contains("Tue"), "{html}");
}

#[test]
fn alert_card_shows_message_and_age() {
    fn app() -> Element {
        let now = Utc.with_ymd_and_hms(2024, 12, 12, 12, 0, 0).unwrap();
        rsx! {
            AlertCard {
                alert: Alert {
                    id: "a-1".to_string(),
                    severity: AlertSeverity::Critical,
                    message: "Blood pressure above 180/110".to_string(),
                    timestamp: now - Duration::minutes(15),
                    is_read: false,
                },
                now: Some(now),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Blood pressure above 180/110"), "{html}");
    assert!(html.contains("15m ago"), "{html}");
}

#[test]
fn role_selector_marks_selection() {
    fn app() -> Element {
        rsx! { RoleSelector { selected: Role::Family, on_change: move |_| {} } }
    }
    let html = render(app);
    assert!(html.contains("Clinic"), "{html}");
    assert!(html.contains("Family"), "{html}");
}

#[test]
fn top_bar_shows_identity() {
    fn app() -> Element {
        rsx! {
            TopBar {
                display_name: "Jane Doe".to_string(),
                initials: "JD".to_string(),
                role_label: Role::Family.label().to_string(),
                on_logout: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Jane Doe"), "{html}");
    assert!(html.contains("JD"), "{html}");
    assert!(html.contains("Logout"), "{html}");
}
