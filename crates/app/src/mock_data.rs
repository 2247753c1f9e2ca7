//! In-memory fixtures behind every dashboard. Timestamps are relative to
//! the `now` passed in so that "2h ago" labels stay meaningful.

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_types::{
    Alert, AlertSeverity, BpReading, BpStatus, DeviceStatus, Patient, SensorStatus, TrendPoint,
};

use crate::format_helpers::short_date;

fn reading(
    id: &str,
    timestamp: DateTime<Utc>,
    (systolic, diastolic): (u16, u16),
    heart_rate: u16,
    status: BpStatus,
) -> BpReading {
    BpReading {
        id: id.to_string(),
        timestamp,
        systolic,
        diastolic,
        heart_rate,
        status,
    }
}

fn alert(id: &str, severity: AlertSeverity, message: &str, timestamp: DateTime<Utc>, is_read: bool) -> Alert {
    Alert {
        id: id.to_string(),
        severity,
        message: message.to_string(),
        timestamp,
        is_read,
    }
}

fn device(battery: u8, last_sync: DateTime<Utc>, imu: SensorStatus, is_connected: bool) -> DeviceStatus {
    DeviceStatus {
        battery,
        last_sync,
        ppg_status: SensorStatus::Active,
        imu_status: imu,
        is_connected,
    }
}

// ── Patient / family ─────────────────────────────────────────

/// Latest and previous reading for the signed-in patient.
pub fn current_readings(now: DateTime<Utc>) -> (BpReading, BpReading) {
    (
        reading("1", now, (128, 82), 72, BpStatus::Elevated),
        reading("2", now - Duration::days(1), (135, 88), 78, BpStatus::High),
    )
}

pub fn own_device(now: DateTime<Utc>) -> DeviceStatus {
    device(78, now - Duration::hours(1), SensorStatus::Active, true)
}

pub fn dashboard_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            "1",
            AlertSeverity::Warning,
            "Your blood pressure has been slightly elevated for the past 3 readings.",
            now - Duration::hours(2),
            false,
        ),
        alert(
            "2",
            AlertSeverity::Info,
            "Remember to take your medication at 8:00 PM.",
            now - Duration::hours(4),
            false,
        ),
    ]
}

pub fn weekly_trend() -> Vec<TrendPoint> {
    [
        ("Mon", 122, 78),
        ("Tue", 128, 82),
        ("Wed", 135, 88),
        ("Thu", 130, 84),
        ("Fri", 125, 80),
        ("Sat", 128, 82),
        ("Sun", 126, 81),
    ]
    .into_iter()
    .map(|(day, sys, dia)| TrendPoint::new(day, sys, dia))
    .collect()
}

/// Reading log, newest first.
pub fn reading_history() -> Vec<BpReading> {
    let at = |d: u32, h: u32, m: u32| Utc.with_ymd_and_hms(2024, 12, d, h, m, 0).single().unwrap_or_default();
    vec![
        reading("1", at(12, 8, 30), (128, 82), 72, BpStatus::Elevated),
        reading("2", at(11, 9, 15), (122, 78), 68, BpStatus::Normal),
        reading("3", at(10, 8, 45), (135, 88), 78, BpStatus::High),
        reading("4", at(9, 9, 0), (118, 76), 65, BpStatus::Normal),
        reading("5", at(8, 8, 30), (125, 80), 70, BpStatus::Normal),
        reading("6", at(7, 9, 30), (130, 85), 75, BpStatus::Elevated),
        reading("7", at(6, 8, 15), (142, 92), 82, BpStatus::High),
    ]
}

/// Oldest-first trend built from a newest-first log.
pub fn trend_from_history(history: &[BpReading]) -> Vec<TrendPoint> {
    history
        .iter()
        .rev()
        .map(|r| TrendPoint::new(short_date(&r.timestamp), r.systolic, r.diastolic))
        .collect()
}

/// Everything the Alerts page starts with.
pub fn alert_feed(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            "1",
            AlertSeverity::Critical,
            "Blood pressure reading of 165/105 detected. Please consult your healthcare provider immediately.",
            now - Duration::minutes(30),
            false,
        ),
        alert(
            "2",
            AlertSeverity::Warning,
            "Your blood pressure has been elevated for 3 consecutive readings.",
            now - Duration::hours(2),
            false,
        ),
        alert(
            "3",
            AlertSeverity::Warning,
            "Device battery is below 20%. Please charge your monitor.",
            now - Duration::hours(4),
            false,
        ),
        alert(
            "4",
            AlertSeverity::Info,
            "Your weekly health report is ready to view.",
            now - Duration::days(1),
            true,
        ),
        alert(
            "5",
            AlertSeverity::Info,
            "Remember to take your evening medication.",
            now - Duration::days(2),
            true,
        ),
    ]
}

/// Hardware details shown on the Device page.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    pub name: &'static str,
    pub model: &'static str,
    pub serial_number: &'static str,
    pub firmware: &'static str,
    pub signal_strength: u8,
    pub status: DeviceStatus,
}

pub fn device_info(now: DateTime<Utc>) -> DeviceInfo {
    DeviceInfo {
        name: "BP Monitor Pro",
        model: "BPM-2024",
        serial_number: "SN-123456789",
        firmware: "v2.1.3",
        signal_strength: 85,
        status: own_device(now),
    }
}

// ── Clinic ───────────────────────────────────────────────────

pub fn clinic_patients(now: DateTime<Utc>) -> Vec<Patient> {
    let patient = |id: &str, name: &str, email: &str, dob: &str, bp: BpReading, alerts: u32, dev: DeviceStatus| Patient {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        dob: dob.to_string(),
        latest_bp: Some(bp),
        alerts,
        device_status: dev,
    };
    vec![
        patient(
            "1",
            "John Doe",
            "john.doe@email.com",
            "15031985",
            reading("1", now, (128, 82), 72, BpStatus::Elevated),
            2,
            device(78, now, SensorStatus::Active, true),
        ),
        patient(
            "2",
            "Jane Smith",
            "jane.smith@email.com",
            "22071990",
            reading("2", now, (118, 76), 68, BpStatus::Normal),
            0,
            device(92, now, SensorStatus::Active, true),
        ),
        patient(
            "3",
            "Robert Johnson",
            "robert.j@email.com",
            "08121978",
            reading("3", now, (145, 95), 85, BpStatus::High),
            3,
            device(45, now - Duration::hours(2), SensorStatus::Inactive, false),
        ),
        patient(
            "4",
            "Emily Wilson",
            "emily.w@email.com",
            "30091995",
            reading("4", now, (165, 105), 92, BpStatus::Critical),
            5,
            device(65, now, SensorStatus::Active, true),
        ),
    ]
}

pub fn clinic_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            "1",
            AlertSeverity::Critical,
            "Emily Wilson has critically high BP readings - immediate attention required.",
            now - Duration::minutes(30),
            false,
        ),
        alert(
            "2",
            AlertSeverity::Warning,
            "Robert Johnson's device hasn't synced in 2 hours.",
            now - Duration::hours(1),
            false,
        ),
        alert(
            "3",
            AlertSeverity::Warning,
            "John Doe has shown elevated readings for 3 consecutive days.",
            now - Duration::hours(2),
            false,
        ),
    ]
}

/// Alert history on the patient details page.
pub fn patient_alert_history(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            "1",
            AlertSeverity::Warning,
            "Blood pressure elevated for 3 consecutive readings.",
            now - Duration::hours(2),
            false,
        ),
        alert(
            "2",
            AlertSeverity::Info,
            "Device battery below 30% - charging recommended.",
            now - Duration::days(1),
            true,
        ),
    ]
}

pub fn patient_trend() -> Vec<TrendPoint> {
    [
        ("Dec 1", 122, 78),
        ("Dec 3", 128, 82),
        ("Dec 5", 135, 88),
        ("Dec 7", 130, 84),
        ("Dec 9", 125, 80),
        ("Dec 11", 128, 82),
        ("Dec 12", 126, 81),
    ]
    .into_iter()
    .map(|(day, sys, dia)| TrendPoint::new(day, sys, dia))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::PatientStats;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn history_trend_is_oldest_first() {
        let trend = trend_from_history(&reading_history());
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0], TrendPoint::new("Dec 6", 142, 92));
        assert_eq!(trend[6], TrendPoint::new("Dec 12", 128, 82));
    }

    #[test]
    fn roster_stats_match_fixture() {
        let stats = PatientStats::from_patients(&clinic_patients(now()));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.elevated, 2);
        assert_eq!(stats.normal, 1);
    }

    #[test]
    fn alert_feed_starts_with_three_unread() {
        let feed = alert_feed(now());
        assert_eq!(feed.iter().filter(|a| !a.is_read).count(), 3);
    }

    #[test]
    fn previous_reading_is_a_day_older() {
        let (latest, previous) = current_readings(now());
        assert_eq!(latest.timestamp - previous.timestamp, Duration::days(1));
        assert_eq!(latest.delta_from(&previous), (-7, -6));
    }
}
