use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blood-pressure category attached to a reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BpStatus {
    Normal,
    Elevated,
    High,
    Critical,
}

impl BpStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BpStatus::Normal => "Normal",
            BpStatus::Elevated => "Elevated",
            BpStatus::High => "High",
            BpStatus::Critical => "Critical",
        }
    }

    /// CSS modifier used by cards and table rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            BpStatus::Normal => "normal",
            BpStatus::Elevated => "elevated",
            BpStatus::High => "high",
            BpStatus::Critical => "critical",
        }
    }
}

/// A single cuff/PPG measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BpReading {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub systolic: u16,
    pub diastolic: u16,
    pub heart_rate: u16,
    pub status: BpStatus,
}

impl BpReading {
    /// `(systolic, diastolic)` change relative to an earlier reading.
    pub fn delta_from(&self, previous: &BpReading) -> (i32, i32) {
        (
            i32::from(self.systolic) - i32::from(previous.systolic),
            i32::from(self.diastolic) - i32::from(previous.diastolic),
        )
    }
}

/// Heart-rate band shown on the heart-rate card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeartRateStatus {
    #[default]
    Normal,
    Elevated,
    Low,
}

impl HeartRateStatus {
    /// Resting band: below 60 is low, above 100 elevated.
    pub fn from_bpm(bpm: u16) -> Self {
        match bpm {
            0..=59 => HeartRateStatus::Low,
            60..=100 => HeartRateStatus::Normal,
            _ => HeartRateStatus::Elevated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeartRateStatus::Normal => "normal",
            HeartRateStatus::Elevated => "elevated",
            HeartRateStatus::Low => "low",
        }
    }
}

/// State of one sensor on the wearable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    Inactive,
    Error,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Active => "active",
            SensorStatus::Inactive => "inactive",
            SensorStatus::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Active => "Active",
            SensorStatus::Inactive => "Inactive",
            SensorStatus::Error => "Error",
        }
    }
}

/// Battery band used for color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Good,
    Low,
    Critical,
}

impl BatteryLevel {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            51.. => BatteryLevel::Good,
            21..=50 => BatteryLevel::Low,
            _ => BatteryLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryLevel::Good => "good",
            BatteryLevel::Low => "low",
            BatteryLevel::Critical => "critical",
        }
    }
}

/// Last known status of a patient's monitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceStatus {
    pub battery: u8,
    pub last_sync: DateTime<Utc>,
    pub ppg_status: SensorStatus,
    pub imu_status: SensorStatus,
    pub is_connected: bool,
}

impl DeviceStatus {
    pub fn battery_level(&self) -> BatteryLevel {
        BatteryLevel::from_percent(self.battery)
    }
}

/// Severity of a health or device alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Critical",
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

/// Per-severity alert counts for the alerts page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub unread: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut acc, a| {
            if !a.is_read {
                acc.unread += 1;
            }
            match a.severity {
                AlertSeverity::Critical => acc.critical += 1,
                AlertSeverity::Warning => acc.warning += 1,
                AlertSeverity::Info => acc.info += 1,
            }
            acc
        })
    }
}

/// A patient on the clinic roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw `ddmmyyyy`.
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_bp: Option<BpReading>,
    #[serde(default)]
    pub alerts: u32,
    pub device_status: DeviceStatus,
}

impl Patient {
    /// Up to two uppercase initials for the profile avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// Case-insensitive match on name or email. An empty query matches all.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || self.name.to_lowercase().contains(&q) || self.email.to_lowercase().contains(&q)
    }
}

/// Roster statistics for the clinic dashboard header.
///
/// `elevated` counts both elevated and high readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatientStats {
    pub total: usize,
    pub critical: usize,
    pub elevated: usize,
    pub normal: usize,
}

impl PatientStats {
    pub fn from_patients(patients: &[Patient]) -> Self {
        let mut stats = Self {
            total: patients.len(),
            ..Default::default()
        };
        for status in patients.iter().filter_map(|p| p.latest_bp.as_ref().map(|r| r.status)) {
            match status {
                BpStatus::Critical => stats.critical += 1,
                BpStatus::Elevated | BpStatus::High => stats.elevated += 1,
                BpStatus::Normal => stats.normal += 1,
            }
        }
        stats
    }
}

/// One point on the weekly trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub systolic: u16,
    pub diastolic: u16,
}

impl TrendPoint {
    pub fn new(label: impl Into<String>, systolic: u16, diastolic: u16) -> Self {
        Self {
            label: label.into(),
            systolic,
            diastolic,
        }
    }
}
