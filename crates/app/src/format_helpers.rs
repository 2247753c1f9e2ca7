/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, Utc};

/// Format a raw `ddmmyyyy` date of birth as `dd/mm/yyyy`.
///
/// Input that is not exactly eight ASCII digits is returned unchanged.
pub fn format_dob(raw: &str) -> String {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    format!("{}/{}/{}", &raw[..2], &raw[2..4], &raw[4..])
}

/// `"1 unread alert"`, `"3 unread alerts"`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Short axis label for a reading, e.g. `"Dec 12"`.
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// `"Sync: 1h ago"`-style age of a device sync, coarse to the hour.
pub fn sync_age(last_sync: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(*last_sync).num_minutes().max(0);
    match minutes {
        0 => "just now".to_string(),
        1..=59 => format!("{minutes}m ago"),
        _ => format!("{}h ago", minutes / 60),
    }
}
