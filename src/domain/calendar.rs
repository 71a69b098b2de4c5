//! Local-clock helpers shared by the detector, dispatcher, and scheduler.
//!
//! All matching is done against the host's local clock: reminders are
//! minute-precision wall-clock schedules, so every derived value here is
//! a local-time projection of one `DateTime<Local>` instant.

use chrono::{DateTime, Datelike, Local, Timelike};

/// The current minute as a zero-padded "HH:MM" string.
pub fn minute_string(now: DateTime<Local>) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// The current local calendar date as an ISO "YYYY-MM-DD" string.
pub fn date_string(now: DateTime<Local>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// The current local weekday as an index, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(now: DateTime<Local>) -> u8 {
    now.weekday().num_days_from_sunday() as u8
}
