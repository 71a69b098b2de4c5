//! Domain model for a recurring medication reminder.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurrence schedule for a reminder.
///
/// `Weekly` carries its weekday inline, so a weekly reminder without a day
/// (or a daily reminder with one) cannot be constructed. Serialized as a
/// `frequency` tag with `day_of_week` alongside it for weekly schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Schedule {
    Daily,
    Weekly {
        /// 0 = Sunday, 1 = Monday, ..., 6 = Saturday
        day_of_week: u8,
    },
}

impl Schedule {
    /// Whether this schedule fires on the given weekday (0 = Sunday).
    pub fn matches_weekday(&self, weekday: u8) -> bool {
        match self {
            Schedule::Daily => true,
            Schedule::Weekly { day_of_week } => *day_of_week == weekday,
        }
    }

    /// Validate a day-of-week value.
    pub fn is_valid_day_of_week(day: u8) -> bool {
        day <= 6
    }

    /// Human-readable recurrence, e.g. "daily" or "weekly on Wednesday".
    pub fn description(&self) -> String {
        match self {
            Schedule::Daily => "daily".to_string(),
            Schedule::Weekly { day_of_week } => {
                format!("weekly on {}", Self::day_name(*day_of_week))
            }
        }
    }

    /// Get the day name for a day-of-week index.
    pub fn day_name(day: u8) -> &'static str {
        match day {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Invalid",
        }
    }
}

/// A recurring medication reminder owned by a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub medicine_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Times of day as zero-padded "HH:MM" strings. Duplicates are
    /// permitted but logically redundant.
    pub times: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReminderValidationError {
    #[error("Medicine name cannot be empty")]
    EmptyMedicineName,
    #[error("At least one reminder time is required")]
    NoTimes,
    #[error("'{0}' is not a valid HH:MM time")]
    MalformedTime(String),
    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidDayOfWeek,
}

impl Reminder {
    /// Generate a unique reminder ID. Uniqueness is a soft guarantee from
    /// the timestamp plus a random suffix.
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("reminder::{}::{}", epoch_millis, Uuid::new_v4().simple())
    }

    /// Validate the user-supplied fields of a reminder before it reaches
    /// storage. Rejection here means no partial save occurs.
    pub fn validate_fields(
        medicine_name: &str,
        times: &[String],
        schedule: &Schedule,
    ) -> Result<(), ReminderValidationError> {
        if medicine_name.trim().is_empty() {
            return Err(ReminderValidationError::EmptyMedicineName);
        }
        if times.is_empty() {
            return Err(ReminderValidationError::NoTimes);
        }
        for time in times {
            if !is_valid_time_string(time) {
                return Err(ReminderValidationError::MalformedTime(time.clone()));
            }
        }
        if let Schedule::Weekly { day_of_week } = schedule {
            if !Schedule::is_valid_day_of_week(*day_of_week) {
                return Err(ReminderValidationError::InvalidDayOfWeek);
            }
        }
        Ok(())
    }

    /// Earliest time of day this reminder fires, for list ordering.
    /// Reminders without a time sort last.
    pub fn earliest_time(&self) -> Option<&str> {
        self.times.iter().map(String::as_str).min()
    }
}

/// Check that a time string is a zero-padded 24-hour "HH:MM" value.
pub fn is_valid_time_string(time: &str) -> bool {
    time.len() == 5 && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}
