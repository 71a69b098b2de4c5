use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reminder::Reminder;

/// Domain model representing a person who owns reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// ID of the profile created automatically on first use.
    pub const DEFAULT_ID: &'static str = "profile::default";

    /// Name of the profile created automatically on first use.
    pub const DEFAULT_NAME: &'static str = "Me";

    /// Generate a unique profile ID. Uniqueness is a soft guarantee from
    /// the timestamp plus a random suffix, not a cryptographic one.
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("profile::{}::{}", epoch_millis, Uuid::new_v4().simple())
    }

    /// The empty default profile used when no durable state exists.
    pub fn default_profile() -> Self {
        let now = Utc::now();
        Self {
            id: Self::DEFAULT_ID.to_string(),
            name: Self::DEFAULT_NAME.to_string(),
            reminders: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
