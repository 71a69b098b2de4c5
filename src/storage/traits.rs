//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::Profile;

/// Trait defining the interface for profile collection storage.
///
/// The whole collection is read and rewritten as one snapshot: every
/// mutation derives a new collection and persists it in full, so a load
/// always observes a consistent state.
pub trait ProfileStorage: Send + Sync {
    /// Load the full profile collection.
    ///
    /// Missing or unreadable durable state surfaces as an `Err` here; the
    /// service layer is responsible for the fail-soft fallback to a
    /// default profile.
    fn load_profiles(&self) -> Result<Vec<Profile>>;

    /// Persist the full profile collection as a new snapshot.
    fn save_profiles(&self, profiles: &[Profile]) -> Result<()>;
}

/// Trait defining the interface for the notification log, the idempotence
/// ledger that prevents duplicate alerts for the same reminder/time/day.
///
/// Entries are keyed by `(reminder_id, time_of_day)` and hold the last
/// local calendar date (`YYYY-MM-DD`) on which that pairing was alerted.
/// Entries are never deleted, only superseded by later dates; entries for
/// reminders that no longer exist are harmless.
pub trait NotificationLogStorage: Send + Sync {
    /// The last date an alert was delivered for this key, if any.
    fn last_notified(&self, reminder_id: &str, time_of_day: &str) -> Result<Option<String>>;

    /// Record that an alert for this key was delivered on `date`.
    ///
    /// Writing the same date twice has no additional effect, and a stored
    /// date is never rewound to an earlier one.
    fn record_notified(&self, reminder_id: &str, time_of_day: &str, date: &str) -> Result<()>;

    /// Record a whole dispatch worth of deliveries for one date.
    ///
    /// Equivalent to calling `record_notified` per key; implementations
    /// backed by a single file can override this to rewrite it once.
    fn record_notified_batch(&self, keys: &[(String, String)], date: &str) -> Result<()> {
        for (reminder_id, time_of_day) in keys {
            self.record_notified(reminder_id, time_of_day, date)?;
        }
        Ok(())
    }

    /// Whether an alert for this key was already delivered on `date`.
    fn was_notified(&self, reminder_id: &str, time_of_day: &str, date: &str) -> Result<bool> {
        Ok(self.last_notified(reminder_id, time_of_day)?.as_deref() == Some(date))
    }
}
