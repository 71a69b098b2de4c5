//! # Due-Reminder Detector
//!
//! The core temporal engine: given the current instant and the live
//! profile collection, it computes which (profile, reminder, time) triples
//! are due right now and have not already been alerted today.
//!
//! ## Matching Rules
//!
//! - A candidate matches by exact minute-string equality, not interval
//!   containment. The calling loop must therefore tick strictly faster
//!   than once per minute so at least one invocation lands on every
//!   scheduled minute.
//! - Weekly reminders additionally require today's weekday to equal the
//!   reminder's configured day.
//! - A candidate survives only if the notification log holds no entry
//!   dated today for its `(reminder_id, time_of_day)` key. An absent
//!   entry counts as not-yet-notified.
//!
//! Minutes that pass while the process is not running are never
//! backfilled.

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::domain::calendar;
use crate::domain::models::{DueAlert, Profile};
use crate::storage::traits::NotificationLogStorage;

/// Detects reminders that are due at a given instant.
#[derive(Clone)]
pub struct DueReminderDetector;

impl DueReminderDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Find every reminder/time pair due at `now`, deduplicated against
    /// the notification log. Results come back in iteration order
    /// (profiles, then reminders, then times); grouping for display is a
    /// presentation concern.
    pub fn find_due(
        &self,
        now: DateTime<Local>,
        profiles: &[Profile],
        log: &dyn NotificationLogStorage,
    ) -> Vec<DueAlert> {
        let current_minute = calendar::minute_string(now);
        let current_weekday = calendar::weekday_index(now);
        let today = calendar::date_string(now);

        let mut due = Vec::new();

        for profile in profiles {
            for reminder in &profile.reminders {
                if !reminder.schedule.matches_weekday(current_weekday) {
                    continue;
                }

                for time_of_day in &reminder.times {
                    if *time_of_day != current_minute {
                        continue;
                    }

                    // Duplicate times within one reminder are permitted;
                    // the log key collapses them to a single alert.
                    if due.iter().any(|a: &DueAlert| {
                        a.reminder_id == reminder.id && a.time_of_day == *time_of_day
                    }) {
                        continue;
                    }

                    let already_notified =
                        match log.was_notified(&reminder.id, time_of_day, &today) {
                            Ok(notified) => notified,
                            Err(e) => {
                                // An unreadable ledger entry is treated as
                                // absent; missing a record risks one extra
                                // alert, which beats silently dropping one.
                                warn!(
                                    "Notification log lookup failed for ({}, {}): {:#}",
                                    reminder.id, time_of_day, e
                                );
                                false
                            }
                        };

                    if already_notified {
                        debug!(
                            "Skipping ({}, {}), already notified on {}",
                            reminder.id, time_of_day, today
                        );
                        continue;
                    }

                    due.push(DueAlert {
                        profile_name: profile.name.clone(),
                        medicine_name: reminder.medicine_name.clone(),
                        dosage: reminder.dosage.clone(),
                        reminder_id: reminder.id.clone(),
                        time_of_day: time_of_day.clone(),
                    });
                }
            }
        }

        if !due.is_empty() {
            debug!("{} reminder(s) due at {}", due.len(), current_minute);
        }
        due
    }
}

impl Default for DueReminderDetector {
    fn default() -> Self {
        Self::new()
    }
}
