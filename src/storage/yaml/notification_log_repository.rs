//! # Notification Log Repository
//!
//! File-based implementation of the notification log, the ledger that
//! records the last date each (reminder, time) pairing was alerted.
//!
//! ## CSV Format
//!
//! ```csv
//! reminder_id,time_of_day,last_notified_date
//! reminder::1700000000000::4f2a,09:00,2024-01-03
//! reminder::1700000000000::4f2a,21:00,2024-01-02
//! ```
//!
//! ## Features
//!
//! - One row per `(reminder_id, time_of_day)` key
//! - Unconditional overwrite per key; rewriting the same date is a no-op
//! - Stored dates only move forward in time, never backwards
//! - Atomic file rewrites with temp files
//! - Rows for deleted reminders are kept and simply never matched again

use anyhow::Result;
use csv::{Reader, Writer};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use super::connection::YamlConnection;
use crate::storage::traits::NotificationLogStorage;

/// CSV record structure for one notification log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NotificationLogRecord {
    reminder_id: String,
    time_of_day: String,
    last_notified_date: String,
}

/// CSV-backed notification log repository.
#[derive(Clone)]
pub struct NotificationLogRepository {
    connection: Arc<YamlConnection>,
}

impl NotificationLogRepository {
    /// Create a new notification log repository.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self { connection }
    }

    /// Read every entry from the CSV file. A missing file is an empty
    /// log; malformed rows are skipped with a warning so one bad line
    /// never takes the whole ledger down.
    fn load_entries(&self) -> Result<Vec<NotificationLogRecord>> {
        let path = self.connection.notification_log_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut entries = Vec::new();
        for result in csv_reader.deserialize::<NotificationLogRecord>() {
            match result {
                Ok(record) => entries.push(record),
                Err(e) => {
                    warn!("Skipping malformed notification log row: {}", e);
                }
            }
        }

        Ok(entries)
    }

    /// Read the ledger, tolerating corruption: recording must never be
    /// blocked by an unreadable file, so that case starts a fresh ledger.
    fn load_entries_or_fresh(&self) -> Vec<NotificationLogRecord> {
        match self.load_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Notification log unreadable, starting a fresh ledger: {}", e);
                Vec::new()
            }
        }
    }

    /// Update or insert the entry for one key, keeping stored dates
    /// monotone: ISO dates compare correctly as strings, and an existing
    /// equal-or-later date wins.
    fn upsert_entry(
        entries: &mut Vec<NotificationLogRecord>,
        reminder_id: &str,
        time_of_day: &str,
        date: &str,
    ) {
        match entries
            .iter_mut()
            .find(|e| e.reminder_id == reminder_id && e.time_of_day == time_of_day)
        {
            Some(existing) => {
                if existing.last_notified_date.as_str() >= date {
                    debug!(
                        "Notification log already holds {} for ({}, {}), not rewinding to {}",
                        existing.last_notified_date, reminder_id, time_of_day, date
                    );
                    return;
                }
                existing.last_notified_date = date.to_string();
            }
            None => entries.push(NotificationLogRecord {
                reminder_id: reminder_id.to_string(),
                time_of_day: time_of_day.to_string(),
                last_notified_date: date.to_string(),
            }),
        }
    }

    /// Rewrite the whole CSV file atomically.
    fn write_entries(&self, entries: &[NotificationLogRecord]) -> Result<()> {
        let path = self.connection.notification_log_path();
        let temp_path = path.with_extension("tmp");

        {
            let file = File::create(&temp_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));
            for entry in entries {
                csv_writer.serialize(entry)?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

impl NotificationLogStorage for NotificationLogRepository {
    fn last_notified(&self, reminder_id: &str, time_of_day: &str) -> Result<Option<String>> {
        let entries = self.load_entries()?;
        Ok(entries
            .into_iter()
            .find(|e| e.reminder_id == reminder_id && e.time_of_day == time_of_day)
            .map(|e| e.last_notified_date))
    }

    fn record_notified(&self, reminder_id: &str, time_of_day: &str, date: &str) -> Result<()> {
        let mut entries = self.load_entries_or_fresh();
        Self::upsert_entry(&mut entries, reminder_id, time_of_day, date);

        self.write_entries(&entries)?;
        debug!(
            "Recorded notification for ({}, {}) on {}",
            reminder_id, time_of_day, date
        );
        Ok(())
    }

    /// One read and one atomic rewrite for a whole dispatch, instead of a
    /// full file round trip per key.
    fn record_notified_batch(&self, keys: &[(String, String)], date: &str) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut entries = self.load_entries_or_fresh();
        for (reminder_id, time_of_day) in keys {
            Self::upsert_entry(&mut entries, reminder_id, time_of_day, date);
        }

        self.write_entries(&entries)?;
        debug!("Recorded {} notification(s) on {}", keys.len(), date);
        Ok(())
    }
}
