//! # File-Backed Storage
//!
//! File-based storage implementation for the reminder daemon.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── profiles.yaml           ← full profile/reminder collection
//! └── notification_log.csv    ← one row per (reminder, time) alert key
//! ```
//!
//! ## Features
//!
//! - Whole-collection YAML snapshot for profiles and their reminders
//! - CSV ledger for last-notified dates, rewritten atomically per update
//! - Atomic file writes with temp files

pub mod connection;
pub mod notification_log_repository;
pub mod profile_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::YamlConnection;
pub use notification_log_repository::NotificationLogRepository;
pub use profile_repository::ProfileRepository;
