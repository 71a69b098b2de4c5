//! # Pill-Pal
//!
//! A medicine reminder daemon. Each person ("profile") owns a set of
//! recurring medication reminders (daily, or weekly on a fixed weekday)
//! with one or more times of day. A 10-second detection loop checks the
//! wall clock against every reminder and fires a single alert the first
//! time each scheduled instant is reached on the day it occurs.
//!
//! ## Module Organization
//!
//! - **domain**: Profile/reminder models, mutation services, and the
//!   due-reminder detector
//! - **storage**: Durable YAML/CSV repositories behind storage traits
//! - **notify**: Alert permission, presentation port, and the dispatcher
//!   that composes and records alerts
//! - **scheduler**: The periodic detection cycle tying everything together
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: Domain logic works against storage traits;
//!   repositories can be swapped without touching the detector
//! - **Fail Soft**: Corrupt or missing durable state degrades to an empty
//!   default profile, never to a crash
//! - **Idempotent Alerts**: A notification log keyed by (reminder, time)
//!   guarantees at most one alert per scheduled instant per day, across
//!   process restarts

pub mod domain;
pub mod notify;
pub mod scheduler;
pub mod storage;
