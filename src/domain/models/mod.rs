//! Domain model types for profiles, reminders, and due alerts.

pub mod alert;
pub mod profile;
pub mod reminder;

pub use alert::DueAlert;
pub use profile::Profile;
pub use reminder::{Reminder, ReminderValidationError, Schedule};
