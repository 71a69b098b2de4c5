//! # Domain Module
//!
//! Contains all business logic for the medicine reminder daemon.
//!
//! This module encapsulates the core entities and services that define how
//! reminders are modeled, stored, and matched against the clock. It operates
//! independently of any specific storage mechanism or alert channel.
//!
//! ## Module Organization
//!
//! - **models**: Profile, reminder, and due-alert entities
//! - **commands**: Internal command/result types consumed by the services
//! - **calendar**: Local-clock helpers (minute strings, weekday indices)
//! - **profile_service**: Profile CRUD with fail-soft loading
//! - **reminder_service**: Reminder CRUD, validation, and list ordering
//! - **detector**: The due-reminder detection engine
//!
//! ## Business Rules
//!
//! - Reminders must have a non-empty medicine name and at least one
//!   well-formed `HH:MM` time
//! - A weekly reminder always carries its weekday (0 = Sunday .. 6 = Saturday)
//! - A reminder/time pair is due when its time equals the current minute,
//!   its schedule matches today, and no alert was already recorded today

pub mod calendar;
pub mod commands;
pub mod detector;
pub mod models;
pub mod profile_service;
pub mod reminder_service;

pub use detector::DueReminderDetector;
pub use profile_service::ProfileService;
pub use reminder_service::ReminderService;
