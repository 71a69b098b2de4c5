//! # Storage Module
//!
//! Handles all data persistence for the reminder daemon.
//!
//! This module abstracts away the specific storage implementation and
//! provides a consistent interface for persisting and retrieving data.
//! The implementation can be swapped out (flat files, a database, an
//! in-memory fake for tests) without affecting the domain logic.
//!
//! ## Current Implementation
//!
//! - **Profiles**: one YAML document holding the whole collection
//! - **Notification log**: one CSV file, one row per (reminder, time) key
//! - **Atomicity**: every write lands in a temp file and is renamed into
//!   place, so durable state is never left partially written
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: clean separation between domain and data access
//! - **Dependency Inversion**: the detector and dispatcher depend on the
//!   storage traits, not on the file-backed repositories

pub mod traits;
pub mod yaml;

pub use traits::{NotificationLogStorage, ProfileStorage};
pub use yaml::{NotificationLogRepository, ProfileRepository, YamlConnection};
