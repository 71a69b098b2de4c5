//! # Notify Module
//!
//! The alert side of the daemon: the permission/presentation port and the
//! dispatcher that turns due reminders into a single user-visible alert.
//!
//! The presentation port is deliberately tiny so the detection and
//! dispatch logic can be tested against fakes, and so the terminal
//! presenter can later be swapped for a desktop notification backend
//! without touching the core.

pub mod dispatcher;
pub mod presenter;

pub use dispatcher::AlertDispatcher;
pub use presenter::{AlertPermission, AlertPresenter, TerminalPresenter};
