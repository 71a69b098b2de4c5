use anyhow::Result;
use log::info;

/// Whether the user has allowed alerts to be shown.
///
/// Mirrors the three-state permission model of desktop notification
/// capabilities: not yet asked, granted, or refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPermission {
    Granted,
    Denied,
    Default,
}

/// Port for the platform alert capability.
///
/// The scheduler only presents alerts while `current_permission()` is
/// `Granted`; everything else is skipped upstream of dispatch.
pub trait AlertPresenter: Send + Sync {
    /// The current permission state.
    fn current_permission(&self) -> AlertPermission;

    /// Ask the user for permission and return the resulting state.
    fn request_permission(&self) -> Result<AlertPermission>;

    /// Show one alert with a title and a multi-line body.
    fn present(&self, title: &str, body: &str) -> Result<()>;
}

/// Presenter that writes alerts to the daemon's terminal.
///
/// Running the daemon in a terminal is taken as consent, so permission is
/// always granted.
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPresenter for TerminalPresenter {
    fn current_permission(&self) -> AlertPermission {
        AlertPermission::Granted
    }

    fn request_permission(&self) -> Result<AlertPermission> {
        Ok(AlertPermission::Granted)
    }

    fn present(&self, title: &str, body: &str) -> Result<()> {
        info!("Presenting alert: {}", title);
        println!("\x07=== {} ===", title);
        for line in body.lines() {
            println!("  {}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    //! Fakes for exercising dispatch and scheduling without a terminal.

    use super::*;
    use std::sync::Mutex;

    /// Presenter that records every presented alert and whose permission
    /// can be flipped mid-test.
    pub struct RecordingPresenter {
        pub permission: Mutex<AlertPermission>,
        pub presented: Mutex<Vec<(String, String)>>,
        pub fail_present: Mutex<bool>,
    }

    impl RecordingPresenter {
        pub fn granted() -> Self {
            Self::with_permission(AlertPermission::Granted)
        }

        pub fn with_permission(permission: AlertPermission) -> Self {
            Self {
                permission: Mutex::new(permission),
                presented: Mutex::new(Vec::new()),
                fail_present: Mutex::new(false),
            }
        }

        pub fn presented(&self) -> Vec<(String, String)> {
            self.presented.lock().unwrap().clone()
        }

        pub fn set_permission(&self, permission: AlertPermission) {
            *self.permission.lock().unwrap() = permission;
        }

        pub fn set_fail_present(&self, fail: bool) {
            *self.fail_present.lock().unwrap() = fail;
        }
    }

    impl AlertPresenter for RecordingPresenter {
        fn current_permission(&self) -> AlertPermission {
            *self.permission.lock().unwrap()
        }

        fn request_permission(&self) -> Result<AlertPermission> {
            Ok(self.current_permission())
        }

        fn present(&self, title: &str, body: &str) -> Result<()> {
            if *self.fail_present.lock().unwrap() {
                return Err(anyhow::anyhow!("presentation channel unavailable"));
            }
            self.presented
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
            Ok(())
        }
    }
}
