//! # Alert Dispatcher
//!
//! Composes one user notification out of every reminder due this minute
//! and records each delivery into the notification log.
//!
//! ## Composition Rules
//!
//! - Title: `"N medications due"` when more than one alert is due, else
//!   `"Reminder for {profile}"` using the sole alert's profile name
//! - Body: one line per alert, `"{profile}: {medicine} ({dosage})"` with
//!   the dosage segment omitted when absent, joined in received order

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::models::DueAlert;
use crate::notify::presenter::AlertPresenter;
use crate::storage::traits::NotificationLogStorage;

/// Dispatches due alerts through the presenter and records them in the
/// notification log.
pub struct AlertDispatcher {
    presenter: Arc<dyn AlertPresenter>,
    notification_log: Arc<dyn NotificationLogStorage>,
}

impl AlertDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        presenter: Arc<dyn AlertPresenter>,
        notification_log: Arc<dyn NotificationLogStorage>,
    ) -> Self {
        Self {
            presenter,
            notification_log,
        }
    }

    /// Present the given alerts as one combined notification and record
    /// each of them as delivered on `today` (`YYYY-MM-DD`).
    ///
    /// An empty slice is a no-op. Returns the number of alerts delivered.
    pub fn dispatch(&self, alerts: &[DueAlert], today: &str) -> Result<usize> {
        if alerts.is_empty() {
            return Ok(0);
        }

        let title = if alerts.len() > 1 {
            format!("{} medications due", alerts.len())
        } else {
            format!("Reminder for {}", alerts[0].profile_name)
        };

        let body = alerts
            .iter()
            .map(DueAlert::body_line)
            .collect::<Vec<_>>()
            .join("\n");

        self.presenter.present(&title, &body)?;

        // Ledger writes are best-effort: a failed write risks one repeat
        // alert tomorrow at worst, and must not undo the delivery above.
        let keys: Vec<(String, String)> = alerts
            .iter()
            .map(|a| (a.reminder_id.clone(), a.time_of_day.clone()))
            .collect();
        if let Err(e) = self.notification_log.record_notified_batch(&keys, today) {
            warn!("Failed to record {} notification(s): {:#}", keys.len(), e);
        }

        info!("Dispatched {} alert(s): {}", alerts.len(), title);
        Ok(alerts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::presenter::test_support::RecordingPresenter;
    use crate::storage::yaml::test_utils::TestHelper;
    use crate::storage::NotificationLogStorage;

    fn alert(profile: &str, medicine: &str, dosage: Option<&str>, id: &str, time: &str) -> DueAlert {
        DueAlert {
            profile_name: profile.to_string(),
            medicine_name: medicine.to_string(),
            dosage: dosage.map(|d| d.to_string()),
            reminder_id: id.to_string(),
            time_of_day: time.to_string(),
        }
    }

    fn setup() -> (AlertDispatcher, Arc<RecordingPresenter>, TestHelper) {
        let helper = TestHelper::new().unwrap();
        let presenter = Arc::new(RecordingPresenter::granted());
        let dispatcher = AlertDispatcher::new(
            presenter.clone(),
            Arc::new(helper.notification_log_repo.clone()),
        );
        (dispatcher, presenter, helper)
    }

    #[test]
    fn test_empty_dispatch_is_a_noop() {
        let (dispatcher, presenter, _helper) = setup();
        assert_eq!(dispatcher.dispatch(&[], "2024-01-03").unwrap(), 0);
        assert!(presenter.presented().is_empty());
    }

    #[test]
    fn test_single_alert_title_names_the_profile() {
        let (dispatcher, presenter, _helper) = setup();
        let alerts = vec![alert("Grandma", "Metformin", Some("500mg"), "r1", "09:00")];

        dispatcher.dispatch(&alerts, "2024-01-03").unwrap();

        let presented = presenter.presented();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, "Reminder for Grandma");
        assert_eq!(presented[0].1, "Grandma: Metformin (500mg)");
    }

    #[test]
    fn test_two_alerts_produce_one_combined_notification() {
        let (dispatcher, presenter, _helper) = setup();
        let alerts = vec![
            alert("Grandma", "Metformin", Some("500mg"), "r1", "09:00"),
            alert("Grandma", "Aspirin", None, "r2", "09:00"),
        ];

        let count = dispatcher.dispatch(&alerts, "2024-01-03").unwrap();
        assert_eq!(count, 2);

        let presented = presenter.presented();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, "2 medications due");
        assert_eq!(
            presented[0].1,
            "Grandma: Metformin (500mg)\nGrandma: Aspirin"
        );
    }

    #[test]
    fn test_dispatch_records_every_alert_in_the_log() {
        let (dispatcher, _presenter, helper) = setup();
        let alerts = vec![
            alert("Me", "Metformin", None, "r1", "09:00"),
            alert("Me", "Aspirin", None, "r2", "09:00"),
        ];

        dispatcher.dispatch(&alerts, "2024-01-03").unwrap();

        assert!(helper
            .notification_log_repo
            .was_notified("r1", "09:00", "2024-01-03")
            .unwrap());
        assert!(helper
            .notification_log_repo
            .was_notified("r2", "09:00", "2024-01-03")
            .unwrap());
    }

    #[test]
    fn test_failed_presentation_leaves_log_untouched() {
        let helper = TestHelper::new().unwrap();
        let presenter = RecordingPresenter::granted();
        presenter.set_fail_present(true);
        let dispatcher = AlertDispatcher::new(
            Arc::new(presenter),
            Arc::new(helper.notification_log_repo.clone()),
        );

        let alerts = vec![alert("Me", "Aspirin", None, "r1", "09:00")];
        assert!(dispatcher.dispatch(&alerts, "2024-01-03").is_err());

        // Nothing was recorded, so the alert can still fire.
        assert!(!helper
            .notification_log_repo
            .was_notified("r1", "09:00", "2024-01-03")
            .unwrap());
    }
}
