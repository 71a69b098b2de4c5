//! # Reminder Scheduler
//!
//! The periodic tick that drives detection and dispatch.
//!
//! A 10-second cadence guarantees at least one cycle lands inside every
//! wall-clock minute, which is what the detector's minute-equality
//! matching requires. Each cycle runs fully synchronously; the cadence is
//! far larger than the per-cycle work, so cycles never overlap and no
//! locking is needed.
//!
//! Two idempotence guards stack here:
//! - `last_checked_minute` skips redundant recomputation while the clock
//!   is still inside an already-processed minute (within one run)
//! - the notification log suppresses repeat alerts for the same
//!   reminder/time/day across restarts

use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{calendar, DueReminderDetector, ProfileService};
use crate::notify::{AlertDispatcher, AlertPermission, AlertPresenter};
use crate::storage::traits::NotificationLogStorage;

/// How often the detection cycle runs. Must stay strictly under one
/// minute so no scheduled minute is skipped.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Owns the detection loop: store, detector, log, and dispatcher are all
/// passed in explicitly at construction.
pub struct ReminderScheduler {
    profile_service: ProfileService,
    detector: DueReminderDetector,
    dispatcher: AlertDispatcher,
    presenter: Arc<dyn AlertPresenter>,
    notification_log: Arc<dyn NotificationLogStorage>,
    last_checked_minute: Option<String>,
}

impl ReminderScheduler {
    /// Create a new scheduler.
    pub fn new(
        profile_service: ProfileService,
        presenter: Arc<dyn AlertPresenter>,
        notification_log: Arc<dyn NotificationLogStorage>,
    ) -> Self {
        let dispatcher = AlertDispatcher::new(presenter.clone(), notification_log.clone());
        Self {
            profile_service,
            detector: DueReminderDetector::new(),
            dispatcher,
            presenter,
            notification_log,
            last_checked_minute: None,
        }
    }

    /// Run one detection cycle against the given instant. Returns the
    /// number of alerts dispatched.
    ///
    /// Skips entirely while alert permission is not granted, and skips
    /// recomputation while the clock is still inside the last minute this
    /// scheduler already processed.
    pub fn check_cycle(&mut self, now: DateTime<Local>) -> Result<usize> {
        if self.presenter.current_permission() != AlertPermission::Granted {
            debug!("Alert permission not granted, skipping detection cycle");
            return Ok(0);
        }

        let current_minute = calendar::minute_string(now);
        if self.last_checked_minute.as_deref() == Some(current_minute.as_str()) {
            return Ok(0);
        }

        let profiles = self.profile_service.load_or_default();
        let due = self
            .detector
            .find_due(now, &profiles, self.notification_log.as_ref());

        // The minute is only consumed once dispatch succeeds; a failed
        // presentation leaves the guard untouched so the remaining ticks
        // inside this minute retry the alert.
        let dispatched = self.dispatcher.dispatch(&due, &calendar::date_string(now))?;
        self.last_checked_minute = Some(current_minute);
        Ok(dispatched)
    }

    /// Run the scheduler until the process receives ctrl-c. Stopping the
    /// loop is the only cancellation primitive; no single cycle ever
    /// blocks, so none needs cancelling.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Reminder scheduler started, checking every {} seconds",
            CHECK_INTERVAL.as_secs()
        );

        let mut ticker = tokio::time::interval(CHECK_INTERVAL);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.check_cycle(Local::now()) {
                        warn!("Detection cycle failed: {:#}", e);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received, stopping scheduler");
                    break;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::profiles::CreateProfileCommand;
    use crate::domain::commands::reminders::CreateReminderCommand;
    use crate::domain::models::Schedule;
    use crate::domain::ReminderService;
    use crate::notify::presenter::test_support::RecordingPresenter;
    use crate::storage::yaml::test_utils::TestEnvironment;
    use chrono::TimeZone;

    struct Fixture {
        scheduler: ReminderScheduler,
        presenter: Arc<RecordingPresenter>,
        _env: TestEnvironment,
    }

    fn setup(permission: AlertPermission) -> Fixture {
        let env = TestEnvironment::new().unwrap();
        let connection = Arc::new(env.connection.clone());

        let profile_service = ProfileService::new(connection.clone());
        let reminder_service = ReminderService::new(connection.clone());
        let profile_id = profile_service
            .create_profile(CreateProfileCommand {
                name: "Me".to_string(),
            })
            .unwrap()
            .profile
            .id;
        reminder_service
            .create_reminder(CreateReminderCommand {
                profile_id,
                medicine_name: "Aspirin".to_string(),
                dosage: None,
                schedule: Schedule::Daily,
                times: vec!["09:00".to_string()],
            })
            .unwrap();

        let presenter = Arc::new(RecordingPresenter::with_permission(permission));
        let notification_log = Arc::new(
            crate::storage::yaml::NotificationLogRepository::new(connection),
        );
        let scheduler = ReminderScheduler::new(profile_service, presenter.clone(), notification_log);

        Fixture {
            scheduler,
            presenter,
            _env: env,
        }
    }

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 3, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_cycle_dispatches_due_reminder_once_per_minute() {
        let mut fixture = setup(AlertPermission::Granted);

        let dispatched = fixture.scheduler.check_cycle(at(9, 0, 0)).unwrap();
        assert_eq!(dispatched, 1);

        // Ten seconds later, still inside 09:00: the minute guard skips.
        let dispatched = fixture.scheduler.check_cycle(at(9, 0, 10)).unwrap();
        assert_eq!(dispatched, 0);

        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[test]
    fn test_next_minute_is_checked_but_log_suppresses_repeat() {
        let mut fixture = setup(AlertPermission::Granted);

        fixture.scheduler.check_cycle(at(9, 0, 0)).unwrap();
        // 09:01 is a fresh minute, but the reminder is only set for 09:00.
        let dispatched = fixture.scheduler.check_cycle(at(9, 1, 0)).unwrap();
        assert_eq!(dispatched, 0);
    }

    #[test]
    fn test_restart_does_not_realert_same_day() {
        let mut fixture = setup(AlertPermission::Granted);
        fixture.scheduler.check_cycle(at(9, 0, 0)).unwrap();

        // A fresh scheduler over the same storage simulates a restart
        // within the same minute: the durable log must suppress it.
        let connection = Arc::new(fixture._env.connection.clone());
        let mut restarted = ReminderScheduler::new(
            ProfileService::new(connection.clone()),
            fixture.presenter.clone(),
            Arc::new(crate::storage::yaml::NotificationLogRepository::new(
                connection,
            )),
        );
        let dispatched = restarted.check_cycle(at(9, 0, 30)).unwrap();
        assert_eq!(dispatched, 0);
        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[test]
    fn test_failed_presentation_retries_within_same_minute() {
        let mut fixture = setup(AlertPermission::Granted);
        fixture.presenter.set_fail_present(true);

        assert!(fixture.scheduler.check_cycle(at(9, 0, 0)).is_err());
        assert!(fixture.presenter.presented().is_empty());

        // The failed cycle did not consume the minute: once the channel
        // recovers, a later tick inside 09:00 still delivers the alert.
        fixture.presenter.set_fail_present(false);
        assert_eq!(fixture.scheduler.check_cycle(at(9, 0, 30)).unwrap(), 1);
        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[test]
    fn test_denied_permission_skips_detection() {
        let mut fixture = setup(AlertPermission::Denied);

        let dispatched = fixture.scheduler.check_cycle(at(9, 0, 0)).unwrap();
        assert_eq!(dispatched, 0);
        assert!(fixture.presenter.presented().is_empty());
    }

    #[test]
    fn test_granting_permission_resumes_detection() {
        let mut fixture = setup(AlertPermission::Default);

        assert_eq!(fixture.scheduler.check_cycle(at(9, 0, 0)).unwrap(), 0);

        fixture.presenter.set_permission(AlertPermission::Granted);
        // Still inside 09:00: the skipped cycle did not consume the
        // minute guard, so the alert fires now.
        assert_eq!(fixture.scheduler.check_cycle(at(9, 0, 20)).unwrap(), 1);
    }
}
