use anyhow::Result;
use chrono::Utc;
use log::{error, info};
use std::sync::Arc;

use crate::domain::commands::reminders::{
    CreateReminderCommand, CreateReminderResult, DeleteReminderCommand, DeleteReminderResult,
    UpdateReminderCommand, UpdateReminderResult,
};
use crate::domain::models::{Profile, Reminder};
use crate::domain::profile_service::ProfileService;
use crate::storage::traits::ProfileStorage;
use crate::storage::yaml::{ProfileRepository, YamlConnection};

/// Service for managing the reminders owned by a profile.
///
/// All user-supplied fields are validated before anything touches
/// storage; a rejected command leaves the collection untouched.
#[derive(Clone)]
pub struct ReminderService {
    profile_repository: ProfileRepository,
    profile_service: ProfileService,
}

impl ReminderService {
    /// Create a new ReminderService.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self {
            profile_repository: ProfileRepository::new(connection.clone()),
            profile_service: ProfileService::new(connection),
        }
    }

    /// Create a new reminder under a profile.
    pub fn create_reminder(&self, command: CreateReminderCommand) -> Result<CreateReminderResult> {
        info!(
            "Creating reminder '{}' for profile {}",
            command.medicine_name, command.profile_id
        );

        Reminder::validate_fields(&command.medicine_name, &command.times, &command.schedule)?;

        let now = Utc::now();
        let reminder = Reminder {
            id: Reminder::generate_id(now.timestamp_millis() as u64),
            medicine_name: command.medicine_name.trim().to_string(),
            dosage: normalize_dosage(command.dosage),
            schedule: command.schedule,
            times: command.times,
            created_at: now,
            updated_at: now,
        };

        let mut profiles = self.profile_service.load_or_default();
        let profile = find_profile_mut(&mut profiles, &command.profile_id)?;
        profile.reminders.push(reminder.clone());
        profile.updated_at = now;

        self.persist(&profiles);

        info!(
            "Created reminder {} ({}, {}) for profile {}",
            reminder.id,
            reminder.medicine_name,
            reminder.schedule.description(),
            command.profile_id
        );

        Ok(CreateReminderResult { reminder })
    }

    /// Replace the editable fields of an existing reminder.
    pub fn update_reminder(&self, command: UpdateReminderCommand) -> Result<UpdateReminderResult> {
        info!(
            "Updating reminder {} for profile {}",
            command.reminder_id, command.profile_id
        );

        Reminder::validate_fields(&command.medicine_name, &command.times, &command.schedule)?;

        let mut profiles = self.profile_service.load_or_default();
        let profile = find_profile_mut(&mut profiles, &command.profile_id)?;
        let reminder = profile
            .reminders
            .iter_mut()
            .find(|r| r.id == command.reminder_id)
            .ok_or_else(|| anyhow::anyhow!("Reminder not found: {}", command.reminder_id))?;

        let now = Utc::now();
        reminder.medicine_name = command.medicine_name.trim().to_string();
        reminder.dosage = normalize_dosage(command.dosage);
        reminder.schedule = command.schedule;
        reminder.times = command.times;
        reminder.updated_at = now;
        let updated = reminder.clone();
        profile.updated_at = now;

        self.persist(&profiles);

        Ok(UpdateReminderResult { reminder: updated })
    }

    /// Delete a reminder. Its notification log entries are left behind;
    /// the detector simply never matches the dead reminder id again.
    pub fn delete_reminder(&self, command: DeleteReminderCommand) -> Result<DeleteReminderResult> {
        info!(
            "Deleting reminder {} from profile {}",
            command.reminder_id, command.profile_id
        );

        let mut profiles = self.profile_service.load_or_default();
        let profile = find_profile_mut(&mut profiles, &command.profile_id)?;

        let before = profile.reminders.len();
        profile.reminders.retain(|r| r.id != command.reminder_id);
        if profile.reminders.len() == before {
            return Err(anyhow::anyhow!("Reminder not found: {}", command.reminder_id));
        }
        profile.updated_at = Utc::now();

        self.persist(&profiles);

        Ok(DeleteReminderResult {
            success_message: "Reminder deleted successfully".to_string(),
        })
    }

    /// A profile's reminders sorted for display: ascending by earliest
    /// time of day, reminders without a time last.
    pub fn sorted_reminders(profile: &Profile) -> Vec<Reminder> {
        let mut reminders = profile.reminders.clone();
        reminders.sort_by(|a, b| match (a.earliest_time(), b.earliest_time()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        reminders
    }

    fn persist(&self, profiles: &[Profile]) {
        if let Err(e) = self.profile_repository.save_profiles(profiles) {
            error!("Failed to save profiles: {:#}", e);
        }
    }
}

fn find_profile_mut<'a>(profiles: &'a mut [Profile], profile_id: &str) -> Result<&'a mut Profile> {
    profiles
        .iter_mut()
        .find(|p| p.id == profile_id)
        .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", profile_id))
}

fn normalize_dosage(dosage: Option<String>) -> Option<String> {
    dosage
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
