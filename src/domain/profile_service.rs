use anyhow::Result;
use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use crate::domain::commands::profiles::{
    CreateProfileCommand, CreateProfileResult, DeleteProfileCommand, DeleteProfileResult,
    ListProfilesResult, RenameProfileCommand, RenameProfileResult,
};
use crate::domain::models::Profile;
use crate::storage::traits::ProfileStorage;
use crate::storage::yaml::{ProfileRepository, YamlConnection};

/// Service for managing profiles (the people who own reminders).
///
/// Every mutation loads the current collection, derives a new snapshot,
/// and persists it. Persistence is best-effort: a failed save is logged
/// and the in-memory result stays authoritative for the session.
#[derive(Clone)]
pub struct ProfileService {
    profile_repository: ProfileRepository,
}

impl ProfileService {
    /// Create a new ProfileService.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        let profile_repository = ProfileRepository::new(connection);
        Self { profile_repository }
    }

    /// Load the profile collection, falling back to a single empty
    /// default profile when durable state is missing or corrupt. This
    /// never fails: a broken file degrades to a fresh start, not a crash.
    pub fn load_or_default(&self) -> Vec<Profile> {
        match self.profile_repository.load_profiles() {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!("Could not load profiles, falling back to default: {:#}", e);
                vec![Profile::default_profile()]
            }
        }
    }

    /// Create a new profile.
    pub fn create_profile(&self, command: CreateProfileCommand) -> Result<CreateProfileResult> {
        info!("Creating profile: name={}", command.name);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Profile name cannot be empty"));
        }

        let now = Utc::now();
        let profile = Profile {
            id: Profile::generate_id(now.timestamp_millis() as u64),
            name: name.to_string(),
            reminders: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let mut profiles = self.load_or_default();
        profiles.push(profile.clone());
        self.persist(&profiles);

        info!("Created profile: {} with ID: {}", profile.name, profile.id);

        Ok(CreateProfileResult { profile })
    }

    /// Rename an existing profile in place.
    pub fn rename_profile(&self, command: RenameProfileCommand) -> Result<RenameProfileResult> {
        info!("Renaming profile: {}", command.profile_id);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Profile name cannot be empty"));
        }

        let mut profiles = self.load_or_default();
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == command.profile_id)
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", command.profile_id))?;

        profile.name = name.to_string();
        profile.updated_at = Utc::now();
        let renamed = profile.clone();

        self.persist(&profiles);

        info!("Renamed profile {} to '{}'", renamed.id, renamed.name);

        Ok(RenameProfileResult { profile: renamed })
    }

    /// Delete a profile and, with it, every reminder it owns. Entries in
    /// the notification log that point at the deleted reminders are left
    /// behind; they are inert and never matched again.
    pub fn delete_profile(&self, command: DeleteProfileCommand) -> Result<DeleteProfileResult> {
        info!("Deleting profile: {}", command.profile_id);

        let mut profiles = self.load_or_default();
        let before = profiles.len();
        profiles.retain(|p| p.id != command.profile_id);

        if profiles.len() == before {
            return Err(anyhow::anyhow!("Profile not found: {}", command.profile_id));
        }

        self.persist(&profiles);

        info!("Deleted profile: {}", command.profile_id);

        Ok(DeleteProfileResult {
            success_message: "Profile deleted successfully".to_string(),
        })
    }

    /// List all profiles.
    pub fn list_profiles(&self) -> Result<ListProfilesResult> {
        let profiles = self.load_or_default();
        Ok(ListProfilesResult { profiles })
    }

    /// Best-effort persistence: failure is logged for diagnostics and the
    /// in-memory snapshot remains authoritative for this session.
    fn persist(&self, profiles: &[Profile]) {
        if let Err(e) = self.profile_repository.save_profiles(profiles) {
            error!("Failed to save profiles: {:#}", e);
        }
    }
}
