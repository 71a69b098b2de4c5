//! # Profile Repository
//!
//! Stores the whole profile/reminder collection as a single YAML document.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_format_version: "1.0"
//! profiles:
//!   - id: "profile::default"
//!     name: "Me"
//!     reminders:
//!       - id: "reminder::1700000000000::4f2a..."
//!         medicine_name: "Aspirin"
//!         dosage: "100mg"
//!         frequency: daily
//!         times: ["09:00", "21:00"]
//! ```
//!
//! Every save rewrites the full document through a temp file, so a crash
//! mid-write never leaves a half-written collection behind.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;

use super::connection::YamlConnection;
use crate::domain::models::Profile;
use crate::storage::traits::ProfileStorage;

/// On-disk document wrapping the collection, versioned for future
/// migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileDocument {
    data_format_version: String,
    profiles: Vec<Profile>,
}

impl ProfileDocument {
    fn new(profiles: Vec<Profile>) -> Self {
        Self {
            data_format_version: "1.0".to_string(),
            profiles,
        }
    }
}

/// YAML-backed profile repository.
#[derive(Clone)]
pub struct ProfileRepository {
    connection: Arc<YamlConnection>,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self { connection }
    }
}

impl ProfileStorage for ProfileRepository {
    /// Load the full profile collection from `profiles.yaml`.
    ///
    /// A missing file and an unparseable file both surface as errors;
    /// the service layer decides how to degrade.
    fn load_profiles(&self) -> Result<Vec<Profile>> {
        let path = self.connection.profiles_path();

        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profiles file: {}", path.display()))?;
        let document: ProfileDocument = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse profiles file: {}", path.display()))?;

        debug!("Loaded {} profiles from {}", document.profiles.len(), path.display());
        Ok(document.profiles)
    }

    /// Persist the full collection, atomically replacing the previous
    /// snapshot.
    fn save_profiles(&self, profiles: &[Profile]) -> Result<()> {
        let path = self.connection.profiles_path();
        let document = ProfileDocument::new(profiles.to_vec());
        let yaml_content = serde_yaml::to_string(&document)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &path)?;

        info!("Saved {} profiles to {}", profiles.len(), path.display());
        Ok(())
    }
}
