use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// YamlConnection manages the data directory that holds every durable
/// file the daemon owns.
#[derive(Clone)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a new connection with a base directory, creating the
    /// directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default per-user data directory.
    pub fn new_default() -> Result<Self> {
        Self::new(Self::default_data_dir()?)
    }

    /// The default per-user data directory (e.g. `~/.local/share/pill-pal`).
    pub fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine user data directory"))?;
        Ok(data_dir.join("pill-pal"))
    }

    /// Get the base directory for all stored files.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the YAML file holding the full profile collection.
    pub fn profiles_path(&self) -> PathBuf {
        self.base_directory.join("profiles.yaml")
    }

    /// Path of the CSV file holding the notification log.
    pub fn notification_log_path(&self) -> PathBuf {
        self.base_directory.join("notification_log.csv")
    }
}
