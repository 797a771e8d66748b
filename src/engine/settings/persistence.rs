// Input settings file

use super::subsystem::ActiveConfig;
use super::SettingsError;
use crate::engine::input::{InputSource, MappingName, Name, DEFAULT_CONFIG_NAME};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File the input settings are stored in, kept apart from general settings
pub const SETTINGS_FILE_NAME: &str = "UserInputSettings.ron";

/// Persisted form of `InputSettings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedInputSettings {
    pub controller_platform: Name,
    pub controller_preset: Name,
    pub input_config_name: ActiveConfig,
    pub custom_keyboard_config: BTreeMap<MappingName, InputSource>,
}

impl Default for SavedInputSettings {
    fn default() -> Self {
        Self {
            controller_platform: Name::none(),
            controller_preset: Name::from(DEFAULT_CONFIG_NAME),
            input_config_name: ActiveConfig::Default,
            custom_keyboard_config: BTreeMap::new(),
        }
    }
}

/// Reads and writes the input settings file inside a directory
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Create a store rooted at the given directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the settings file
    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Load saved settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<SavedInputSettings, SettingsError> {
        let path = self.path();

        if !path.exists() {
            debug!("No input settings at {}, using defaults", path.display());
            return Ok(SavedInputSettings::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        ron::from_str(&contents).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Write settings, creating the directory if needed
    pub fn save(&self, settings: &SavedInputSettings) -> Result<(), SettingsError> {
        std::fs::create_dir_all(&self.dir)?;

        let contents = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())?;
        let path = self.path();
        std::fs::write(&path, contents)?;

        info!("Saved input settings to {}", path.display());
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
