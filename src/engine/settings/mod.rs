// User input settings
//
// Holds the player's controller platform and custom keyboard bindings,
// layered on top of the registered input configs, and persists them to
// their own settings file.

mod persistence;
mod subsystem;

use std::path::PathBuf;

pub use persistence::{SavedInputSettings, SettingsStore, SETTINGS_FILE_NAME};
pub use subsystem::{ActiveConfig, InputSettings};

/// Settings persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}
