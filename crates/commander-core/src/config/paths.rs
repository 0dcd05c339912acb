use std::path::PathBuf;

use super::CommanderSettings;

/// Configuration paths for Raven Commander
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub settings: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        Self {
            settings: CommanderSettings::default_path(),
        }
    }

    /// Paths with the settings file overridden (from the command line)
    pub fn with_settings(settings: PathBuf) -> Self {
        Self { settings }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
