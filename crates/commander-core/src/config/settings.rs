use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TERMINAL: &str = "raven-terminal || foot || kitty || alacritty || xterm";

/// Commander settings (commander.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderSettings {
    /// Shell command used for terminal tabs, `||` separated fallbacks
    #[serde(default = "default_terminal_command")]
    pub terminal_command: String,

    #[serde(default)]
    pub show_hidden: bool,

    /// Minimum height of each location list in the menu
    #[serde(default = "default_list_height")]
    pub list_height: i32,

    // Start directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_path: Option<PathBuf>,
}

fn default_terminal_command() -> String {
    DEFAULT_TERMINAL.to_string()
}

fn default_list_height() -> i32 {
    300
}

impl Default for CommanderSettings {
    fn default() -> Self {
        Self {
            terminal_command: default_terminal_command(),
            show_hidden: false,
            list_height: default_list_height(),
            left_path: None,
            right_path: None,
        }
    }
}

impl CommanderSettings {
    /// Get the default settings path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config/raven/commander.json")
    }

    /// Load settings, falling back to defaults on a missing or broken file
    pub fn load(path: &Path) -> Self {
        std::fs::read(path)
            .ok()
            .and_then(|data| serde_json::from_slice(&data).ok())
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let dir = path.parent().ok_or_else(|| anyhow::anyhow!("Invalid path"))?;
        std::fs::create_dir_all(dir)?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Start directory for a pane, home when unset or missing
    pub fn start_path(&self, left: bool) -> PathBuf {
        let configured = if left { &self.left_path } else { &self.right_path };
        configured
            .as_ref()
            .filter(|p| p.is_dir())
            .cloned()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Terminal fallbacks, in order
    pub fn terminal_candidates(&self) -> Vec<&str> {
        self.terminal_command
            .split("||")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }
}
