use std::fmt::Debug;
use std::path::Path;

use super::TabOptions;
use crate::error::HostError;

/// Plugin class name for directory listing tabs
pub const FILE_LIST_PLUGIN: &str = "file_list";

/// Plugin class name for terminal tabs
pub const TERMINAL_PLUGIN: &str = "system_terminal";

/// Services the host window offers to the location menu.
///
/// Targets are lightweight handles resolved by the host on every call, so a
/// handle to a closed tab simply stops resolving.
pub trait PaneHost {
    type Target: Clone + PartialEq + Debug;
    type Plugin;

    /// Active tab of the left-hand pane
    fn left_target(&self) -> Option<Self::Target>;

    /// Active tab of the pane opposite to `target`
    fn opposite_target(&self, target: &Self::Target) -> Option<Self::Target>;

    /// Whether `target` accepts path changes
    fn supports_navigation(&self, target: &Self::Target) -> bool;

    fn change_path(&self, target: &Self::Target, path: &Path) -> Result<(), HostError>;

    /// Look up a registered tab plugin by class name
    fn plugin(&self, name: &str) -> Option<Self::Plugin>;

    /// Create a tab in the same container as `beside`
    fn create_tab(
        &self,
        beside: &Self::Target,
        plugin: &Self::Plugin,
        options: TabOptions,
    ) -> Result<(), HostError>;
}
