use compact_str::CompactString;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the host application when asked to act on a pane
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The tab handle no longer resolves (tab closed, pane rebuilt)
    #[error("tab is no longer open")]
    TabClosed,

    #[error("tab does not accept path changes")]
    NotNavigable,

    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// The plugin refused the options it was given
    #[error("invalid tab options: {0}")]
    InvalidOptions(String),
}

/// Reasons a location menu action was ignored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("no current target set")]
    NoTarget,

    #[error("no location list page is active")]
    NoActivePage,

    #[error("no location selected")]
    NoSelection,

    #[error("current target has no opposite pane")]
    NoOppositeTarget,

    #[error("plugin '{0}' is not registered")]
    UnknownPlugin(CompactString),

    #[error(transparent)]
    Host(#[from] HostError),
}
