use compact_str::CompactString;
use std::path::PathBuf;

/// Commands FROM GTK TO async services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommanderCommand {
    /// Start a terminal emulator in `cwd`, trying each candidate in order
    LaunchTerminal {
        tab: u64,
        cwd: PathBuf,
        candidates: Vec<CompactString>,
    },

    /// Open a file with the desktop's default handler
    OpenFile(PathBuf),
}
