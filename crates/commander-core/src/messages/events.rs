use compact_str::CompactString;

/// Events FROM async services TO GTK (updates UI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommanderEvent {
    /// A terminal emulator was started for a terminal tab
    TerminalLaunched {
        tab: u64,
        command: CompactString,
    },

    /// None of the terminal candidates could be started
    TerminalFailed {
        tab: u64,
        error: String,
    },
}
