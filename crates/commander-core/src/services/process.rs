use async_channel::Sender;
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::messages::{CommanderCommand, CommanderEvent};

/// Service for launching terminals and external openers
pub struct ProcessService {
    command_rx: mpsc::Receiver<CommanderCommand>,
    event_tx: Sender<CommanderEvent>,
}

impl ProcessService {
    pub fn new(command_rx: mpsc::Receiver<CommanderCommand>, event_tx: Sender<CommanderEvent>) -> Self {
        Self { command_rx, event_tx }
    }

    /// Run the process service until every command sender is gone
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!("Starting process service");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CommanderCommand::LaunchTerminal { tab, cwd, candidates } => {
                    let event = Self::launch_terminal(tab, &cwd, &candidates).await;
                    let _ = self.event_tx.send(event).await;
                }

                CommanderCommand::OpenFile(path) => {
                    Self::open_file(path).await;
                }
            }
        }

        Ok(())
    }

    /// Start the first available terminal candidate in `cwd`
    pub async fn launch_terminal(tab: u64, cwd: &Path, candidates: &[CompactString]) -> CommanderEvent {
        for candidate in candidates {
            let Some(program) = candidate.split_whitespace().next() else {
                continue;
            };
            if !program_in_path(program) {
                debug!("Terminal candidate not installed: {}", program);
                continue;
            }

            let result = tokio::process::Command::new("sh")
                .args(["-c", candidate.as_str()])
                .current_dir(cwd)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match result {
                Ok(_) => {
                    info!("Launched terminal '{}' in {:?}", candidate, cwd);
                    return CommanderEvent::TerminalLaunched {
                        tab,
                        command: candidate.clone(),
                    };
                }
                Err(e) => error!("Failed to launch '{}': {}", candidate, e),
            }
        }

        CommanderEvent::TerminalFailed {
            tab,
            error: format!("no terminal found in {} candidate(s)", candidates.len()),
        }
    }

    async fn open_file(path: PathBuf) {
        debug!("Opening file: {:?}", path);

        let result = tokio::process::Command::new("xdg-open")
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = result {
            error!("Failed to open {:?}: {}", path, e);
        }
    }
}

/// Whether `program` resolves to an executable file
pub fn program_in_path(program: &str) -> bool {
    if program.contains('/') {
        return Path::new(program).is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
