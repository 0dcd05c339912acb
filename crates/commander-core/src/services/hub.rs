use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::messages::{CommanderCommand, CommanderEvent};
use super::ProcessService;

/// Central hub for managing all async services
pub struct ServiceHub {
    /// Event receiver for GTK components
    event_rx: async_channel::Receiver<CommanderEvent>,
    /// Command sender for GTK to use
    command_tx: mpsc::Sender<CommanderCommand>,
    /// Tokio runtime
    runtime: Arc<Runtime>,
}

impl ServiceHub {
    /// Create a new ServiceHub with its own tokio runtime
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Arc::new(Runtime::new()?);

        // Create communication channels
        let (event_tx, event_rx) = async_channel::bounded::<CommanderEvent>(64);
        let (command_tx, command_rx) = mpsc::channel::<CommanderCommand>(64);

        runtime.spawn(async move {
            let service = ProcessService::new(command_rx, event_tx);
            if let Err(e) = service.run().await {
                error!("Process service error: {}", e);
            }
        });

        info!("ServiceHub initialized");

        Ok(Self {
            event_rx,
            command_tx,
            runtime,
        })
    }

    /// Get a clone of the event receiver
    pub fn event_receiver(&self) -> async_channel::Receiver<CommanderEvent> {
        self.event_rx.clone()
    }

    /// Get a clone of the command sender
    pub fn command_sender(&self) -> mpsc::Sender<CommanderCommand> {
        self.command_tx.clone()
    }

    /// Enter the runtime context (for GTK callbacks)
    pub fn enter_runtime(&self) -> tokio::runtime::EnterGuard<'_> {
        self.runtime.enter()
    }
}
