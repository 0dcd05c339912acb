mod commands;
mod events;

pub use commands::CommanderCommand;
pub use events::CommanderEvent;
