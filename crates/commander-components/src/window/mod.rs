mod host;
mod pane;

pub use host::CommanderWindow;
pub use pane::{Pane, Side, TabContent, TabHandle, TabPlugin};
