pub mod file_list;
pub mod location_menu;
pub mod terminal;
pub mod theme;
pub mod window;

pub use file_list::FileListTab;
pub use location_menu::{LocationListView, LocationMenuWidget, NotebookBook};
pub use terminal::TerminalTab;
pub use theme::load_css;
pub use window::{CommanderWindow, Side, TabHandle, TabPlugin};
