pub mod config;
pub mod error;
pub mod locations;
pub mod menu;
pub mod messages;
pub mod services;

pub use config::{CommanderSettings, ConfigPaths};
pub use error::{HostError, MenuError};
pub use locations::{Bookmark, LocationListModel, LocationRow, LocationRowKind};
pub use menu::{
    Dispatched, LocationMenu, LocationSource, MenuAction, PageBook, PaneHost, TabOptions,
    TravelDirection, FILE_LIST_PLUGIN, TERMINAL_PLUGIN,
};
pub use messages::{CommanderCommand, CommanderEvent};
pub use services::{ProcessService, ServiceHub};
