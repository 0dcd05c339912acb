mod controller;
mod host;
mod options;
mod pages;

pub use controller::{Dispatched, LocationMenu, MenuAction, TravelDirection};
pub use host::{PaneHost, FILE_LIST_PLUGIN, TERMINAL_PLUGIN};
pub use options::TabOptions;
pub use pages::{LocationSource, PageBook, PageRegistry};

#[cfg(test)]
pub(crate) mod testing;
