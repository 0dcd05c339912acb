mod process;
mod hub;

pub use process::{program_in_path, ProcessService};
pub use hub::ServiceHub;
