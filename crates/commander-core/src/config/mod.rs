mod settings;
mod paths;

pub use settings::CommanderSettings;
pub use paths::ConfigPaths;
