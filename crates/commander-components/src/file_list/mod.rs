mod navigation;
mod types;
mod widget;

pub use navigation::History;
pub use types::{format_date, humanize_size, icon_for, read_directory, FileEntry};
pub use widget::FileListTab;
