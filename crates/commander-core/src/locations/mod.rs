mod defaults;
mod filter;
mod model;
mod row;

pub use defaults::{default_bookmarks, default_mounts};
pub use filter::visible_rows;
pub use model::LocationListModel;
pub use row::{Bookmark, LocationRow, LocationRowKind};
