use std::path::PathBuf;

use super::{Bookmark, LocationRow};

/// Bookmarks shown until a real bookmark store exists
pub fn default_bookmarks() -> Vec<LocationRow> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));

    vec![
        LocationRow::separator("User defined"),
        LocationRow::bookmark(Bookmark::new(home, "user-home-symbolic", "Home")),
        LocationRow::bookmark(Bookmark::new("/usr/share", "folder-symbolic", "User shared")),
        LocationRow::separator("System wide"),
        LocationRow::bookmark(Bookmark::new("/", "computer-symbolic", "Root")),
    ]
}

/// Mount list placeholder, mount discovery is not done here
pub fn default_mounts() -> Vec<LocationRow> {
    vec![
        LocationRow::separator("Mounted"),
        LocationRow::bookmark(Bookmark::new("/", "drive-harddisk-symbolic", "File System")),
    ]
}
