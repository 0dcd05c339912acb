use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// A bookmarked path shown in a location list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    location: PathBuf,
    icon: CompactString,
    title: CompactString,
}

impl Bookmark {
    pub fn new(location: impl Into<PathBuf>, icon: &str, title: &str) -> Self {
        Self {
            location: location.into(),
            icon: icon.into(),
            title: title.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Secondary line shown under the title
    pub fn subtitle(&self) -> String {
        self.location.display().to_string()
    }
}

/// What a row in a location list represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationRowKind {
    /// Group header, never selected or activated
    Separator { title: CompactString },
    /// Navigable path
    Bookmark(Bookmark),
}

/// Single row of a location list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    kind: LocationRowKind,
}

impl LocationRow {
    pub fn separator(title: &str) -> Self {
        Self {
            kind: LocationRowKind::Separator { title: title.into() },
        }
    }

    pub fn bookmark(bookmark: Bookmark) -> Self {
        Self {
            kind: LocationRowKind::Bookmark(bookmark),
        }
    }

    pub fn kind(&self) -> &LocationRowKind {
        &self.kind
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self.kind, LocationRowKind::Bookmark(_))
    }

    pub fn is_activatable(&self) -> bool {
        self.is_selectable()
    }

    pub fn title(&self) -> &str {
        match &self.kind {
            LocationRowKind::Separator { title } => title,
            LocationRowKind::Bookmark(bookmark) => bookmark.title(),
        }
    }

    /// Path behind the row, `None` for separators
    pub fn location(&self) -> Option<&Path> {
        match &self.kind {
            LocationRowKind::Separator { .. } => None,
            LocationRowKind::Bookmark(bookmark) => Some(bookmark.location()),
        }
    }
}
