// Directory entries shown by file list tabs

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A file or directory entry
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub size: u64,
    pub mod_time: Option<SystemTime>,
}

impl FileEntry {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        // Follow symlinks so linked directories can be entered
        let metadata = fs::metadata(path).or_else(|_| fs::symlink_metadata(path)).ok()?;

        Some(Self {
            is_hidden: name.starts_with('.'),
            name,
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            mod_time: metadata.modified().ok(),
        })
    }
}

/// Read directory contents, directories first then by name
pub fn read_directory(path: &Path, show_hidden: bool) -> std::io::Result<Vec<FileEntry>> {
    let mut entries: Vec<FileEntry> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .filter_map(|e| FileEntry::from_path(&e.path()))
        .filter(|e| show_hidden || !e.is_hidden)
        .collect();

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

/// Icon name for an entry
pub fn icon_for(entry: &FileEntry) -> &'static str {
    if entry.is_dir {
        return "folder-symbolic";
    }

    let ext = entry
        .path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp") => "image-x-generic-symbolic",
        Some("mp4" | "mkv" | "avi" | "mov" | "webm") => "video-x-generic-symbolic",
        Some("mp3" | "flac" | "wav" | "ogg" | "m4a") => "audio-x-generic-symbolic",
        Some("pdf" | "doc" | "docx" | "odt") => "x-office-document-symbolic",
        Some("rs" | "go" | "py" | "js" | "ts" | "c" | "cpp" | "h") => "text-x-script-symbolic",
        Some("sh" | "bash" | "zsh" | "fish") => "application-x-executable-symbolic",
        Some("zip" | "tar" | "gz" | "bz2" | "xz" | "7z" | "zst") => "package-x-generic-symbolic",
        Some("iso" | "img") => "media-optical-symbolic",
        _ => "text-x-generic-symbolic",
    }
}

/// Format file size as human readable
pub fn humanize_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format modification time for display
pub fn format_date(time: Option<SystemTime>) -> String {
    time.map(|t| {
        let dt: chrono::DateTime<chrono::Local> = t.into();
        dt.format("%Y-%m-%d %H:%M").to_string()
    })
    .unwrap_or_else(|| "-".to_string())
}
