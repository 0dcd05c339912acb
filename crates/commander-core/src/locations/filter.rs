use super::{LocationRow, LocationRowKind};

/// Visibility of each row for a search query.
///
/// Bookmarks match on title or path, case-insensitive. A separator stays
/// visible while at least one bookmark in its group matches.
pub fn visible_rows(rows: &[LocationRow], query: &str) -> Vec<bool> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![true; rows.len()];
    }

    let mut visible: Vec<bool> = rows
        .iter()
        .map(|row| match row.kind() {
            LocationRowKind::Separator { .. } => false,
            LocationRowKind::Bookmark(bookmark) => {
                bookmark.title().to_lowercase().contains(&query)
                    || bookmark.subtitle().to_lowercase().contains(&query)
            }
        })
        .collect();

    let mut header: Option<usize> = None;
    for (idx, row) in rows.iter().enumerate() {
        match row.kind() {
            LocationRowKind::Separator { .. } => header = Some(idx),
            LocationRowKind::Bookmark(_) => {
                if visible[idx] {
                    if let Some(h) = header {
                        visible[h] = true;
                    }
                }
            }
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{Bookmark, LocationListModel};
    use crate::menu::LocationSource;
    use std::path::PathBuf;

    fn rows() -> Vec<LocationRow> {
        vec![
            LocationRow::separator("User defined"),
            LocationRow::bookmark(Bookmark::new("/home/x", "user-home-symbolic", "Home")),
            LocationRow::bookmark(Bookmark::new("/usr/share", "folder-symbolic", "User shared")),
            LocationRow::separator("System wide"),
            LocationRow::bookmark(Bookmark::new("/", "computer-symbolic", "Root")),
        ]
    }

    #[test]
    fn test_empty_query_shows_everything() {
        assert_eq!(visible_rows(&rows(), "  "), vec![true; 5]);
    }

    #[test]
    fn test_title_match_keeps_group_header() {
        assert_eq!(
            visible_rows(&rows(), "ROOT"),
            vec![false, false, false, true, true]
        );
    }

    #[test]
    fn test_path_match() {
        assert_eq!(
            visible_rows(&rows(), "share"),
            vec![true, false, true, false, false]
        );
    }

    #[test]
    fn test_hidden_selection_is_dropped() {
        let mut model = LocationListModel::new(rows());
        model.select(Some(4));

        let visible = visible_rows(model.rows(), "share");
        assert!(model.retain_visible_selection(&visible));
        assert_eq!(model.selected_location(), None);
    }

    #[test]
    fn test_visible_selection_is_kept() {
        let mut model = LocationListModel::new(rows());
        model.select(Some(2));

        let visible = visible_rows(model.rows(), "share");
        assert!(!model.retain_visible_selection(&visible));
        assert_eq!(model.selected_location(), Some(PathBuf::from("/usr/share")));
    }

    #[test]
    fn test_no_match_hides_headers() {
        assert_eq!(visible_rows(&rows(), "nothing"), vec![false; 5]);
    }
}
