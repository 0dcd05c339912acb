use std::path::PathBuf;

use super::LocationRow;
use crate::menu::LocationSource;

/// Rows of one location list plus its selection
#[derive(Debug, Clone, Default)]
pub struct LocationListModel {
    rows: Vec<LocationRow>,
    selected: Option<usize>,
}

impl LocationListModel {
    pub fn new(rows: Vec<LocationRow>) -> Self {
        Self { rows, selected: None }
    }

    pub fn rows(&self) -> &[LocationRow] {
        &self.rows
    }

    /// Replace the content, dropping the selection
    pub fn set_rows(&mut self, rows: Vec<LocationRow>) {
        self.rows = rows;
        self.selected = None;
    }

    /// Select a row; separators and out-of-range indices clear the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| self.rows.get(i).is_some_and(LocationRow::is_selectable));
    }

    pub fn selected(&self) -> Option<&LocationRow> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Drop the selection when its row is hidden in `visible`.
    ///
    /// Returns true when the selection was cleared.
    pub fn retain_visible_selection(&mut self, visible: &[bool]) -> bool {
        match self.selected {
            Some(i) if !visible.get(i).copied().unwrap_or(false) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}

impl LocationSource for LocationListModel {
    fn selected_location(&self) -> Option<PathBuf> {
        self.selected()
            .and_then(LocationRow::location)
            .map(|p| p.to_path_buf())
    }
}
