use gtk4::prelude::*;
use gtk4::{Notebook, Widget};

use commander_core::PageBook;

/// Notebook holding one page per location list
#[derive(Clone)]
pub struct NotebookBook {
    notebook: Notebook,
}

impl NotebookBook {
    pub fn new() -> Self {
        let notebook = Notebook::new();
        notebook.add_css_class("cm-location-notebook");
        notebook.set_vexpand(true);
        Self { notebook }
    }

    pub fn widget(&self) -> &Notebook {
        &self.notebook
    }
}

impl Default for NotebookBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBook for NotebookBook {
    type Page = Widget;
    type Title = Widget;

    fn append_page(&self, page: &Widget, title: &Widget) -> u32 {
        self.notebook.append_page(page, Some(title))
    }

    fn insert_page(&self, page: &Widget, title: &Widget, index: u32) -> u32 {
        self.notebook.insert_page(page, Some(title), Some(index))
    }

    fn remove_page(&self, index: u32) {
        self.notebook.remove_page(Some(index));
    }

    fn current_page(&self) -> Option<u32> {
        self.notebook.current_page()
    }

    fn n_pages(&self) -> u32 {
        self.notebook.n_pages()
    }
}
