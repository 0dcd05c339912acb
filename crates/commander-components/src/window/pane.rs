use gtk4::prelude::*;
use gtk4::{Notebook, Widget};
use std::cell::RefCell;

use commander_core::{FILE_LIST_PLUGIN, TERMINAL_PLUGIN};
use crate::file_list::FileListTab;
use crate::terminal::TerminalTab;

/// Which half of the window a pane occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Handle to a tab, resolved by the window on every use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle {
    pub side: Side,
    pub id: u64,
}

/// Tab classes the window can create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPlugin {
    FileList,
    Terminal,
}

impl TabPlugin {
    pub const ALL: [TabPlugin; 2] = [TabPlugin::FileList, TabPlugin::Terminal];

    /// Registered class name
    pub fn name(self) -> &'static str {
        match self {
            TabPlugin::FileList => FILE_LIST_PLUGIN,
            TabPlugin::Terminal => TERMINAL_PLUGIN,
        }
    }
}

/// Widget behind a tab
#[derive(Clone)]
pub enum TabContent {
    FileList(FileListTab),
    Terminal(TerminalTab),
}

impl TabContent {
    pub fn root(&self) -> Widget {
        match self {
            TabContent::FileList(tab) => tab.root().clone().upcast(),
            TabContent::Terminal(tab) => tab.root().clone().upcast(),
        }
    }
}

struct TabEntry {
    id: u64,
    content: TabContent,
}

/// One side of the window: a notebook plus the tabs living in it
pub struct Pane {
    side: Side,
    notebook: Notebook,
    tabs: RefCell<Vec<TabEntry>>,
}

impl Pane {
    pub fn new(side: Side) -> Self {
        let notebook = Notebook::new();
        notebook.add_css_class("cm-pane");
        notebook.set_scrollable(true);
        notebook.set_hexpand(true);
        notebook.set_vexpand(true);

        Self {
            side,
            notebook,
            tabs: RefCell::new(Vec::new()),
        }
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Append a tab and make it the active page
    pub fn add_tab(&self, id: u64, content: TabContent, label: &impl IsA<Widget>) {
        let root = content.root();
        self.tabs.borrow_mut().push(TabEntry { id, content });
        let index = self.notebook.append_page(&root, Some(label));
        self.notebook.set_tab_reorderable(&root, true);
        self.notebook.set_current_page(Some(index));
    }

    /// Remove a tab, returning its content
    pub fn remove_tab(&self, id: u64) -> Option<TabContent> {
        let entry = {
            let mut tabs = self.tabs.borrow_mut();
            let pos = tabs.iter().position(|t| t.id == id)?;
            tabs.remove(pos)
        };
        let root = entry.content.root();
        if let Some(index) = self.notebook.page_num(&root) {
            self.notebook.remove_page(Some(index));
        }
        Some(entry.content)
    }

    pub fn tab(&self, id: u64) -> Option<TabContent> {
        self.tabs
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.content.clone())
    }

    /// Id of the tab on the current notebook page
    pub fn active_id(&self) -> Option<u64> {
        let index = self.notebook.current_page()?;
        let page = self.notebook.nth_page(Some(index))?;
        self.tabs
            .borrow()
            .iter()
            .find(|t| t.content.root() == page)
            .map(|t| t.id)
    }

    pub fn active_handle(&self) -> Option<TabHandle> {
        self.active_id().map(|id| TabHandle {
            side: self.side,
            id,
        })
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.borrow().len()
    }

    /// Terminal tabs, for routing service events
    pub fn terminal(&self, id: u64) -> Option<TerminalTab> {
        match self.tab(id)? {
            TabContent::Terminal(tab) => Some(tab),
            TabContent::FileList(_) => None,
        }
    }
}
