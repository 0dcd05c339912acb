// In-memory page book and host used by the menu tests

use ahash::AHashSet;
use compact_str::CompactString;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use super::{PageBook, PaneHost, TabOptions, FILE_LIST_PLUGIN, TERMINAL_PLUGIN};
use crate::error::HostError;

#[derive(Default)]
pub struct FakeBook {
    pages: RefCell<Vec<(String, String)>>,
    current: Cell<Option<u32>>,
    append_on_insert: bool,
}

impl FakeBook {
    /// Book whose `insert_page` ignores the index and appends
    pub fn appending() -> Self {
        Self {
            append_on_insert: true,
            ..Self::default()
        }
    }

    pub fn set_current_page(&self, index: u32) {
        self.current.set(Some(index));
    }

    pub fn page_at(&self, index: usize) -> Option<String> {
        self.pages.borrow().get(index).map(|(page, _)| page.clone())
    }

    pub fn title_at(&self, index: usize) -> Option<String> {
        self.pages.borrow().get(index).map(|(_, title)| title.clone())
    }
}

impl PageBook for FakeBook {
    type Page = &'static str;
    type Title = &'static str;

    fn append_page(&self, page: &Self::Page, title: &Self::Title) -> u32 {
        let mut pages = self.pages.borrow_mut();
        pages.push((page.to_string(), title.to_string()));
        (pages.len() - 1) as u32
    }

    fn insert_page(&self, page: &Self::Page, title: &Self::Title, index: u32) -> u32 {
        let mut pages = self.pages.borrow_mut();
        let index = if self.append_on_insert {
            pages.len()
        } else {
            (index as usize).min(pages.len())
        };
        pages.insert(index, (page.to_string(), title.to_string()));
        index as u32
    }

    fn remove_page(&self, index: u32) {
        let mut pages = self.pages.borrow_mut();
        if (index as usize) < pages.len() {
            pages.remove(index as usize);
        }
    }

    fn current_page(&self) -> Option<u32> {
        self.current.get().filter(|&i| (i as usize) < self.pages.borrow().len())
    }

    fn n_pages(&self) -> u32 {
        self.pages.borrow().len() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tab {
    pub left: bool,
    pub id: u32,
}

impl Tab {
    pub fn left(id: u32) -> Self {
        Self { left: true, id }
    }

    pub fn right(id: u32) -> Self {
        Self { left: false, id }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ChangePath(Tab, PathBuf),
    CreateTab(Tab, CompactString, Value),
}

/// Two panes, each showing tab 1, both navigable by default
pub struct FakeHost {
    calls: RefCell<Vec<HostCall>>,
    not_navigable: RefCell<AHashSet<Tab>>,
    closed: RefCell<AHashSet<Tab>>,
    plugins: Vec<CompactString>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            not_navigable: RefCell::new(AHashSet::new()),
            closed: RefCell::new(AHashSet::new()),
            plugins: vec![FILE_LIST_PLUGIN.into(), TERMINAL_PLUGIN.into()],
        }
    }

    pub fn without_plugin(mut self, name: &str) -> Self {
        self.plugins.retain(|p| p.as_str() != name);
        self
    }

    pub fn set_navigable(&self, tab: Tab, navigable: bool) {
        if navigable {
            self.not_navigable.borrow_mut().remove(&tab);
        } else {
            self.not_navigable.borrow_mut().insert(tab);
        }
    }

    pub fn close(&self, tab: Tab) {
        self.closed.borrow_mut().insert(tab);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

impl PaneHost for FakeHost {
    type Target = Tab;
    type Plugin = CompactString;

    fn left_target(&self) -> Option<Tab> {
        Some(Tab::left(1))
    }

    fn opposite_target(&self, target: &Tab) -> Option<Tab> {
        Some(Tab { left: !target.left, id: 1 })
    }

    fn supports_navigation(&self, target: &Tab) -> bool {
        !self.not_navigable.borrow().contains(target)
    }

    fn change_path(&self, target: &Tab, path: &Path) -> Result<(), HostError> {
        if self.closed.borrow().contains(target) {
            return Err(HostError::TabClosed);
        }
        self.calls
            .borrow_mut()
            .push(HostCall::ChangePath(*target, path.to_path_buf()));
        Ok(())
    }

    fn plugin(&self, name: &str) -> Option<CompactString> {
        self.plugins.iter().find(|p| p.as_str() == name).cloned()
    }

    fn create_tab(
        &self,
        beside: &Tab,
        plugin: &CompactString,
        options: TabOptions,
    ) -> Result<(), HostError> {
        if self.closed.borrow().contains(beside) {
            return Err(HostError::TabClosed);
        }
        let options = serde_json::to_value(&options)
            .map_err(|e| HostError::InvalidOptions(e.to_string()))?;
        self.calls
            .borrow_mut()
            .push(HostCall::CreateTab(*beside, plugin.clone(), options));
        Ok(())
    }
}
