use ahash::AHashMap;
use compact_str::CompactString;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, warn};

/// Tabbed container holding one page per location list
pub trait PageBook {
    type Page;
    type Title;

    /// Append a page, returning its index
    fn append_page(&self, page: &Self::Page, title: &Self::Title) -> u32;

    /// Insert a page at `index`, returning the index it landed on
    fn insert_page(&self, page: &Self::Page, title: &Self::Title, index: u32) -> u32;

    fn remove_page(&self, index: u32);

    fn current_page(&self) -> Option<u32>;

    fn n_pages(&self) -> u32;
}

/// List control that can report its selected location
pub trait LocationSource {
    fn selected_location(&self) -> Option<PathBuf>;
}

impl<S: LocationSource> LocationSource for Rc<RefCell<S>> {
    fn selected_location(&self) -> Option<PathBuf> {
        self.borrow().selected_location()
    }
}

/// Page index <-> list name bookkeeping.
///
/// Both tables are only touched through `register`, so every name maps to
/// exactly one page index and every such index maps back to a list.
#[derive(Debug)]
pub struct PageRegistry<L> {
    lists: AHashMap<u32, L>,
    names: AHashMap<CompactString, u32>,
}

impl<L> Default for PageRegistry<L> {
    fn default() -> Self {
        Self {
            lists: AHashMap::new(),
            names: AHashMap::new(),
        }
    }
}

impl<L> PageRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a list page, or replace the page already registered under `name`
    pub fn register<B: PageBook>(
        &mut self,
        book: &B,
        name: &str,
        title: &B::Title,
        page: &B::Page,
        list: L,
    ) -> u32 {
        match self.names.get(name).copied() {
            None => {
                let index = book.append_page(page, title);
                self.names.insert(name.into(), index);
                self.lists.insert(index, list);
                debug!("Added location list '{}' at page {}", name, index);
                index
            }
            Some(old) => {
                book.remove_page(old);
                let index = book.insert_page(page, title, old);
                if index != old {
                    warn!(
                        "Location list '{}' moved from page {} to {}, re-indexing",
                        name, old, index
                    );
                    self.reindex(old, index);
                }
                self.names.insert(name.into(), index);
                self.lists.insert(index, list);
                debug!("Replaced location list '{}' at page {}", name, index);
                index
            }
        }
    }

    /// Follow the notebook after the page at `old` was removed and its
    /// replacement landed at `new`: pages in between shifted by one.
    fn reindex(&mut self, old: u32, new: u32) {
        let shift = |i: u32| {
            if old < new && i > old && i <= new {
                i - 1
            } else if new < old && i >= new && i < old {
                i + 1
            } else {
                i
            }
        };

        self.lists = self
            .lists
            .drain()
            .filter(|(i, _)| *i != old)
            .map(|(i, list)| (shift(i), list))
            .collect();
        for index in self.names.values_mut() {
            if *index != old {
                *index = shift(*index);
            }
        }
    }

    pub fn list(&self, index: u32) -> Option<&L> {
        self.lists.get(&index)
    }

    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.names.get(name).copied()
    }

    pub fn list_named(&self, name: &str) -> Option<&L> {
        self.index_of(name).and_then(|index| self.list(index))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All registered lists, in no particular order
    pub fn lists(&self) -> impl Iterator<Item = &L> {
        self.lists.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::FakeBook;

    #[test]
    fn test_new_name_appends_one_page() {
        let book = FakeBook::default();
        let mut registry = PageRegistry::new();

        let first = registry.register(&book, "bookmarks", &"Bookmarks", &"bm-page", 1u8);
        let second = registry.register(&book, "mounts", &"Mounts", &"mnt-page", 2u8);

        assert_eq!((first, second), (0, 1));
        assert_eq!(book.n_pages(), 2);
        assert_eq!(registry.index_of("mounts"), Some(1));
        assert_eq!(registry.list(1), Some(&2));
        assert_eq!(registry.list_named("bookmarks"), Some(&1));
    }

    #[test]
    fn test_existing_name_replaces_in_place() {
        let book = FakeBook::default();
        let mut registry = PageRegistry::new();
        registry.register(&book, "bookmarks", &"Bookmarks", &"bm-page", 1u8);
        registry.register(&book, "mounts", &"Mounts", &"mnt-page", 2u8);

        let index = registry.register(&book, "bookmarks", &"Pane bookmarks", &"left-bm", 3u8);

        assert_eq!(index, 0);
        assert_eq!(book.n_pages(), 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list(0), Some(&3));
        assert_eq!(registry.list(1), Some(&2));
        assert_eq!(book.page_at(0).as_deref(), Some("left-bm"));
        assert_eq!(book.title_at(0).as_deref(), Some("Pane bookmarks"));
    }

    #[test]
    fn test_replace_follows_moved_page() {
        let book = FakeBook::appending();
        let mut registry = PageRegistry::new();
        registry.register(&book, "bookmarks", &"Bookmarks", &"bm-page", 1u8);
        registry.register(&book, "mounts", &"Mounts", &"mnt-page", 2u8);
        registry.register(&book, "network", &"Network", &"net-page", 3u8);

        let index = registry.register(&book, "bookmarks", &"Bookmarks", &"new-bm", 4u8);

        assert_eq!(index, 2);
        assert_eq!(registry.len(), 3);
        assert_eq!(book.n_pages(), 3);
        for (name, list) in [("mounts", 2u8), ("network", 3), ("bookmarks", 4)] {
            let index = registry.index_of(name).unwrap();
            assert_eq!(registry.list(index), Some(&list));
        }
        assert_eq!(book.page_at(0).as_deref(), Some("mnt-page"));
        assert_eq!(registry.index_of("mounts"), Some(0));
        assert_eq!(registry.index_of("network"), Some(1));
    }

    #[test]
    fn test_unknown_lookups() {
        let registry: PageRegistry<u8> = PageRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.index_of("bookmarks"), None);
        assert_eq!(registry.list(0), None);
    }
}
