use compact_str::CompactString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{
    LocationSource, PageBook, PageRegistry, PaneHost, TabOptions, FILE_LIST_PLUGIN,
    TERMINAL_PLUGIN,
};
use crate::error::MenuError;

/// Buttons of the location menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Open,
    OpenInNewTab,
    OpenInOpposite,
    OpenInTerminal,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Open,
        MenuAction::OpenInNewTab,
        MenuAction::OpenInOpposite,
        MenuAction::OpenInTerminal,
    ];

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Open => "document-open-symbolic",
            Self::OpenInNewTab => "tab-new-symbolic",
            Self::OpenInOpposite => TravelDirection::Forward.icon_name(),
            Self::OpenInTerminal => "utilities-terminal-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::OpenInNewTab => "Open selected path in new tab",
            Self::OpenInOpposite => "Open selected path in opposite list",
            Self::OpenInTerminal => "Open terminal at selected path",
        }
    }
}

/// Direction the "open in opposite" button points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    Forward,
    Backward,
}

impl TravelDirection {
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Forward => "go-next-symbolic",
            Self::Backward => "go-previous-symbolic",
        }
    }
}

/// What a dispatched action ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    ChangedPath { path: PathBuf },
    CreatedTab { plugin: CompactString, path: PathBuf },
    /// Target exists but does not accept path changes
    NotNavigable,
}

/// Location menu state: registered list pages and the current target
pub struct LocationMenu<B: PageBook, L, T> {
    book: B,
    pages: PageRegistry<L>,
    current: Option<T>,
}

impl<B, L, T> LocationMenu<B, L, T>
where
    B: PageBook,
    L: LocationSource,
    T: Clone + PartialEq + std::fmt::Debug,
{
    pub fn new(book: B) -> Self {
        Self {
            book,
            pages: PageRegistry::new(),
            current: None,
        }
    }

    pub fn book(&self) -> &B {
        &self.book
    }

    pub fn pages(&self) -> &PageRegistry<L> {
        &self.pages
    }

    /// Add list control with specified name to the notebook.
    ///
    /// A list registered under an existing name replaces that page in place,
    /// which lets each pane swap in its own lists.
    pub fn add_list(&mut self, name: &str, title: &B::Title, page: &B::Page, list: L) -> u32 {
        self.pages.register(&self.book, name, title, page, list)
    }

    /// Set the pane used as default target for path changes
    pub fn set_current_target(&mut self, target: Option<T>) {
        debug!("Location menu target: {:?}", target);
        self.current = target;
    }

    pub fn current_target(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Forward when the current target is the left pane
    pub fn opposite_direction<H>(&self, host: &H) -> TravelDirection
    where
        H: PaneHost<Target = T>,
    {
        if host.left_target().as_ref() == self.current.as_ref() {
            TravelDirection::Forward
        } else {
            TravelDirection::Backward
        }
    }

    /// List control of the active notebook page
    pub fn active_list(&self) -> Option<&L> {
        self.book.current_page().and_then(|index| self.pages.list(index))
    }

    pub fn selected_location(&self) -> Result<PathBuf, MenuError> {
        self.active_list()
            .ok_or(MenuError::NoActivePage)?
            .selected_location()
            .ok_or(MenuError::NoSelection)
    }

    /// Run `action` against the host
    pub fn dispatch<H>(&self, action: MenuAction, host: &H) -> Result<Dispatched, MenuError>
    where
        H: PaneHost<Target = T>,
    {
        let target = self.current.as_ref().ok_or(MenuError::NoTarget)?;
        let location = self.selected_location()?;

        match action {
            MenuAction::Open => Self::navigate(host, target, location),
            MenuAction::OpenInNewTab => Self::open_tab(host, target, FILE_LIST_PLUGIN, &location),
            MenuAction::OpenInOpposite => {
                let opposite = host
                    .opposite_target(target)
                    .ok_or(MenuError::NoOppositeTarget)?;
                Self::navigate(host, &opposite, location)
            }
            MenuAction::OpenInTerminal => Self::open_tab(host, target, TERMINAL_PLUGIN, &location),
        }
    }

    /// Button handler: dispatch and swallow failures.
    ///
    /// Always reports the event as consumed.
    pub fn activate<H>(&self, action: MenuAction, host: &H) -> bool
    where
        H: PaneHost<Target = T>,
    {
        match self.dispatch(action, host) {
            Ok(Dispatched::NotNavigable) => {
                debug!("{:?}: target does not accept path changes", action);
            }
            Ok(done) => debug!("{:?}: {:?}", action, done),
            Err(e) => warn!("Ignoring location menu action {:?}: {}", action, e),
        }
        true
    }

    fn navigate<H>(host: &H, target: &T, location: PathBuf) -> Result<Dispatched, MenuError>
    where
        H: PaneHost<Target = T>,
    {
        if !host.supports_navigation(target) {
            return Ok(Dispatched::NotNavigable);
        }
        host.change_path(target, &location)?;
        Ok(Dispatched::ChangedPath { path: location })
    }

    fn open_tab<H>(
        host: &H,
        target: &T,
        plugin_name: &str,
        location: &Path,
    ) -> Result<Dispatched, MenuError>
    where
        H: PaneHost<Target = T>,
    {
        let plugin = host
            .plugin(plugin_name)
            .ok_or_else(|| MenuError::UnknownPlugin(plugin_name.into()))?;
        host.create_tab(target, &plugin, TabOptions::with_path(location))?;
        Ok(Dispatched::CreatedTab {
            plugin: plugin_name.into(),
            path: location.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use crate::locations::{Bookmark, LocationListModel, LocationRow};
    use crate::menu::testing::{FakeBook, FakeHost, HostCall, Tab};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Menu = LocationMenu<FakeBook, Rc<RefCell<LocationListModel>>, Tab>;

    fn list(paths: &[&str]) -> Rc<RefCell<LocationListModel>> {
        let mut rows = vec![LocationRow::separator("User defined")];
        rows.extend(
            paths
                .iter()
                .map(|p| LocationRow::bookmark(Bookmark::new(*p, "folder-symbolic", p))),
        );
        Rc::new(RefCell::new(LocationListModel::new(rows)))
    }

    fn menu_with_selection(path: &str) -> Menu {
        let mut menu = Menu::new(FakeBook::default());
        let bookmarks = list(&["/etc", path]);
        bookmarks.borrow_mut().select(Some(2));
        menu.add_list("bookmarks", &"Bookmarks", &"bm", bookmarks);
        menu.add_list("mounts", &"Mounts", &"mnt", list(&["/"]));
        menu.book().set_current_page(0);
        menu.set_current_target(Some(Tab::left(1)));
        menu
    }

    #[test]
    fn test_open_changes_current_target_path() {
        let menu = menu_with_selection("/home/x");
        let host = FakeHost::default();

        let done = menu.dispatch(MenuAction::Open, &host).unwrap();

        assert_eq!(done, Dispatched::ChangedPath { path: "/home/x".into() });
        assert_eq!(
            host.calls(),
            vec![HostCall::ChangePath(Tab::left(1), "/home/x".into())]
        );
    }

    #[test]
    fn test_open_in_new_tab_creates_file_list() {
        let menu = menu_with_selection("/tmp");
        let host = FakeHost::new();

        assert!(menu.activate(MenuAction::OpenInNewTab, &host));

        assert_eq!(
            host.calls(),
            vec![HostCall::CreateTab(Tab::left(1), "file_list".into(), json!({"path": "/tmp"}))]
        );
    }

    #[test]
    fn test_open_in_terminal_creates_terminal_tab() {
        let menu = menu_with_selection("/var");
        let host = FakeHost::new();

        let done = menu.dispatch(MenuAction::OpenInTerminal, &host).unwrap();

        assert_eq!(
            done,
            Dispatched::CreatedTab { plugin: "system_terminal".into(), path: "/var".into() }
        );
        assert_eq!(
            host.calls(),
            vec![HostCall::CreateTab(
                Tab::left(1),
                "system_terminal".into(),
                json!({"path": "/var"})
            )]
        );
    }

    #[test]
    fn test_open_in_opposite_targets_other_pane() {
        let menu = menu_with_selection("/srv");
        let host = FakeHost::new();

        menu.dispatch(MenuAction::OpenInOpposite, &host).unwrap();

        assert_eq!(
            host.calls(),
            vec![HostCall::ChangePath(Tab::right(1), "/srv".into())]
        );
    }

    #[test]
    fn test_open_skips_non_navigable_target() {
        let menu = menu_with_selection("/srv");
        let host = FakeHost::new();
        host.set_navigable(Tab::left(1), false);

        let done = menu.dispatch(MenuAction::Open, &host).unwrap();

        assert_eq!(done, Dispatched::NotNavigable);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_missing_target_is_ignored() {
        let mut menu = menu_with_selection("/srv");
        menu.set_current_target(None);
        let host = FakeHost::new();

        assert_eq!(menu.dispatch(MenuAction::Open, &host), Err(MenuError::NoTarget));
        assert!(menu.activate(MenuAction::OpenInTerminal, &host));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_missing_selection_is_ignored() {
        let menu = menu_with_selection("/srv");
        menu.book().set_current_page(1);
        let host = FakeHost::new();

        assert_eq!(
            menu.dispatch(MenuAction::OpenInNewTab, &host),
            Err(MenuError::NoSelection)
        );
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_no_active_page() {
        let mut menu = Menu::new(FakeBook::default());
        menu.set_current_target(Some(Tab::left(0)));
        let host = FakeHost::new();

        assert_eq!(menu.dispatch(MenuAction::Open, &host), Err(MenuError::NoActivePage));
    }

    #[test]
    fn test_unregistered_plugin() {
        let menu = menu_with_selection("/srv");
        let host = FakeHost::new().without_plugin("system_terminal");

        assert_eq!(
            menu.dispatch(MenuAction::OpenInTerminal, &host),
            Err(MenuError::UnknownPlugin("system_terminal".into()))
        );
    }

    #[test]
    fn test_host_error_is_reported() {
        let menu = menu_with_selection("/srv");
        let host = FakeHost::new();
        host.close(Tab::left(1));

        assert_eq!(
            menu.dispatch(MenuAction::Open, &host),
            Err(MenuError::Host(HostError::TabClosed))
        );
    }

    #[test]
    fn test_opposite_direction_follows_left_pane() {
        let mut menu = menu_with_selection("/srv");
        let host = FakeHost::new();

        assert_eq!(menu.opposite_direction(&host), TravelDirection::Forward);
        assert_eq!(menu.opposite_direction(&host).icon_name(), "go-next-symbolic");

        menu.set_current_target(Some(Tab::right(1)));
        assert_eq!(menu.opposite_direction(&host), TravelDirection::Backward);
        assert_eq!(menu.opposite_direction(&host).icon_name(), "go-previous-symbolic");

        menu.set_current_target(None);
        assert_eq!(menu.opposite_direction(&host), TravelDirection::Backward);
    }

    #[test]
    fn test_replaced_list_is_used_for_selection() {
        let mut menu = menu_with_selection("/srv");
        let replacement = list(&["/opt"]);
        replacement.borrow_mut().select(Some(1));

        let index = menu.add_list("bookmarks", &"Bookmarks", &"bm2", replacement);
        let host = FakeHost::new();

        assert_eq!(index, 0);
        assert_eq!(menu.book().n_pages(), 2);
        assert_eq!(menu.selected_location(), Ok(PathBuf::from("/opt")));
        menu.dispatch(MenuAction::Open, &host).unwrap();
        assert_eq!(host.calls(), vec![HostCall::ChangePath(Tab::left(1), "/opt".into())]);
    }
}
