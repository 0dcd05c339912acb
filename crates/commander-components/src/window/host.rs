use ahash::AHashMap;
use compact_str::CompactString;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, Box as GtkBox, Button, Label, Orientation as GtkOrientation,
    Paned,
};
use parking_lot::RwLock;
use std::cell::Cell;
use std::path::Path;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use commander_core::locations::{default_bookmarks, default_mounts};
use commander_core::{
    CommanderCommand, CommanderEvent, CommanderSettings, HostError, PaneHost, TabOptions,
};
use crate::file_list::FileListTab;
use crate::location_menu::{LocationListView, LocationMenuWidget};
use crate::terminal::TerminalTab;
use super::pane::{Pane, Side, TabContent, TabHandle, TabPlugin};

const WINDOW_WIDTH: i32 = 1100;
const WINDOW_HEIGHT: i32 = 700;

/// Dual-pane main window
pub struct CommanderWindow {
    window: ApplicationWindow,
    left: Pane,
    right: Pane,
    settings: Arc<RwLock<CommanderSettings>>,
    command_tx: mpsc::Sender<CommanderCommand>,
    plugins: AHashMap<CompactString, TabPlugin>,
    menu: LocationMenuWidget<CommanderWindow>,
    focused: Cell<Side>,
    next_id: Cell<u64>,
    this: Weak<CommanderWindow>,
}

impl CommanderWindow {
    pub fn new(
        app: &Application,
        settings: Arc<RwLock<CommanderSettings>>,
        command_tx: mpsc::Sender<CommanderCommand>,
    ) -> Rc<Self> {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Raven Commander")
            .default_width(WINDOW_WIDTH)
            .default_height(WINDOW_HEIGHT)
            .build();
        window.add_css_class("cm-window");

        let left = Pane::new(Side::Left);
        let right = Pane::new(Side::Right);

        let paned = Paned::new(GtkOrientation::Horizontal);
        paned.set_start_child(Some(left.notebook()));
        paned.set_end_child(Some(right.notebook()));
        paned.set_position(WINDOW_WIDTH / 2);
        paned.set_resize_start_child(true);
        paned.set_resize_end_child(true);
        window.set_child(Some(&paned));

        let plugins = TabPlugin::ALL
            .iter()
            .map(|p| (CompactString::from(p.name()), *p))
            .collect();

        let list_height = settings.read().list_height;

        let this = Rc::new_cyclic(|weak: &Weak<CommanderWindow>| Self {
            window,
            left,
            right,
            settings,
            command_tx,
            plugins,
            menu: LocationMenuWidget::new(weak.clone(), list_height),
            focused: Cell::new(Side::Left),
            next_id: Cell::new(1),
            this: weak.clone(),
        });

        this.menu
            .add_list("bookmarks", "Bookmarks", LocationListView::new(default_bookmarks()));
        this.menu
            .add_list("mounts", "Mounts", LocationListView::new(default_mounts()));

        this.connect_focus_tracking();
        this.setup_keyboard_shortcuts();
        this.open_start_tabs();
        this
    }

    pub fn present(&self) {
        self.window.present();
    }

    fn pane(&self, side: Side) -> &Pane {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn resolve(&self, handle: &TabHandle) -> Option<TabContent> {
        self.pane(handle.side).tab(handle.id)
    }

    fn open_start_tabs(&self) {
        for side in [Side::Left, Side::Right] {
            let path = self.settings.read().start_path(side == Side::Left);
            if let Err(e) = self.open_tab(side, TabPlugin::FileList, &path) {
                warn!("Cannot open {:?} in {:?} pane: {}", path, side, e);
            }
        }
    }

    fn connect_focus_tracking(&self) {
        for side in [Side::Left, Side::Right] {
            let notebook = self.pane(side).notebook();

            let weak = self.this.clone();
            notebook.connect_switch_page(move |_, _, _| {
                if let Some(window) = weak.upgrade() {
                    window.focused.set(side);
                }
            });

            let click = gtk4::GestureClick::new();
            click.set_propagation_phase(gtk4::PropagationPhase::Capture);
            let weak = self.this.clone();
            click.connect_pressed(move |_, _, _, _| {
                if let Some(window) = weak.upgrade() {
                    window.focused.set(side);
                }
            });
            notebook.add_controller(click);
        }
    }

    fn setup_keyboard_shortcuts(&self) {
        let key_controller = gtk4::EventControllerKey::new();
        let weak = self.this.clone();

        key_controller.connect_key_pressed(move |_, key, _, modifier| {
            let Some(window) = weak.upgrade() else {
                return glib::Propagation::Proceed;
            };
            let ctrl = modifier.contains(gtk4::gdk::ModifierType::CONTROL_MASK);
            let alt = modifier.contains(gtk4::gdk::ModifierType::ALT_MASK);

            match key {
                gtk4::gdk::Key::_1 if alt => {
                    window.focus_side(Side::Left);
                    glib::Propagation::Stop
                }
                gtk4::gdk::Key::_2 if alt => {
                    window.focus_side(Side::Right);
                    glib::Propagation::Stop
                }
                gtk4::gdk::Key::b if ctrl => {
                    window.show_menu_for_focused();
                    glib::Propagation::Stop
                }
                gtk4::gdk::Key::t if ctrl => {
                    window.open_terminal_for_focused();
                    glib::Propagation::Stop
                }
                gtk4::gdk::Key::w if ctrl => {
                    if let Some(handle) = window.pane(window.focused.get()).active_handle() {
                        window.close_tab(handle);
                    }
                    glib::Propagation::Stop
                }
                _ => glib::Propagation::Proceed,
            }
        });

        self.window.add_controller(key_controller);
    }

    fn focus_side(&self, side: Side) {
        self.focused.set(side);
        self.pane(side).notebook().grab_focus();
    }

    /// Show the location menu for the active tab of the focused pane
    fn show_menu_for_focused(&self) {
        let Some(handle) = self.pane(self.focused.get()).active_handle() else {
            return;
        };
        if let Some(TabContent::FileList(tab)) = self.resolve(&handle) {
            self.menu.set_current_target(Some(handle));
            self.menu.show(tab.locations_button());
        }
    }

    fn open_terminal_for_focused(&self) {
        let side = self.focused.get();
        let cwd = self
            .pane(side)
            .active_handle()
            .and_then(|h| self.resolve(&h))
            .and_then(|content| match content {
                TabContent::FileList(tab) => tab.current_path(),
                TabContent::Terminal(tab) => Some(tab.cwd().to_path_buf()),
            });
        if let Some(cwd) = cwd {
            if let Err(e) = self.open_tab(side, TabPlugin::Terminal, &cwd) {
                warn!("Cannot open terminal: {}", e);
            }
        }
    }

    /// Create a tab of `plugin` class in the pane on `side`
    pub fn open_tab(
        &self,
        side: Side,
        plugin: TabPlugin,
        path: &Path,
    ) -> Result<TabHandle, HostError> {
        let id = self.next_id.get();
        let handle = TabHandle { side, id };

        let (content, label) = match plugin {
            TabPlugin::FileList => {
                let show_hidden = self.settings.read().show_hidden;
                let tab = FileListTab::new(path, show_hidden, self.command_tx.clone())?;
                self.connect_locations_button(&tab, handle);
                let label = tab.tab_label().clone();
                (TabContent::FileList(tab), label)
            }
            TabPlugin::Terminal => {
                if !path.is_dir() {
                    return Err(HostError::NotADirectory(path.to_path_buf()));
                }
                let candidates = self
                    .settings
                    .read()
                    .terminal_candidates()
                    .into_iter()
                    .map(CompactString::from)
                    .collect();
                let tab = TerminalTab::new(id, path, candidates, self.command_tx.clone());
                let label = tab.tab_label().clone();
                (TabContent::Terminal(tab), label)
            }
        };

        self.next_id.set(id + 1);
        let tab_label = self.create_tab_label(&label, handle);
        self.pane(side).add_tab(id, content, &tab_label);
        self.focused.set(side);

        debug!("Opened {} tab {} in {:?} pane", plugin.name(), id, side);
        Ok(handle)
    }

    fn connect_locations_button(&self, tab: &FileListTab, handle: TabHandle) {
        let weak = self.this.clone();
        tab.locations_button().connect_clicked(move |button| {
            if let Some(window) = weak.upgrade() {
                window.focused.set(handle.side);
                window.menu.set_current_target(Some(handle));
                window.menu.show(button);
            }
        });
    }

    fn create_tab_label(&self, label: &Label, handle: TabHandle) -> GtkBox {
        let container = GtkBox::new(GtkOrientation::Horizontal, 4);
        container.add_css_class("cm-tab-label");
        container.append(label);

        let close = Button::from_icon_name("window-close-symbolic");
        close.add_css_class("flat");
        close.add_css_class("cm-tab-close");
        close.set_tooltip_text(Some("Close Tab"));

        let weak = self.this.clone();
        close.connect_clicked(move |_| {
            if let Some(window) = weak.upgrade() {
                window.close_tab(handle);
            }
        });
        container.append(&close);
        container
    }

    /// Close a tab; the last tab of a pane is kept
    pub fn close_tab(&self, handle: TabHandle) {
        let pane = self.pane(handle.side);
        if pane.tab_count() <= 1 {
            debug!("Keeping last tab of {:?} pane", handle.side);
            return;
        }

        if let Some(content) = pane.remove_tab(handle.id) {
            self.menu.detach_from(&content.root());
            if self.menu.current_target() == Some(handle) {
                self.menu.set_current_target(None);
            }
            debug!("Closed tab {} in {:?} pane", handle.id, handle.side);
        }
    }

    /// Apply an event from the async services
    pub fn handle_event(&self, event: &CommanderEvent) {
        match event {
            CommanderEvent::TerminalLaunched { tab, command } => {
                if let Some(terminal) = self.find_terminal(*tab) {
                    terminal.set_launched(command);
                }
            }
            CommanderEvent::TerminalFailed { tab, error } => {
                warn!("Terminal for tab {} failed: {}", tab, error);
                if let Some(terminal) = self.find_terminal(*tab) {
                    terminal.set_failed(error);
                }
            }
        }
    }

    fn find_terminal(&self, id: u64) -> Option<TerminalTab> {
        self.left.terminal(id).or_else(|| self.right.terminal(id))
    }
}

impl PaneHost for CommanderWindow {
    type Target = TabHandle;
    type Plugin = TabPlugin;

    fn left_target(&self) -> Option<TabHandle> {
        self.left.active_handle()
    }

    fn opposite_target(&self, target: &TabHandle) -> Option<TabHandle> {
        self.pane(target.side.opposite()).active_handle()
    }

    fn supports_navigation(&self, target: &TabHandle) -> bool {
        matches!(self.resolve(target), Some(TabContent::FileList(_)))
    }

    fn change_path(&self, target: &TabHandle, path: &Path) -> Result<(), HostError> {
        match self.resolve(target) {
            Some(TabContent::FileList(tab)) => tab.change_path(path),
            Some(TabContent::Terminal(_)) => Err(HostError::NotNavigable),
            None => Err(HostError::TabClosed),
        }
    }

    fn plugin(&self, name: &str) -> Option<TabPlugin> {
        self.plugins.get(name).copied()
    }

    fn create_tab(
        &self,
        beside: &TabHandle,
        plugin: &TabPlugin,
        options: TabOptions,
    ) -> Result<(), HostError> {
        if self.resolve(beside).is_none() {
            return Err(HostError::TabClosed);
        }
        let path = options
            .path()
            .ok_or_else(|| HostError::InvalidOptions("missing 'path'".to_string()))?;
        self.open_tab(beside.side, *plugin, &path).map(|_| ())
    }
}
