use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, Entry, Image, Label, ListBox, ListBoxRow,
    Orientation as GtkOrientation, ScrolledWindow,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use commander_core::{CommanderCommand, HostError};
use super::navigation::History;
use super::types::{self, FileEntry};

struct FileListState {
    history: History,
    entries: Vec<FileEntry>,
    show_hidden: bool,
}

struct Inner {
    root: GtkBox,
    tab_label: Label,
    location_entry: Entry,
    locations_button: Button,
    back_btn: Button,
    forward_btn: Button,
    up_btn: Button,
    list: ListBox,
    status: Label,
    state: RefCell<FileListState>,
    command_tx: mpsc::Sender<CommanderCommand>,
}

/// Directory listing tab (the `file_list` plugin)
#[derive(Clone)]
pub struct FileListTab {
    inner: Rc<Inner>,
}

impl FileListTab {
    pub fn new(
        path: &Path,
        show_hidden: bool,
        command_tx: mpsc::Sender<CommanderCommand>,
    ) -> Result<Self, HostError> {
        let root = GtkBox::new(GtkOrientation::Vertical, 0);
        root.add_css_class("cm-file-list-tab");
        root.set_hexpand(true);
        root.set_vexpand(true);

        let header = GtkBox::new(GtkOrientation::Horizontal, 4);
        header.add_css_class("cm-header");
        header.set_margin_start(6);
        header.set_margin_end(6);
        header.set_margin_top(6);
        header.set_margin_bottom(6);

        let back_btn = nav_button("go-previous-symbolic", "Back");
        let forward_btn = nav_button("go-next-symbolic", "Forward");
        let up_btn = nav_button("go-up-symbolic", "Parent Directory");
        header.append(&back_btn);
        header.append(&forward_btn);
        header.append(&up_btn);

        let location_entry = Entry::new();
        location_entry.add_css_class("cm-location-bar");
        location_entry.set_hexpand(true);
        location_entry.set_placeholder_text(Some("Enter path..."));
        header.append(&location_entry);

        let locations_button = nav_button("user-bookmarks-symbolic", "Locations");
        header.append(&locations_button);
        root.append(&header);

        let scroll = ScrolledWindow::new();
        scroll.set_policy(gtk4::PolicyType::Automatic, gtk4::PolicyType::Automatic);
        scroll.set_vexpand(true);

        let list = ListBox::new();
        list.add_css_class("cm-file-list");
        list.set_selection_mode(gtk4::SelectionMode::Single);
        list.set_activate_on_single_click(false);
        scroll.set_child(Some(&list));
        root.append(&scroll);

        let status = Label::new(None);
        status.add_css_class("cm-status-text");
        status.set_halign(gtk4::Align::Start);
        status.set_margin_start(8);
        status.set_margin_top(2);
        status.set_margin_bottom(2);
        root.append(&status);

        let inner = Rc::new(Inner {
            root,
            tab_label: Label::new(None),
            location_entry,
            locations_button,
            back_btn,
            forward_btn,
            up_btn,
            list,
            status,
            state: RefCell::new(FileListState {
                history: History::new(),
                entries: Vec::new(),
                show_hidden,
            }),
            command_tx,
        });

        Self::connect_signals(&inner);
        inner.navigate(path)?;

        Ok(Self { inner })
    }

    fn connect_signals(inner: &Rc<Inner>) {
        let weak = Rc::downgrade(inner);
        inner.back_btn.connect_clicked(move |_| {
            with_inner(&weak, Inner::go_back);
        });

        let weak = Rc::downgrade(inner);
        inner.forward_btn.connect_clicked(move |_| {
            with_inner(&weak, Inner::go_forward);
        });

        let weak = Rc::downgrade(inner);
        inner.up_btn.connect_clicked(move |_| {
            with_inner(&weak, Inner::go_up);
        });

        let weak = Rc::downgrade(inner);
        inner.location_entry.connect_activate(move |entry| {
            let path = PathBuf::from(entry.text().as_str());
            with_inner(&weak, |inner| {
                if let Err(e) = inner.navigate(&path) {
                    warn!("Cannot open location: {}", e);
                }
            });
        });

        let weak = Rc::downgrade(inner);
        inner.list.connect_row_activated(move |_, row| {
            let idx = row.index() as usize;
            with_inner(&weak, |inner| inner.activate_entry(idx));
        });
    }

    pub fn root(&self) -> &GtkBox {
        &self.inner.root
    }

    /// Label shown in the notebook tab
    pub fn tab_label(&self) -> &Label {
        &self.inner.tab_label
    }

    /// Button that opens the location menu for this tab
    pub fn locations_button(&self) -> &Button {
        &self.inner.locations_button
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.inner.state.borrow().history.current().map(Path::to_path_buf)
    }

    pub fn change_path(&self, path: &Path) -> Result<(), HostError> {
        self.inner.navigate(path)
    }
}

impl Inner {
    /// Load `path` and record it in history
    fn navigate(&self, path: &Path) -> Result<(), HostError> {
        self.load(path)?;
        self.state.borrow_mut().history.visit(path);
        self.update_nav_buttons();
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<(), HostError> {
        let show_hidden = self.state.borrow().show_hidden;
        let entries = types::read_directory(path, show_hidden).map_err(|e| {
            debug!("Failed to read {:?}: {}", path, e);
            HostError::NotADirectory(path.to_path_buf())
        })?;

        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for entry in &entries {
            self.list.append(&create_file_row(entry));
        }

        let count = entries.len();
        self.state.borrow_mut().entries = entries;

        self.location_entry.set_text(&path.to_string_lossy());
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        self.tab_label.set_text(&title);
        self.tab_label.set_tooltip_text(Some(&path.to_string_lossy()));
        self.status.set_text(&if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        });

        debug!("Loaded {:?} ({} entries)", path, count);
        Ok(())
    }

    // History only moves once the directory has loaded

    fn go_back(&self) {
        let prev = self.state.borrow().history.peek_back().map(Path::to_path_buf);
        if let Some(path) = prev {
            match self.load(&path) {
                Ok(()) => {
                    self.state.borrow_mut().history.back();
                }
                Err(e) => warn!("Cannot go back: {}", e),
            }
        }
        self.update_nav_buttons();
    }

    fn go_forward(&self) {
        let next = self.state.borrow().history.peek_forward().map(Path::to_path_buf);
        if let Some(path) = next {
            match self.load(&path) {
                Ok(()) => {
                    self.state.borrow_mut().history.forward();
                }
                Err(e) => warn!("Cannot go forward: {}", e),
            }
        }
        self.update_nav_buttons();
    }

    fn go_up(&self) {
        let parent = self
            .state
            .borrow()
            .history
            .current()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        if let Some(parent) = parent {
            if let Err(e) = self.navigate(&parent) {
                warn!("Cannot go up: {}", e);
            }
        }
    }

    fn activate_entry(&self, idx: usize) {
        let entry = self.state.borrow().entries.get(idx).cloned();
        let Some(entry) = entry else {
            return;
        };

        if entry.is_dir {
            if let Err(e) = self.navigate(&entry.path) {
                warn!("Cannot open directory: {}", e);
            }
        } else {
            let tx = self.command_tx.clone();
            glib::spawn_future_local(async move {
                let _ = tx.send(CommanderCommand::OpenFile(entry.path)).await;
            });
        }
    }

    fn update_nav_buttons(&self) {
        let state = self.state.borrow();
        self.back_btn.set_sensitive(state.history.can_go_back());
        self.forward_btn.set_sensitive(state.history.can_go_forward());
        self.up_btn
            .set_sensitive(state.history.current().and_then(Path::parent).is_some());
    }
}

fn with_inner(weak: &Weak<Inner>, f: impl FnOnce(&Inner)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

fn nav_button(icon: &str, tooltip: &str) -> Button {
    let button = Button::from_icon_name(icon);
    button.add_css_class("cm-nav-button");
    button.set_tooltip_text(Some(tooltip));
    button
}

fn create_file_row(entry: &FileEntry) -> ListBoxRow {
    let row = ListBoxRow::new();
    row.add_css_class("cm-file-row");
    row.set_activatable(true);

    let hbox = GtkBox::new(GtkOrientation::Horizontal, 8);
    hbox.set_margin_start(8);
    hbox.set_margin_end(8);
    hbox.set_margin_top(4);
    hbox.set_margin_bottom(4);

    let icon = Image::from_icon_name(types::icon_for(entry));
    icon.set_pixel_size(16);
    hbox.append(&icon);

    let name = Label::new(Some(&entry.name));
    name.add_css_class("cm-file-name");
    if entry.is_dir {
        name.add_css_class("cm-file-name-folder");
    }
    if entry.is_hidden {
        name.set_opacity(0.6);
    }
    name.set_halign(gtk4::Align::Start);
    name.set_hexpand(true);
    name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    hbox.append(&name);

    if !entry.is_dir {
        let size = Label::new(Some(&types::humanize_size(entry.size)));
        size.add_css_class("cm-file-size");
        size.set_width_chars(10);
        hbox.append(&size);
    }

    let date = Label::new(Some(&types::format_date(entry.mod_time)));
    date.add_css_class("cm-file-date");
    date.set_width_chars(16);
    hbox.append(&date);

    row.set_child(Some(&hbox));
    row
}
