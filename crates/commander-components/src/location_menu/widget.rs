use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, Label, Orientation as GtkOrientation, Popover, PositionType,
    ScrolledWindow, SearchEntry, Widget,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

use commander_core::{LocationMenu, MenuAction, PaneHost};
use super::{LocationListView, NotebookBook};

type MenuState<H> = LocationMenu<NotebookBook, LocationListView, <H as PaneHost>::Target>;

/// Popover listing bookmarks and mounts with open/tab/opposite/terminal
/// buttons.
///
/// The host is held weakly and upgraded per click; the menu never keeps a
/// pane alive.
pub struct LocationMenuWidget<H: PaneHost + 'static> {
    popover: Popover,
    search: SearchEntry,
    opposite_button: Button,
    list_height: i32,
    state: Rc<RefCell<MenuState<H>>>,
    host: Weak<H>,
}

impl<H> LocationMenuWidget<H>
where
    H: PaneHost + 'static,
    H::Target: 'static,
{
    pub fn new(host: Weak<H>, list_height: i32) -> Self {
        let popover = Popover::new();
        popover.set_position(PositionType::Bottom);
        popover.add_css_class("cm-location-menu");

        let container = GtkBox::new(GtkOrientation::Vertical, 5);
        container.set_margin_start(5);
        container.set_margin_end(5);
        container.set_margin_top(5);
        container.set_margin_bottom(5);

        let search = SearchEntry::new();
        search.set_placeholder_text(Some("Filter locations"));
        container.append(&search);

        let book = NotebookBook::new();
        container.append(book.widget());

        let buttons = GtkBox::new(GtkOrientation::Horizontal, 0);
        buttons.add_css_class("linked");
        buttons.set_halign(gtk4::Align::Center);
        container.append(&buttons);

        popover.set_child(Some(&container));

        let state = Rc::new(RefCell::new(LocationMenu::new(book)));
        let mut opposite_button = Button::new();

        for action in MenuAction::ALL {
            let button = Button::from_icon_name(action.icon_name());
            button.set_tooltip_text(Some(action.tooltip()));
            buttons.append(&button);

            let state = state.clone();
            let host = host.clone();
            let popover = popover.clone();
            button.connect_clicked(move |_| {
                Self::run_action(&state, &host, &popover, action);
            });

            if action == MenuAction::OpenInOpposite {
                opposite_button = button;
            }
        }

        {
            let state = state.clone();
            search.connect_search_changed(move |entry| {
                let query = entry.text();
                for list in state.borrow().pages().lists() {
                    list.apply_filter(query.as_str());
                }
            });
        }

        Self {
            popover,
            search,
            opposite_button,
            list_height,
            state,
            host,
        }
    }

    fn run_action(
        state: &Rc<RefCell<MenuState<H>>>,
        host: &Weak<H>,
        popover: &Popover,
        action: MenuAction,
    ) {
        // The host must not touch the menu state while an action runs
        if let Some(host) = host.upgrade() {
            state.borrow().activate(action, &*host);
        } else {
            debug!("Location menu host is gone, ignoring {:?}", action);
        }
        popover.popdown();
    }

    /// Add list control with specified name to the notebook, replacing any
    /// list already registered under that name.
    pub fn add_list(&self, name: &str, title: &str, list: LocationListView) -> u32 {
        let container = ScrolledWindow::new();
        container.set_policy(gtk4::PolicyType::Automatic, gtk4::PolicyType::Always);
        container.set_min_content_height(self.list_height);
        container.set_child(Some(list.widget()));

        {
            let state = Rc::downgrade(&self.state);
            let host = self.host.clone();
            let popover = self.popover.clone();
            list.connect_activated(move || {
                if let Some(state) = state.upgrade() {
                    Self::run_action(&state, &host, &popover, MenuAction::Open);
                }
            });
        }

        let label = Label::new(Some(title));
        self.state.borrow_mut().add_list(
            name,
            label.upcast_ref::<Widget>(),
            container.upcast_ref::<Widget>(),
            list,
        )
    }

    /// Set the pane used as default target for path changes
    pub fn set_current_target(&self, target: Option<H::Target>) {
        self.state.borrow_mut().set_current_target(target);
    }

    pub fn current_target(&self) -> Option<H::Target> {
        self.state.borrow().current_target().cloned()
    }

    /// Show the menu anchored to `reference`
    pub fn show(&self, reference: &impl IsA<Widget>) {
        if let Some(host) = self.host.upgrade() {
            let direction = self.state.borrow().opposite_direction(&*host);
            self.opposite_button.set_icon_name(direction.icon_name());
        }

        let reference = reference.upcast_ref::<Widget>();
        if self.popover.parent().as_ref() != Some(reference) {
            if self.popover.parent().is_some() {
                self.popover.unparent();
            }
            self.popover.set_parent(reference);
        }

        self.search.set_text("");
        self.popover.popup();
    }

    /// Release the popover if it is anchored inside `widget`, which is about
    /// to be destroyed
    pub fn detach_from(&self, widget: &impl IsA<Widget>) {
        let widget = widget.upcast_ref::<Widget>();
        if let Some(parent) = self.popover.parent() {
            if parent == *widget || parent.is_ancestor(widget) {
                self.popover.popdown();
                self.popover.unparent();
            }
        }
    }
}

impl<H: PaneHost + 'static> Drop for LocationMenuWidget<H> {
    fn drop(&mut self) {
        if self.popover.parent().is_some() {
            self.popover.unparent();
        }
    }
}
