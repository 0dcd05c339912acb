use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Image, Label, ListBox, ListBoxRow, Orientation as GtkOrientation, Separator,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use commander_core::locations::visible_rows;
use commander_core::{Bookmark, LocationListModel, LocationRow, LocationRowKind, LocationSource};

/// ListBox showing a location list, backed by its row model
#[derive(Clone)]
pub struct LocationListView {
    list: ListBox,
    model: Rc<RefCell<LocationListModel>>,
}

impl LocationListView {
    pub fn new(rows: Vec<LocationRow>) -> Self {
        let list = ListBox::new();
        list.add_css_class("cm-location-list");
        list.set_selection_mode(gtk4::SelectionMode::Single);

        let model = Rc::new(RefCell::new(LocationListModel::default()));
        {
            let model = model.clone();
            list.connect_row_selected(move |_, row| {
                model.borrow_mut().select(row.map(|r| r.index() as usize));
            });
        }

        let view = Self { list, model };
        view.set_rows(rows);
        view
    }

    pub fn widget(&self) -> &ListBox {
        &self.list
    }

    /// Rebuild the rows from scratch
    pub fn set_rows(&self, rows: Vec<LocationRow>) {
        self.model.borrow_mut().set_rows(Vec::new());
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for row in &rows {
            self.list.append(&create_row(row));
        }
        self.model.borrow_mut().set_rows(rows);
    }

    /// Hide rows not matching `query`, unselecting a hidden selection
    pub fn apply_filter(&self, query: &str) {
        let visible = visible_rows(self.model.borrow().rows(), query);
        for (idx, show) in visible.iter().enumerate() {
            if let Some(row) = self.list.row_at_index(idx as i32) {
                row.set_visible(*show);
            }
        }

        let cleared = self.model.borrow_mut().retain_visible_selection(&visible);
        if cleared {
            self.list.unselect_all();
        }
    }

    /// Run `f` when a bookmark row is activated
    pub fn connect_activated(&self, f: impl Fn() + 'static) {
        let model = self.model.clone();
        self.list.connect_row_activated(move |_, row| {
            model.borrow_mut().select(Some(row.index() as usize));
            f();
        });
    }
}

impl LocationSource for LocationListView {
    fn selected_location(&self) -> Option<PathBuf> {
        self.model.selected_location()
    }
}

fn create_row(row: &LocationRow) -> ListBoxRow {
    let widget = match row.kind() {
        LocationRowKind::Separator { title } => create_group_title(title),
        LocationRowKind::Bookmark(bookmark) => create_bookmark_row(bookmark),
    };
    widget.set_selectable(row.is_selectable());
    widget.set_activatable(row.is_activatable());
    widget
}

fn create_group_title(title: &str) -> ListBoxRow {
    let row = ListBoxRow::new();
    row.add_css_class("cm-location-group");

    let container = GtkBox::new(GtkOrientation::Vertical, 0);
    container.set_margin_start(5);
    container.set_margin_end(5);
    container.set_margin_top(5);
    container.set_margin_bottom(5);

    let label = Label::new(None);
    label.set_markup(&format!("<b>{}</b>", glib::markup_escape_text(title)));
    label.set_halign(gtk4::Align::Start);
    container.append(&label);
    container.append(&Separator::new(GtkOrientation::Horizontal));

    row.set_child(Some(&container));
    row
}

fn create_bookmark_row(bookmark: &Bookmark) -> ListBoxRow {
    let row = ListBoxRow::new();
    row.add_css_class("cm-location-row");

    let container = GtkBox::new(GtkOrientation::Horizontal, 5);
    container.set_margin_start(5);
    container.set_margin_end(5);
    container.set_margin_top(5);
    container.set_margin_bottom(5);

    let icon = Image::from_icon_name(bookmark.icon());
    icon.set_pixel_size(24);
    container.append(&icon);

    let titles = GtkBox::new(GtkOrientation::Vertical, 0);
    titles.set_hexpand(true);

    let title = Label::new(Some(bookmark.title()));
    title.set_halign(gtk4::Align::Start);
    titles.append(&title);

    let subtitle = Label::new(None);
    subtitle.set_markup(&format!(
        "<small>{}</small>",
        glib::markup_escape_text(&bookmark.subtitle())
    ));
    subtitle.set_halign(gtk4::Align::Start);
    subtitle.add_css_class("dim-label");
    titles.append(&subtitle);

    container.append(&titles);
    row.set_child(Some(&container));
    row
}
