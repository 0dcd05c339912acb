mod book;
mod rows;
mod widget;

pub use book::NotebookBook;
pub use rows::LocationListView;
pub use widget::LocationMenuWidget;
