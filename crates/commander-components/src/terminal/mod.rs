mod widget;

pub use widget::TerminalTab;
