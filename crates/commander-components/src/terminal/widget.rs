use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Image, Label, Orientation as GtkOrientation};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::debug;

use commander_core::CommanderCommand;

/// Tab standing in for a terminal (the `system_terminal` plugin).
///
/// The terminal emulator runs as its own window; the tab shows where it was
/// started and lets the user start it again.
#[derive(Clone)]
pub struct TerminalTab {
    id: u64,
    cwd: PathBuf,
    root: GtkBox,
    tab_label: Label,
    status: Label,
}

impl TerminalTab {
    pub fn new(
        id: u64,
        cwd: &Path,
        candidates: Vec<CompactString>,
        command_tx: mpsc::Sender<CommanderCommand>,
    ) -> Self {
        let root = GtkBox::new(GtkOrientation::Vertical, 12);
        root.add_css_class("cm-terminal-tab");
        root.set_valign(gtk4::Align::Center);
        root.set_halign(gtk4::Align::Center);
        root.set_vexpand(true);

        let icon = Image::from_icon_name("utilities-terminal-symbolic");
        icon.set_pixel_size(48);
        root.append(&icon);

        let title = Label::new(Some(&format!("Terminal at {}", cwd.display())));
        title.add_css_class("cm-terminal-title");
        root.append(&title);

        let status = Label::new(Some("Starting terminal..."));
        status.add_css_class("cm-status-text");
        root.append(&status);

        let relaunch = Button::with_label("Launch Again");
        relaunch.set_halign(gtk4::Align::Center);
        root.append(&relaunch);

        let tab_label = Label::new(Some(&format!(
            "Terminal: {}",
            cwd.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| cwd.to_string_lossy().into_owned())
        )));

        let launch = {
            let cwd = cwd.to_path_buf();
            move || {
                let tx = command_tx.clone();
                let cmd = CommanderCommand::LaunchTerminal {
                    tab: id,
                    cwd: cwd.clone(),
                    candidates: candidates.clone(),
                };
                glib::spawn_future_local(async move {
                    let _ = tx.send(cmd).await;
                });
            }
        };
        launch();

        {
            let status = status.clone();
            relaunch.connect_clicked(move |_| {
                status.set_text("Starting terminal...");
                launch();
            });
        }

        Self {
            id,
            cwd: cwd.to_path_buf(),
            root,
            tab_label,
            status,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn root(&self) -> &GtkBox {
        &self.root
    }

    pub fn tab_label(&self) -> &Label {
        &self.tab_label
    }

    pub fn set_launched(&self, command: &str) {
        debug!("Terminal tab {} running '{}'", self.id, command);
        self.status.set_text(&format!("Running {}", command));
    }

    pub fn set_failed(&self, error: &str) {
        self.status.set_text(&format!("Could not start a terminal: {}", error));
    }
}
