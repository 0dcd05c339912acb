use parking_lot::RwLock;
use std::sync::Arc;

use gtk4::prelude::*;
use gtk4::Application;
use tracing::info;

use commander_components::{load_css, CommanderWindow};
use commander_core::{CommanderSettings, ConfigPaths, ServiceHub};

use crate::Cli;

const APP_ID: &str = "org.ravenlinux.commander";

/// Settings file values with command line overrides applied
fn resolve_settings(cli: &Cli, paths: &ConfigPaths) -> CommanderSettings {
    let mut settings = CommanderSettings::load(&paths.settings);
    if let Some(left) = &cli.left {
        settings.left_path = Some(left.clone());
    }
    if let Some(right) = &cli.right {
        settings.right_path = Some(right.clone());
    }
    if cli.show_hidden {
        settings.show_hidden = true;
    }
    settings
}

/// Run the commander window until it is closed
pub fn run(cli: Cli) -> anyhow::Result<()> {
    // Create service hub (starts tokio runtime and services)
    let services = Arc::new(ServiceHub::new()?);
    let _guard = services.enter_runtime();

    // Load configuration
    let paths = cli
        .config
        .clone()
        .map(ConfigPaths::with_settings)
        .unwrap_or_default();
    let settings = resolve_settings(&cli, &paths);
    info!("Using settings from {:?}", paths.settings);
    let config = Arc::new(RwLock::new(settings));

    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gtk4::gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let services_clone = services.clone();

    app.connect_activate(move |app| {
        load_css();

        let window = CommanderWindow::new(app, config.clone(), services_clone.command_sender());
        window.present();

        // Route service events to the window
        let event_rx = services_clone.event_receiver();
        glib::spawn_future_local(async move {
            while let Ok(event) = event_rx.recv().await {
                window.handle_event(&event);
            }
        });

        info!("Raven Commander activated");
    });

    // Command line arguments are ours, not GTK's
    let exit_code = app.run_with_args::<&str>(&[]);

    info!("Raven Commander exiting");

    std::process::exit(exit_code.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commander.json");
        std::fs::write(&path, r#"{"left_path": "/srv", "list_height": 200}"#).unwrap();

        let cli = Cli::parse_from(["raven-commander", "--right", "/tmp", "--show-hidden"]);
        let settings = resolve_settings(&cli, &ConfigPaths::with_settings(path));

        assert_eq!(settings.left_path, Some("/srv".into()));
        assert_eq!(settings.right_path, Some("/tmp".into()));
        assert_eq!(settings.list_height, 200);
        assert!(settings.show_hidden);
    }
}
