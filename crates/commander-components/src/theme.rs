use gtk4::gdk::Display;
use gtk4::CssProvider;
use tracing::debug;

/// Stylesheet for the commander window and the location menu
pub const COMMANDER_CSS: &str = r#"
/* ========== Panes ========== */

.cm-pane > header {
    background: rgba(255, 255, 255, 0.04);
}

.cm-tab-label {
    padding: 0 2px;
}

.cm-tab-close {
    min-width: 16px;
    min-height: 16px;
    padding: 0;
}

.cm-header {
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}

.cm-nav-button {
    min-width: 28px;
    min-height: 28px;
    padding: 2px;
}

.cm-location-bar {
    font-family: monospace;
}

/* ========== File List ========== */

.cm-file-row {
    padding: 0;
}

.cm-file-name-folder {
    font-weight: bold;
}

.cm-file-size,
.cm-file-date {
    color: rgba(255, 255, 255, 0.55);
    font-size: 0.9em;
}

.cm-status-text {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9em;
}

/* ========== Terminal Tab ========== */

.cm-terminal-title {
    font-size: 1.2em;
    font-weight: bold;
}

/* ========== Location Menu ========== */

.cm-location-menu > contents {
    padding: 4px;
}

.cm-location-group {
    padding-top: 4px;
}

.cm-location-row:hover {
    background: rgba(255, 255, 255, 0.08);
}
"#;

/// Load CSS into the GTK display
pub fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(COMMANDER_CSS);

    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        debug!("CSS theme loaded");
    }
}
