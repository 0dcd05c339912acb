mod app;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "raven-commander")]
#[command(about = "Dual-pane file manager for Raven Linux")]
#[command(version)]
pub struct Cli {
    /// Start directory of the left pane
    #[arg(long, value_name = "DIR")]
    pub left: Option<PathBuf>,

    /// Start directory of the right pane
    #[arg(long, value_name = "DIR")]
    pub right: Option<PathBuf>,

    /// Settings file (default: ~/.config/raven/commander.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show hidden files
    #[arg(long)]
    pub show_hidden: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("raven_commander=info".parse()?)
                .add_directive("commander_core=info".parse()?)
                .add_directive("commander_components=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting Raven Commander");
    app::run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pane_directories() {
        let cli = Cli::parse_from(["raven-commander", "--left", "/tmp", "--right", "/usr"]);
        assert_eq!(cli.left, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.right, Some(PathBuf::from("/usr")));
        assert!(cli.config.is_none());
        assert!(!cli.show_hidden);
    }

    #[test]
    fn test_parse_config_and_hidden() {
        let cli = Cli::parse_from([
            "raven-commander",
            "--config",
            "/etc/raven/commander.json",
            "--show-hidden",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/raven/commander.json")));
        assert!(cli.show_hidden);
    }
}
