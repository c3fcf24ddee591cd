use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pchat", about = "Terminal chat UI for a local peer-to-peer node")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// WebSocket URL of the local node, overriding the config file
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the TUI shell
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["pchat"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.url, None);
    }

    #[test]
    fn parses_explicit_run_command_with_overrides() {
        let cli = Cli::parse_from([
            "pchat",
            "run",
            "--config",
            "custom.toml",
            "--url",
            "ws://127.0.0.1:9001/ws",
        ]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
        assert_eq!(cli.url.as_deref(), Some("ws://127.0.0.1:9001/ws"));
    }
}
