use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default cell width for catalog snapshots.
pub const DEFAULT_SNAPSHOT_WIDTH: u16 = 16;

#[derive(Parser, Debug)]
#[command(name = "like-counter", version, about = "A heart icon that counts your clicks")]
pub struct Cli {
    /// Path to config.toml (default: the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive counter (default)
    Run,
    /// Print the like button catalog
    Catalog {
        /// Print only this entry
        #[arg(long, value_name = "NAME")]
        entry: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Snapshot width in terminal cells
        #[arg(long, default_value_t = DEFAULT_SNAPSHOT_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
        width: u16,
    },
}

impl Cli {
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_interactive() {
        let cli = Cli::parse_from(["like-counter"]);
        assert_eq!(cli.effective_command(), Command::Run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn catalog_flags_parse() {
        let cli = Cli::parse_from([
            "like-counter",
            "catalog",
            "--entry",
            "1",
            "--json",
            "--config",
            "/tmp/c.toml",
        ]);
        assert_eq!(
            cli.effective_command(),
            Command::Catalog {
                entry: Some("1".to_string()),
                json: true,
                width: DEFAULT_SNAPSHOT_WIDTH,
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["like-counter", "catalog", "--width", "0"]).is_err());
    }
}
