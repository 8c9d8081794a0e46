//! CLI argument definitions using clap
//!
//! Commands:
//! - bookmarks serve [--config <path>] [--port <n>]
//! - bookmarks check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookmarks - an authenticated CRUD service for bookmark records
#[derive(Parser, Debug)]
#[command(name = "bookmarks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration and exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["bookmarks", "serve", "--config", "b.json", "--port", "9000"]);
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, Some(PathBuf::from("b.json")));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config_without_file() {
        let cli = Cli::parse_from(["bookmarks", "check-config"]);
        assert!(matches!(cli.command, Command::CheckConfig { config: None }));
    }
}
