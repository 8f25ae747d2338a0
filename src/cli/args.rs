//! CLI argument definitions using clap
//!
//! Commands:
//! - employeedb serve [--config <path>] [--host <host>] [--port <port>]
//! - employeedb check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// employeedb - An in-memory employee record service
#[derive(Parser, Debug)]
#[command(name = "employeedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then print it
    CheckConfig {
        /// Path to a JSON configuration file
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
