//! CLI module for employeedb
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP server until Ctrl+C
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, load_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
