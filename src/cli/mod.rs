//! CLI module for configstore
//!
//! Provides command-line interface for:
//! - init: Create the configuration file and database schema
//! - start: Boot the store and serve HTTP requests

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, start, Config};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}
