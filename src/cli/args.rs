//! CLI argument definitions using clap
//!
//! Commands:
//! - configstore init --config <path>
//! - configstore start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// configstore - a network-accessible key/value configuration store
#[derive(Parser, Debug)]
#[command(name = "configstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configuration file and database schema
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./configstore.json")]
        config: PathBuf,
    },

    /// Start the configuration store HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./configstore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
