//! Process arguments.
//!
//! All configuration is positional and read once at startup; there are no
//! environment variables and no config file. One subcommand per serving mode.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "imdsmock", about = "Mock EC2 instance-metadata service for integration tests")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Serve fixture metadata plus a scenario directory.
    Scenario {
        /// Listen port.
        #[arg(default_value_t = 8080)]
        port: u16,
        /// Directory holding the scenario fixture trees.
        #[arg(default_value = "scenarios")]
        scenarios_dir: PathBuf,
        /// Scenario name (subdirectory of the scenarios dir).
        #[arg(default_value = "basic-boot")]
        scenario: String,
        /// Number of network interfaces to emulate.
        #[arg(default_value_t = 1)]
        nic_count: usize,
    },
    /// Mirror a directory tree 1:1 onto URL paths.
    Tree {
        /// Root directory to serve.
        root: PathBuf,
        /// Listen port.
        #[arg(default_value_t = 8080)]
        port: u16,
        /// Bind address.
        #[arg(default_value = "0.0.0.0")]
        host: IpAddr,
    },
}
