//! CLI command definitions.
//!
//! The CLI is a thin shell over configuration resolution: flag parsing and
//! exit codes live here and in `main.rs`, nothing else.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release automation: version bumping, changelog generation, commit hooks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (skips the default search)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved settings as JSON
    Show,
    /// Write an empty tool section into a configuration file
    Init {
        /// File to initialize (default: pyproject.toml)
        path: Option<PathBuf>,
    },
    /// Set one configuration key and persist it
    Set {
        /// Setting name (e.g. version)
        key: String,
        /// New value; parsed as JSON when possible, else taken as a string
        value: String,
    },
}
