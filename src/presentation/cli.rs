//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --workspace, --release-version) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keystone - convention and classpath policy for multi-module builds
#[derive(Parser, Debug)]
#[command(name = "keystone")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events, then a JSON result)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Workspace root containing keystone.toml
    #[arg(short, long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Release version applied to every module (overrides the manifest)
    #[arg(long, global = true)]
    pub release_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure every module and report failures
    Check,

    /// Configure the workspace and write the build plan as JSON
    Plan {
        /// Output file (defaults to the configured plan file)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compose the classpath of a packaged test-only module
    Classpath {
        /// Module name
        module: String,
    },

    /// Show the release version and the registered dependency versions
    Versions,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Check => "check",
            Commands::Plan { .. } => "plan",
            Commands::Classpath { .. } => "classpath",
            Commands::Versions => "versions",
        }
    }
}
