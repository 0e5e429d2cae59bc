//! Keystone CLI - convention and classpath policy for multi-module builds
//!
//! Usage: keystone <COMMAND>
//!
//! Commands:
//!   check      Configure every module and report failures
//!   plan       Write the build plan as JSON
//!   classpath  Compose the classpath of a packaged test-only module
//!   versions   Show the release version and pinned dependency versions

mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keystone::config::{Config, Verbosity};
use keystone::presentation::{Cli, Commands};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config loading logs unknown-key warnings, so it gets its own subscriber
    // before the configured verbosity is known.
    let bootstrap = subscriber(cli.verbose, Verbosity::Normal);
    let config = tracing::subscriber::with_default(bootstrap, || {
        Config::load_or_default(Some(cli.workspace.as_path()))
    });

    let _ = tracing::subscriber::set_global_default(subscriber(
        cli.verbose,
        config.output.verbosity,
    ));

    let ctx = CommandContext::new(&cli, config);
    match &cli.command {
        Commands::Check => commands::cmd_check(&ctx),
        Commands::Plan { out } => commands::cmd_plan(&ctx, out.as_deref()),
        Commands::Classpath { module } => commands::cmd_classpath(&ctx, module),
        Commands::Versions => commands::cmd_versions(&ctx),
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// both `-v` and the configured verbosity.
fn subscriber(verbose: u8, configured: Verbosity) -> impl tracing::Subscriber + Send + Sync {
    let directive = match verbose {
        0 => configured.filter_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish()
}
