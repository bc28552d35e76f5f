//! git-ship CLI - ship projects with pluggable lifecycles.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Debug toggle: non-empty and not `0` enables debug logging and full error
/// chains instead of the one-line message.
const DEBUG_ENV: &str = "GIT_SHIP_DEBUG";

fn main() {
    if let Err(e) = run() {
        if debug_enabled() {
            eprintln!("git-ship: {e:?}");
        } else {
            eprintln!("git-ship: {e:#}");
        }
        std::process::exit(1);
    }
}

fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false)
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose || debug_enabled() {
        EnvFilter::new("git_ship=debug")
    } else {
        EnvFilter::new("git_ship=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init => commands::init::execute(cli.plugin),
        Commands::Build => commands::build::execute(cli.plugin),
        Commands::Test => commands::test::execute(cli.plugin),
        Commands::Ship => commands::ship::execute(cli.plugin),
        Commands::Config(args) => commands::config::execute(args),
        Commands::Plugins => commands::plugins::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
