//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// git-ship - ship projects with pluggable lifecycles
#[derive(Parser)]
#[command(name = "git-ship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Plugin driving the lifecycle (defaults to the config `plugin` key)
    #[arg(long, global = true)]
    pub plugin: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Populate the config with derived project metadata
    Init,

    /// Build the project
    Build,

    /// Run the project's tests
    Test,

    /// Publish the project
    Ship,

    /// Show the resolved configuration
    Config(ConfigArgs),

    /// List available plugins
    Plugins,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Emit JSON instead of `key = value` lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
