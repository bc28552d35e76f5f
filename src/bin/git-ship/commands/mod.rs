//! Subcommand implementations.

pub mod build;
pub mod completions;
pub mod config;
pub mod init;
pub mod plugins;
pub mod ship;

use anyhow::{bail, Context, Result};
use git_ship::{Lifecycle, PluginRegistry, ProjectContext};

/// Plugin used when neither the flag nor the config selects one.
const DEFAULT_PLUGIN: &str = "script";

/// Config key naming the plugin that drives the lifecycle.
const PLUGIN_KEY: &str = "plugin";

/// Build a project context rooted at the current directory.
pub(crate) fn project_context() -> Result<ProjectContext> {
    let root = std::env::current_dir().context("failed to get current directory")?;
    Ok(ProjectContext::new(root))
}

/// Construct the plugin selected by flag, config key, or default.
///
/// The config is only consulted when the file exists, so `init` can run in a
/// directory that has no config yet.
pub(crate) fn select_plugin(flag: Option<String>) -> Result<Box<dyn Lifecycle>> {
    let mut ctx = project_context()?;
    let registry = PluginRegistry::new();

    let name = match flag {
        Some(name) => name,
        None if ctx.config_path().exists() => ctx
            .config()?
            .get(PLUGIN_KEY)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PLUGIN.to_string()),
        None => DEFAULT_PLUGIN.to_string(),
    };

    if !registry.contains(&name) {
        let known: Vec<_> = registry.names().collect();
        bail!(
            "unknown plugin `{name}`; known plugins: {}",
            known.join(", ")
        );
    }

    tracing::debug!("selected `{name}` plugin");
    Ok(registry.create(&name, ctx).unwrap())
}
