//! `git-ship init` command

use anyhow::{Context, Result};

pub fn execute(plugin: Option<String>) -> Result<()> {
    // Seed a minimal config so a fresh directory can be initialized; the
    // plugin's `init` then merges the derived defaults into it.
    let ctx = super::project_context()?;
    let path = ctx.config_path().to_path_buf();
    if !path.exists() {
        let name = ctx
            .root()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());

        std::fs::write(&path, format!("project_name = {name}\n"))
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        eprintln!("    Created {}", path.display());
    }

    let mut plugin = super::select_plugin(plugin)?;
    plugin.init()?;

    eprintln!("    Initialized project metadata in {}", path.display());
    Ok(())
}
