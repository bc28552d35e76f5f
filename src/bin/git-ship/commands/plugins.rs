//! `git-ship plugins` command

use anyhow::Result;

use git_ship::PluginRegistry;

pub fn execute() -> Result<()> {
    for name in PluginRegistry::new().names() {
        println!("{name}");
    }
    Ok(())
}
