//! `git-ship build` command

use anyhow::Result;

pub fn execute(plugin: Option<String>) -> Result<()> {
    let mut plugin = super::select_plugin(plugin)?;
    plugin.build()?;

    eprintln!("    Finished build (`{}` plugin)", plugin.name());
    Ok(())
}
