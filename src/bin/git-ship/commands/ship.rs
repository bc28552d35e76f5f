//! `git-ship ship` command

use anyhow::Result;

pub fn execute(plugin: Option<String>) -> Result<()> {
    let mut plugin = super::select_plugin(plugin)?;
    plugin.ship()?;

    eprintln!("    Shipped (`{}` plugin)", plugin.name());
    Ok(())
}
