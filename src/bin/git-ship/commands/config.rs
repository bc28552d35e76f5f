//! `git-ship config` command

use anyhow::Result;

use crate::cli::ConfigArgs;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let mut ctx = super::project_context()?;
    let map = ctx.config()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(map)?);
    } else {
        for (key, value) in map {
            println!("{key} = {value}");
        }
    }

    Ok(())
}
