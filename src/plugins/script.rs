//! Script plugin: lifecycle steps driven by user-configured commands.
//!
//! The most flexible and least capable plugin: the config supplies one
//! command line per lifecycle step (`build_command`, `test_command`,
//! `ship_command`) and the plugin runs it in the project root. Command lines
//! are split on whitespace; there is no shell quoting or expansion - point
//! the config at a script when a step needs more than one command.

use anyhow::Result;

use crate::core::attr::Attr;
use crate::core::context::ProjectContext;
use crate::error::ShipError;
use crate::plugins::lifecycle::Lifecycle;

/// Config key holding the build command line.
pub const BUILD_COMMAND_KEY: &str = "build_command";

/// Config key holding the test command line.
pub const TEST_COMMAND_KEY: &str = "test_command";

/// Config key holding the ship command line.
pub const SHIP_COMMAND_KEY: &str = "ship_command";

/// A plugin whose lifecycle steps run configured command lines.
pub struct ScriptPlugin {
    ctx: ProjectContext,
    // Parsed command lines, resolved from config once per instance.
    build_argv: Attr<Vec<String>>,
    test_argv: Attr<Vec<String>>,
    ship_argv: Attr<Vec<String>>,
}

impl ScriptPlugin {
    /// Create a script plugin owning the given context.
    pub fn new(ctx: ProjectContext) -> Self {
        ScriptPlugin {
            ctx,
            build_argv: Attr::unset(),
            test_argv: Attr::unset(),
            ship_argv: Attr::unset(),
        }
    }
}

/// Look up and memoize the whitespace-split argv for a command key.
fn resolve_argv(
    ctx: &mut ProjectContext,
    slot: &mut Attr<Vec<String>>,
    key: &str,
) -> Result<Vec<String>> {
    if !slot.is_set() {
        let command = ctx
            .config()?
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .ok_or_else(|| ShipError::missing_field(key))?;

        tracing::debug!("{key} = `{command}`");
        slot.set(command.split_whitespace().map(str::to_string).collect());
    }
    Ok(slot.get().unwrap().clone())
}

/// Run a resolved argv in the project root.
fn exec(ctx: &mut ProjectContext, argv: &[String], key: &str) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ShipError::missing_field(key))?;
    ctx.system(program, args)?;
    Ok(())
}

impl Lifecycle for ScriptPlugin {
    fn name(&self) -> &'static str {
        "script"
    }

    fn context(&self) -> &ProjectContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProjectContext {
        &mut self.ctx
    }

    fn build(&mut self) -> Result<()> {
        let argv = resolve_argv(&mut self.ctx, &mut self.build_argv, BUILD_COMMAND_KEY)?;
        exec(&mut self.ctx, &argv, BUILD_COMMAND_KEY)
    }

    fn test(&mut self) -> Result<()> {
        let argv = resolve_argv(&mut self.ctx, &mut self.test_argv, TEST_COMMAND_KEY)?;
        exec(&mut self.ctx, &argv, TEST_COMMAND_KEY)
    }

    fn ship(&mut self) -> Result<()> {
        let argv = resolve_argv(&mut self.ctx, &mut self.ship_argv, SHIP_COMMAND_KEY)?;
        exec(&mut self.ctx, &argv, SHIP_COMMAND_KEY)
    }
}
