//! The lifecycle contract every plugin implements.
//!
//! A plugin owns a [`ProjectContext`] and overrides the lifecycle methods
//! that make sense for its ecosystem. Default bodies provide the shared
//! behavior: `init` merges and persists the derived metadata defaults, and
//! `build`/`test`/`ship` fail as unsupported so an un-overridden method
//! names the plugin that lacks it. Method dispatch resolves to the plugin's
//! own definition first; only missing overrides fall back here.
//!
//! Plugins declare their own lazy attributes with the same [`Attr`] type the
//! context uses for its fields; see the `script` plugin for an example.
//!
//! [`Attr`]: crate::core::attr::Attr

use anyhow::Result;

use crate::core::context::ProjectContext;
use crate::error::ShipError;

/// Overridable lifecycle operations plus the context accessors the default
/// bodies need.
pub trait Lifecycle {
    /// The plugin's registered name, used in selection and error messages.
    fn name(&self) -> &'static str;

    /// The project context this plugin operates on.
    fn context(&self) -> &ProjectContext;

    /// Mutable access to the project context.
    fn context_mut(&mut self) -> &mut ProjectContext;

    /// Populate the config with derived defaults and persist it.
    ///
    /// Plugins that override this typically perform the same merge first
    /// (via [`ProjectContext::apply_init_defaults`]) and then extend the
    /// config with ecosystem-specific metadata.
    fn init(&mut self) -> Result<()> {
        let ctx = self.context_mut();
        ctx.apply_init_defaults()?;
        ctx.save_config()
    }

    /// Build the project. Abstract: a usable plugin must override this.
    fn build(&mut self) -> Result<()> {
        Err(ShipError::NotSupported {
            op: "build",
            plugin: self.name(),
        }
        .into())
    }

    /// Run the project's tests. May stay abstract when the ecosystem has no
    /// test step.
    fn test(&mut self) -> Result<()> {
        Err(ShipError::NotSupported {
            op: "test",
            plugin: self.name(),
        }
        .into())
    }

    /// Publish the project. Abstract: a usable plugin must override this.
    fn ship(&mut self) -> Result<()> {
        Err(ShipError::NotSupported {
            op: "ship",
            plugin: self.name(),
        }
        .into())
    }
}
