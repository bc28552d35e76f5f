//! Plugin system: the lifecycle contract and its implementations.
//!
//! A plugin extends the core by embedding a [`ProjectContext`] and
//! implementing [`Lifecycle`]. The trait's default method bodies supply the
//! shared `init` behavior and the abstract `build`/`test`/`ship` failures;
//! the registry maps plugin names to constructors so the CLI can select one
//! by name.
//!
//! [`ProjectContext`]: crate::core::context::ProjectContext

pub mod lifecycle;
pub mod registry;
pub mod script;

pub use lifecycle::Lifecycle;
pub use registry::{PluginFactory, PluginRegistry};
pub use script::ScriptPlugin;
