//! Plugin registry - name-based discovery of lifecycle implementations.
//!
//! Registry construction never fails and performs no I/O; a plugin is only
//! constructed (and only then touches config or git) when it is selected.

use std::collections::BTreeMap;

use crate::core::context::ProjectContext;
use crate::plugins::lifecycle::Lifecycle;
use crate::plugins::script::ScriptPlugin;

/// Constructor for a plugin: takes ownership of the project context.
pub type PluginFactory = fn(ProjectContext) -> Box<dyn Lifecycle>;

/// Registry of available plugins.
pub struct PluginRegistry {
    factories: BTreeMap<&'static str, PluginFactory>,
}

impl PluginRegistry {
    /// Create a registry with all built-in plugins.
    pub fn new() -> Self {
        let mut registry = PluginRegistry {
            factories: BTreeMap::new(),
        };
        registry.register("script", |ctx| Box::new(ScriptPlugin::new(ctx)));
        registry
    }

    /// Register a plugin factory. Re-registering a name replaces it.
    pub fn register(&mut self, name: &'static str, factory: PluginFactory) {
        self.factories.insert(name, factory);
    }

    /// Construct the named plugin around the given context.
    pub fn create(&self, name: &str, ctx: ProjectContext) -> Option<Box<dyn Lifecycle>> {
        self.factories.get(name).map(|factory| factory(ctx))
    }

    /// Registered plugin names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Whether a plugin with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
