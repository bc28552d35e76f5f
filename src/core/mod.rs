//! Core types: lazy attributes, config resolution, project context.

pub mod attr;
pub mod config;
pub mod context;
pub mod remote;

pub use attr::Attr;
pub use config::ConfigMap;
pub use context::ProjectContext;
