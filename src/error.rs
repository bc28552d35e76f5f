//! Error taxonomy for the shipping core.
//!
//! Every failure at this layer is fatal: operations return `anyhow::Result`
//! with one of these variants as the root cause, and the binary prints a
//! single message and exits non-zero. Callers that need to distinguish kinds
//! (tests, mostly) downcast with `err.downcast_ref::<ShipError>()`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the shipping core.
#[derive(Debug, Error)]
pub enum ShipError {
    /// The config file could not be opened or read.
    #[error("failed to load config file: {path}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required derived field could not be resolved from config.
    #[error("no `{field}` found in config")]
    MissingField { field: String },

    /// Neither config nor the git remotes yielded a repository URL.
    #[error("no repository URL found")]
    RepositoryNotFound,

    /// An external command could not be started.
    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited with a non-zero status.
    #[error("`{command}` failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// A lifecycle method was invoked on a plugin that does not override it.
    #[error("`{op}` is not supported by the `{plugin}` plugin")]
    NotSupported {
        op: &'static str,
        plugin: &'static str,
    },
}

impl ShipError {
    /// Construct a `MissingField` for the given config key.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ShipError::MissingField {
            field: field.into(),
        }
    }
}
