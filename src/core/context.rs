//! Project context: the state every plugin operates on.
//!
//! A [`ProjectContext`] is rooted at a project directory and exposes the
//! project's metadata as lazy attributes: `config` loads the config file on
//! first touch, `project_name` and `repository` derive from it (the latter
//! falling back to remote inspection). Lifecycle defaults and the
//! subprocess utilities plugins build on also live here.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::attr::Attr;
use crate::core::config::{self, ConfigMap};
use crate::core::remote;
use crate::error::ShipError;
use crate::util::process::ProcessBuilder;

/// License identifier applied by `init` when the config has none.
pub const DEFAULT_LICENSE_NAME: &str = "MIT";

/// License URL applied by `init` when the config has none.
pub const DEFAULT_LICENSE_URL: &str = "https://opensource.org/licenses/MIT";

/// Per-project state: the config map and the metadata derived from it.
#[derive(Debug)]
pub struct ProjectContext {
    root: PathBuf,
    config_path: PathBuf,
    config: Attr<ConfigMap>,
    project_name: Attr<String>,
    repository: Attr<String>,
}

impl ProjectContext {
    /// Create a context rooted at the given project directory.
    ///
    /// The config file path is resolved here (environment override or the
    /// default filename under `root`); no I/O happens until first access.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_path = config::default_path(&root);
        ProjectContext {
            root,
            config_path,
            config: Attr::unset(),
            project_name: Attr::unset(),
            repository: Attr::unset(),
        }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The resolved config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The project configuration, loaded from the config file on first
    /// access and cached thereafter.
    pub fn config(&mut self) -> Result<&ConfigMap> {
        let path = &self.config_path;
        self.config.get_or_try_init(|| config::load(path))
    }

    /// Replace the cached configuration, bypassing the loader.
    pub fn set_config(&mut self, map: ConfigMap) -> &mut Self {
        self.config.set(map);
        self
    }

    /// The project name, from the `project_name` config key.
    ///
    /// Fails with a missing-field error when the key is absent or empty.
    pub fn project_name(&mut self) -> Result<&str> {
        if !self.project_name.is_set() {
            let name = self
                .config()?
                .get("project_name")
                .filter(|value| !value.is_empty())
                .cloned()
                .ok_or_else(|| ShipError::missing_field("project_name"))?;
            self.project_name.set(name);
        }
        Ok(self.project_name.get().unwrap())
    }

    /// Override the cached project name.
    pub fn set_project_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.project_name.set(name.into());
        self
    }

    /// The repository URL: the `repository` config key verbatim when present
    /// and non-empty, otherwise derived from the git remotes.
    pub fn repository(&mut self) -> Result<&str> {
        if !self.repository.is_set() {
            let configured = self
                .config()?
                .get("repository")
                .filter(|value| !value.is_empty())
                .cloned();

            let url = match configured {
                Some(url) => url,
                None => remote::discover(&self.root)?,
            };
            self.repository.set(url);
        }
        Ok(self.repository.get().unwrap())
    }

    /// Override the cached repository URL.
    pub fn set_repository(&mut self, url: impl Into<String>) -> &mut Self {
        self.repository.set(url.into());
        self
    }

    /// Merge the derived metadata defaults into the config and re-cache it.
    ///
    /// `bugtracker` and `homepage` derive from the repository URL; the
    /// license entries fall back to fixed identifiers. A key already present
    /// in the config is never overwritten, so running this twice is a no-op.
    pub fn apply_init_defaults(&mut self) -> Result<()> {
        let base = strip_git_suffix(self.repository()?);
        let bugtracker = format!("{}/issues", base.trim_end_matches('/'));

        let mut map = self.config()?.clone();
        merge_missing(&mut map, "bugtracker", bugtracker);
        merge_missing(&mut map, "homepage", base);
        merge_missing(&mut map, "license_name", DEFAULT_LICENSE_NAME.to_string());
        merge_missing(&mut map, "license_url", DEFAULT_LICENSE_URL.to_string());

        self.set_config(map);
        Ok(())
    }

    /// Persist the cached config back to the config file.
    pub fn save_config(&mut self) -> Result<()> {
        let path = self.config_path.clone();
        let map = self.config()?;
        config::save(&path, map)
    }

    /// First line of `git log -1` with the given pretty format.
    ///
    /// `%an` and `%ae` name the commit author and email.
    pub fn author(&self, format: &str) -> Result<String> {
        remote::author_line(&self.root, format)
    }

    /// Run an external command in the project root with inherited stdio.
    ///
    /// A command that cannot be started or exits non-zero is fatal; the
    /// error carries the full command line and the exit code. Returns the
    /// context on success for chaining.
    pub fn system<I, S>(&mut self, program: impl AsRef<Path>, args: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        ProcessBuilder::new(program)
            .args(args)
            .cwd(&self.root)
            .run()?;
        Ok(self)
    }
}

/// Strip a trailing `.git` from a repository URL.
fn strip_git_suffix(url: &str) -> String {
    url.strip_suffix(".git").unwrap_or(url).to_string()
}

/// Insert `key = value` only when `key` is absent.
fn merge_missing(map: &mut ConfigMap, key: &str, value: String) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), value);
    }
}
