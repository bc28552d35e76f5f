//! Project configuration: a flat `key = value` file.
//!
//! The config lives in `.git-ship.conf` at the project root (overridable via
//! the `GIT_SHIP_CONFIG` environment variable). One pair per line; lines
//! that do not match `key = value` are ignored; later lines for the same key
//! overwrite earlier ones. There are no sections, no escaping, and no
//! comment syntax - an unmatched line is simply skipped.
//!
//! Values are uninterpreted strings. Consumers (lazy attributes, plugins)
//! give meaning to the subset of keys they understand.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::error::ShipError;

/// Default config filename, relative to the project root.
pub const CONFIG_FILE_NAME: &str = ".git-ship.conf";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "GIT_SHIP_CONFIG";

/// The in-memory configuration: string keys to string values.
pub type ConfigMap = BTreeMap<String, String>;

/// `key = value` with insignificant whitespace around `=`; the value runs to
/// the end of the line.
static PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*(.*)$").unwrap());

/// Resolve the config file path for a project root.
///
/// `GIT_SHIP_CONFIG` takes precedence when set and non-empty.
pub fn default_path(root: &Path) -> PathBuf {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => root.join(CONFIG_FILE_NAME),
    }
}

/// Load a config file into a map.
///
/// A file that cannot be opened is fatal. Malformed lines are skipped;
/// duplicate keys are last-write-wins.
pub fn load(path: &Path) -> Result<ConfigMap> {
    let file = std::fs::File::open(path).map_err(|source| ShipError::ConfigLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let mut map = ConfigMap::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ShipError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        parse_line(&line, &mut map);
    }

    tracing::debug!("loaded {} config keys from {}", map.len(), path.display());
    Ok(map)
}

/// Parse one config line into the map. Non-matching lines are ignored.
pub fn parse_line(line: &str, map: &mut ConfigMap) {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if let Some(caps) = PAIR_RE.captures(line) {
        map.insert(caps[1].to_string(), caps[2].to_string());
    }
}

/// Parse a whole config source (used by tests and by in-memory loads).
pub fn parse(source: &str) -> ConfigMap {
    let mut map = ConfigMap::new();
    for line in source.lines() {
        parse_line(line, &mut map);
    }
    map
}

/// Write a config map back as sorted `key = value` lines.
///
/// Unmatched lines from the original file are not preserved; the map is the
/// model.
pub fn save(path: &Path, map: &ConfigMap) -> Result<()> {
    let mut contents = String::new();
    for (key, value) in map {
        contents.push_str(key);
        contents.push_str(" = ");
        contents.push_str(value);
        contents.push('\n');
    }

    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    tracing::debug!("saved {} config keys to {}", map.len(), path.display());
    Ok(())
}
