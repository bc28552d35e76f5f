//! Repository inspection via the git binary.
//!
//! When the config does not pin a repository URL, the core falls back to
//! parsing `git remote -v`. The parse is a deliberate best-effort heuristic
//! over the conventional `name<TAB>url (direction)` listing with a
//! colon-or-space delimited remote URL; it is not a URL parser and only
//! recognizes one hosting provider.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::error::ShipError;
use crate::util::process::{git_program, ProcessBuilder};

/// Hosting marker a remote line must contain to be considered.
pub const KNOWN_HOST: &str = "github.com";

/// Delimiters in a remote listing line: a colon or a run of whitespace.
static FIELD_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[:\s]+").unwrap());

/// Derive the repository URL from the project's git remotes.
///
/// Runs `git remote -v`, keeps the first line mentioning [`KNOWN_HOST`], and
/// rewrites its URL to `https://` form. Fails with
/// [`ShipError::RepositoryNotFound`] when no line matches.
pub fn discover(root: &Path) -> Result<String> {
    let output = ProcessBuilder::new(git_program())
        .args(["remote", "-v"])
        .cwd(root)
        .output_checked()?;

    let listing = String::from_utf8_lossy(&output.stdout);
    let url = first_remote_url(&listing).ok_or(ShipError::RepositoryNotFound)?;

    tracing::debug!("derived repository URL from remotes: {url}");
    Ok(url)
}

/// Apply the remote-line heuristic to a remote listing.
///
/// For `origin<TAB>git@github.com:acme/widget.git (fetch)`, splitting on
/// `:` or whitespace yields `[origin, git@github.com, acme/widget.git,
/// (fetch)]`; the third field is the `owner/name.git` path. The result never
/// carries the `git@host:` SSH prefix.
pub fn first_remote_url(listing: &str) -> Option<String> {
    let line = listing.lines().find(|line| line.contains(KNOWN_HOST))?;
    let path = FIELD_SPLIT_RE.split(line).nth(2)?;
    Some(format!("https://{KNOWN_HOST}/{path}"))
}

/// Return the first line of `git log -1` with the given pretty format.
///
/// `%an` (author name) and `%ae` (author email) pass through to git. The
/// trailing newline, if any, is stripped.
pub fn author_line(root: &Path, format: &str) -> Result<String> {
    let pretty = format!("--pretty=format:{format}");
    let output = ProcessBuilder::new(git_program())
        .args(["log", "-1"])
        .arg(&pretty)
        .cwd(root)
        .output_checked()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or("").to_string())
}
