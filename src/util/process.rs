//! Subprocess execution utilities.
//!
//! Two execution modes cover everything the core needs: captured output for
//! metadata lookups (`git remote -v`, `git log`) and inherited stdio for
//! lifecycle commands a plugin runs on the user's behalf (builds, test
//! suites, publish steps).

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;

use crate::error::ShipError;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Execute with captured stdout/stderr and wait for completion.
    pub fn output(&self) -> Result<Output> {
        tracing::debug!("running `{}` (captured)", self.display_command());
        let output = self
            .build_command()
            .output()
            .map_err(|source| ShipError::Spawn {
                command: self.display_command(),
                source,
            })?;
        Ok(output)
    }

    /// Execute with captured output and require a zero exit status.
    pub fn output_checked(&self) -> Result<Output> {
        let output = self.output()?;
        if !output.status.success() {
            return Err(ShipError::CommandFailed {
                command: self.display_command(),
                code: output.status.code().unwrap_or(-1),
            }
            .into());
        }
        Ok(output)
    }

    /// Execute with inherited stdio and require a zero exit status.
    ///
    /// Used for lifecycle commands whose output belongs to the user.
    pub fn run(&self) -> Result<()> {
        tracing::debug!("running `{}`", self.display_command());
        let status = self
            .build_command()
            .status()
            .map_err(|source| ShipError::Spawn {
                command: self.display_command(),
                source,
            })?;

        if !status.success() {
            return Err(ShipError::CommandFailed {
                command: self.display_command(),
                code: status.code().unwrap_or(-1),
            }
            .into());
        }
        Ok(())
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Find the git executable in PATH.
pub fn find_git() -> Option<PathBuf> {
    which::which("git").ok()
}

/// The git executable path, falling back to a bare `git` so the spawn error
/// carries the familiar name when git is absent entirely.
pub fn git_program() -> PathBuf {
    find_git().unwrap_or_else(|| PathBuf::from("git"))
}
