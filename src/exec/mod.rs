//! exec
//!
//! Running external commands in the foreground.
//!
//! Subcommands gitb does not know are handed to `git`. On Unix the process
//! image is replaced (`exec`), so git inherits the terminal and its exit
//! status becomes ours. Windows has no `exec`, and WSL's emulation of it is
//! unreliable, so there the child is spawned and waited on instead.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program is not on `PATH`.
    #[error("{program}: command not found")]
    NotFound {
        /// Program name as given
        program: String,
        /// Lookup failure
        #[source]
        source: which::Error,
    },

    /// The program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program name as given
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Runs a command to completion and reports its exit code.
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting stdio.
    ///
    /// Returns the child's exit code. A runner that replaces the current
    /// process only returns on failure.
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;
}

fn resolve(program: &str) -> Result<PathBuf, ExecError> {
    which::which(program).map_err(|source| ExecError::NotFound {
        program: program.to_string(),
        source,
    })
}

/// Replaces the current process with the command (Unix `exec`).
///
/// Falls back to [`SpawnRunner`] where `exec` is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecRunner;

impl CommandRunner for ExecRunner {
    #[cfg(unix)]
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        use std::os::unix::process::CommandExt;

        let binary = resolve(program)?;
        log::debug!("exec {} {}", binary.display(), args.join(" "));
        let source = Command::new(&binary).arg0(program).args(args).exec();
        Err(ExecError::Spawn {
            program: program.to_string(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        SpawnRunner.run(program, args)
    }
}

/// Spawns the command and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpawnRunner;

impl CommandRunner for SpawnRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        let binary = resolve(program)?;
        log::debug!("spawn {} {}", binary.display(), args.join(" "));
        let status = Command::new(&binary)
            .args(args)
            .status()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;

        // Killed by a signal: no code, report generic failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Whether `/proc/version` contents identify Windows Subsystem for Linux.
pub fn is_wsl_version(contents: &str) -> bool {
    contents.contains("Microsoft")
}

/// Detect WSL by reading `/proc/version`.
///
/// Any read failure means "not WSL".
pub fn detect_wsl() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|contents| is_wsl_version(&contents))
        .unwrap_or(false)
}

/// Whether the current platform must spawn instead of exec.
pub fn spawn_only() -> bool {
    cfg!(windows) || detect_wsl()
}

/// Pick the runner for this platform.
pub fn select_runner() -> Box<dyn CommandRunner> {
    if spawn_only() {
        log::debug!("using spawn runner");
        Box::new(SpawnRunner)
    } else {
        Box::new(ExecRunner)
    }
}
