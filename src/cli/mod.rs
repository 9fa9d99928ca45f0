//! cli
//!
//! Command-line interface layer for gitb.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialise logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::backlog::BacklogRepository`] facade, which does the work.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

/// Settings from global flags, shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory to run in (`--cwd`), if not the process directory
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled
    pub debug: bool,
    /// Print URLs instead of opening them
    pub print: bool,
}

impl Context {
    /// The directory commands run in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to read the current directory"),
        }
    }
}

/// Initialise `env_logger`. `RUST_LOG` overrides the level chosen here.
fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the process
/// exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        print: cli.print,
    };

    commands::dispatch(cli.command, &ctx)
}
