//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves command-specific arguments (config defaults, paths)
//! 2. Calls exactly one [`BacklogRepository`] method
//!
//! The repository, config, and browser are opened once per invocation in
//! [`Session::open`]. `completion` and git passthrough run without a
//! repository.

mod browse;
mod completion;
mod issue;
mod passthrough;
mod pr;

pub use browse::browse;
pub use completion::completion;
pub use issue::issue;
pub use passthrough::passthrough;
pub use pr::pr;

use anyhow::Result;

use super::args::Command;
use super::Context;
use crate::backlog::BacklogRepository;
use crate::browser::{self, Browser};
use crate::core::config::Config;
use crate::git::{Git, LocalRepository};

/// Everything a Backlog command needs, opened once.
pub struct Session {
    /// The local repository
    pub repo: LocalRepository,
    /// Merged configuration
    pub config: Config,
    browser: Box<dyn Browser>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("repo", &self.repo)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open the repository at the working directory and load its config.
    ///
    /// The remote named in the repo config (default `origin`) supplies the
    /// endpoint. `--print` or `print_only` selects the print browser.
    pub fn open(ctx: &Context) -> Result<Self> {
        let cwd = ctx.working_dir()?;
        let git = Git::open(&cwd)?;

        let loaded = Config::load(Some(git.git_dir()))?;
        for warning in &loaded.warnings {
            log::warn!("{}: {}", warning.path.display(), warning.message);
        }
        let config = loaded.config;
        match config.global_path() {
            Some(path) => log::debug!("global config {}", path.display()),
            None => log::debug!("no global config found"),
        }
        if let Some(path) = config.repo_path() {
            log::debug!("repo config {}", path.display());
        }

        let repo = LocalRepository::from_git(git, config.remote())?;
        let browser = browser::select(ctx.print || config.print_only(), config.browser());

        Ok(Self {
            repo,
            config,
            browser,
        })
    }

    /// The Backlog facade over this session's repository and browser.
    pub fn backlog(&self) -> BacklogRepository<'_> {
        BacklogRepository::new(&self.repo, self.browser.as_ref())
    }
}

/// Dispatch a command to its handler. Returns the process exit code.
pub fn dispatch(command: Command, ctx: &Context) -> Result<i32> {
    match command {
        Command::Pr { action } => {
            with_session(ctx, |backlog, config| pr::pr(backlog, config, action))
        }
        Command::Issue { action } => {
            with_session(ctx, |backlog, config| issue::issue(backlog, config, action))
        }
        Command::Browse { target } => {
            with_session(ctx, |backlog, _| browse::browse(ctx, backlog, target))
        }
        Command::Completion { shell } => completion::completion(shell).map(|()| 0),
        Command::External(args) => passthrough::passthrough(ctx, &args),
    }
}

fn with_session<F>(ctx: &Context, handler: F) -> Result<i32>
where
    F: FnOnce(&BacklogRepository<'_>, &Config) -> Result<()>,
{
    let session = Session::open(ctx)?;
    handler(&session.backlog(), &session.config)?;
    Ok(0)
}
