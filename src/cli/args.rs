//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--print`: Print URLs instead of opening them
//!
//! Any subcommand not listed here is passed through to `git`.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};

static VERSION: LazyLock<String> = LazyLock::new(|| {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("GITB_BUILD_COMMIT"),
        option_env!("GITB_BUILD_DATE"),
    )
});

/// Version string, with build details when both are known.
pub fn format_version(version: &str, commit: Option<&str>, date: Option<&str>) -> String {
    match (commit, date) {
        (Some(commit), Some(date)) if !commit.is_empty() && !date.is_empty() => {
            format!("{}, build {}, date {}", version, commit, date)
        }
        _ => version.to_string(),
    }
}

/// gitb - A command line tool for using Backlog's git comfortably
#[derive(Parser, Debug)]
#[command(name = "gitb")]
#[command(author, version = VERSION.as_str(), about, long_about = None)]
pub struct Cli {
    /// Run as if gitb was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print URLs to stdout instead of opening a browser
    #[arg(long, global = true)]
    pub print: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open pull request pages
    #[command(
        name = "pr",
        long_about = "Open the pull request pages of the repository.\n\n\
            gitb finds the pull request for the current branch by asking the remote \
            for its refs. Backlog publishes every pull request as refs/pull/<id>/head, \
            so the branch must have been pushed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Open pull requests that are still open
    gitb pr list

    # Open merged pull requests
    gitb pr list --status merged

    # Open the pull request for the current branch
    gitb pr show

    # Start a pull request from the current branch into master
    gitb pr add --base master"
    )]
    Pr {
        #[command(subcommand)]
        action: PrAction,
    },

    /// Open issue pages
    #[command(
        name = "issue",
        long_about = "Open the issue pages of the project.\n\n\
            `issue show` reads the issue key from the current branch name, so a \
            branch called BLG-123-fix-login opens issue BLG-123.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Open issues that are not closed
    gitb issue list

    # Open every issue
    gitb issue list --status all

    # Open the issue named in the current branch
    gitb issue show

    # Open the new issue form
    gitb issue add"
    )]
    Issue {
        #[command(subcommand)]
        action: IssueAction,
    },

    /// Open repository pages
    #[command(
        name = "browse",
        long_about = "Open pages of the git repository on Backlog.\n\n\
            Refs default to the current branch.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Open the tree of the current branch
    gitb browse tree

    # Open the history of master
    gitb browse history master

    # Open the commit HEAD points at
    gitb browse commit

    # Open lines 10 to 20 of a file
    gitb browse show src/main.rs --line 10-20"
    )]
    Browse {
        #[command(subcommand)]
        target: BrowseTarget,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for gitb.",
        after_help = "\
INSTALLATION:
    # Bash
    gitb completion bash > ~/.local/share/bash-completion/completions/gitb

    # Zsh
    gitb completion zsh > ~/.zfunc/_gitb

    # Fish
    gitb completion fish > ~/.config/fish/completions/gitb.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Any other subcommand is run as `git <subcommand>`
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Pull request subcommands.
#[derive(Subcommand, Debug)]
pub enum PrAction {
    /// Open the pull request list
    List {
        /// Filter by status: all, open, closed, merged (default from config, else open)
        #[arg(long, short)]
        status: Option<String>,
    },

    /// Open the pull request for the current branch
    Show,

    /// Open the new pull request form
    Add {
        /// Branch to merge into (Backlog's default when omitted)
        #[arg(long)]
        base: Option<String>,

        /// Branch to merge from (defaults to current)
        #[arg(long)]
        topic: Option<String>,
    },
}

/// Issue subcommands.
#[derive(Subcommand, Debug)]
pub enum IssueAction {
    /// Open the issue list
    List {
        /// Filter by status: all, open, in_progress, resolved, closed, not_closed
        /// (default from config, else not_closed)
        #[arg(long, short)]
        status: Option<String>,
    },

    /// Open the issue named in the current branch
    Show,

    /// Open the new issue form
    Add,
}

/// Repository pages.
#[derive(Subcommand, Debug)]
pub enum BrowseTarget {
    /// Open the repository list of the project
    Repo,

    /// Open the branch list
    Branch,

    /// Open the tag list
    Tag,

    /// Open the file tree at a ref
    Tree {
        /// Branch, tag, or commit (defaults to current)
        #[arg(value_name = "REF")]
        reference: Option<String>,
    },

    /// Open the commit history at a ref
    History {
        /// Branch, tag, or commit (defaults to current)
        #[arg(value_name = "REF")]
        reference: Option<String>,
    },

    /// Open the network graph at a ref
    Network {
        /// Branch, tag, or commit (defaults to current)
        #[arg(value_name = "REF")]
        reference: Option<String>,
    },

    /// Open a commit
    Commit {
        /// Commit hash (defaults to HEAD)
        hash: Option<String>,
    },

    /// Open a file or directory
    Show {
        /// Path to show, relative to the current directory
        path: PathBuf,

        /// Line or range to select, e.g. 10 or 10-20
        #[arg(long, short = 'L')]
        line: Option<String>,

        /// Branch, tag, or commit (defaults to current)
        #[arg(long = "ref", value_name = "REF")]
        reference: Option<String>,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
