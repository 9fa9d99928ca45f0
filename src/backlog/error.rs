//! backlog::error
//!
//! Errors surfaced by the Backlog facade.
//!
//! Variants follow the taxonomy the CLI reports on:
//! - validation: [`BacklogError::InvalidStatus`], [`BacklogError::InvalidLine`],
//!   [`BacklogError::LineOnDirectory`], [`BacklogError::OutsideRepository`]
//! - resolution: [`BacklogError::BranchNotInRemote`],
//!   [`BacklogError::PullRequestNotFound`], [`BacklogError::IssueKeyNotFound`]
//! - collaborators: [`BacklogError::Git`], [`BacklogError::Browser`]
//!
//! None of them are retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::browser::BrowserError;
use crate::core::line::InvalidLine;
use crate::core::status::InvalidStatus;
use crate::git::GitError;

/// Errors from Backlog operations.
#[derive(Debug, Error)]
pub enum BacklogError {
    /// Unknown pull request or issue status name.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),

    /// Malformed line specifier.
    #[error(transparent)]
    InvalidLine(#[from] InvalidLine),

    /// A line specifier was given for a directory.
    #[error("cannot select lines of a directory: {path}")]
    LineOnDirectory {
        /// The directory
        path: PathBuf,
    },

    /// The path to show is not inside the work tree.
    #[error("{path} is outside repository {root}")]
    OutsideRepository {
        /// The requested path
        path: PathBuf,
        /// The work-tree root
        root: PathBuf,
    },

    /// The current branch has not been pushed to the remote.
    #[error("not found a current branch in remote: {branch}")]
    BranchNotInRemote {
        /// Full ref name of the current branch
        branch: String,
    },

    /// No `refs/pull/<id>/head` matches the branch tip.
    #[error("not found a pull request related to current branch: {branch}")]
    PullRequestNotFound {
        /// Full ref name of the current branch
        branch: String,
    },

    /// The branch name does not contain an issue key.
    #[error("could not find issue key in current branch name: {branch}")]
    IssueKeyNotFound {
        /// Short name of the current branch
        branch: String,
    },

    /// Repository or remote listing failure.
    #[error(transparent)]
    Git(#[from] GitError),

    /// The URL could not be opened.
    #[error(transparent)]
    Browser(#[from] BrowserError),
}
