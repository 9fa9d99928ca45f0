//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to the local repository.
//! Everything gitb needs from git (HEAD, remote configuration, the work tree
//! root, and the live remote ref listing) flows through [`Git`].
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RemoteNotFound`]: The configured remote does not exist
//! - [`GitError::NoRemoteUrl`]: The remote has no URL
//! - [`GitError::MalformedEndpoint`]: The remote URL has no usable host/path
//! - [`GitError::LsRemote`]: Listing remote refs failed
//!
//! # Example
//!
//! ```ignore
//! use gitb::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! println!("on {}", git.head_short_name()?);
//! let endpoint = git.remote_endpoint("origin")?;
//! println!("remote host is {}", endpoint.host());
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use super::endpoint::parse_endpoint;
use super::ls_remote::parse_ls_remote;
use crate::core::types::{RefToHash, RemoteEndpoint};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// HEAD points at a branch with no commits yet.
    #[error("HEAD has no commits yet")]
    UnbornHead,

    /// The named remote is not configured.
    #[error("remote '{name}' not found")]
    RemoteNotFound {
        /// The remote name
        name: String,
    },

    /// The remote exists but has no URL.
    #[error("could not find URL for remote '{name}'")]
    NoRemoteUrl {
        /// The remote name
        name: String,
    },

    /// The remote URL cannot be split into host and path.
    #[error("malformed remote URL: {url}")]
    MalformedEndpoint {
        /// The remote URL as configured
        url: String,
    },

    /// `git ls-remote` could not be run or exited with an error.
    #[error("git ls-remote {remote} failed: {message}")]
    LsRemote {
        /// The remote that was listed
        remote: String,
        /// stderr of the git process, or the spawn error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// The Git interface.
///
/// Wraps a `git2::Repository` and exposes only the read operations gitb
/// needs. Remote refs are listed by invoking the `git` binary, because the
/// listing must reflect the server's live state using the user's own
/// credentials and transport configuration.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        log::debug!("opened repository at {}", repo.path().display());
        Ok(Self { repo })
    }

    /// Get direct access to the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Root of the working tree.
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    // =========================================================================
    // HEAD
    // =========================================================================

    fn head(&self) -> Result<git2::Reference<'_>, GitError> {
        match self.repo.head() {
            Ok(head) => Ok(head),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Err(GitError::UnbornHead),
            Err(e) => Err(e.into()),
        }
    }

    /// Full name of the ref HEAD points at (e.g. `refs/heads/main`).
    ///
    /// Returns `HEAD` when detached.
    pub fn head_name(&self) -> Result<String, GitError> {
        let head = self.head()?;
        Ok(head.name().unwrap_or("HEAD").to_string())
    }

    /// Short name of the ref HEAD points at (e.g. `main`).
    ///
    /// Returns `HEAD` when detached.
    pub fn head_short_name(&self) -> Result<String, GitError> {
        let head = self.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Commit hash HEAD resolves to.
    pub fn head_oid(&self) -> Result<String, GitError> {
        let commit = self.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Host and path of a remote's URL.
    ///
    /// # Errors
    ///
    /// - [`GitError::RemoteNotFound`] if the remote is not configured
    /// - [`GitError::NoRemoteUrl`] if the remote has no URL
    /// - [`GitError::MalformedEndpoint`] if the URL cannot be parsed
    pub fn remote_endpoint(&self, name: &str) -> Result<RemoteEndpoint, GitError> {
        let remote = match self.repo.find_remote(name) {
            Ok(remote) => remote,
            Err(e)
                if e.code() == git2::ErrorCode::NotFound
                    || e.class() == git2::ErrorClass::Config =>
            {
                return Err(GitError::RemoteNotFound {
                    name: name.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let url = remote
            .url()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| GitError::NoRemoteUrl {
                name: name.to_string(),
            })?;

        parse_endpoint(url)
    }

    /// List the remote's refs with `git ls-remote -q <remote>`.
    ///
    /// This is a blocking network call with no timeout or retry.
    ///
    /// # Errors
    ///
    /// [`GitError::LsRemote`] if git cannot be spawned or exits non-zero.
    pub fn ls_remote(&self, remote: &str) -> Result<RefToHash, GitError> {
        let work_dir = self.work_dir()?;
        log::debug!("running git ls-remote -q {} in {}", remote, work_dir.display());

        let output = Command::new("git")
            .arg("-C")
            .arg(work_dir)
            .args(["ls-remote", "-q", remote])
            .output()
            .map_err(|e| GitError::LsRemote {
                remote: remote.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GitError::LsRemote {
                remote: remote.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let refs = parse_ls_remote(&String::from_utf8_lossy(&output.stdout));
        log::debug!("ls-remote returned {} refs", refs.len());
        Ok(refs)
    }
}
