//! git::repository
//!
//! The read-only repository view consumed by the Backlog facade.
//!
//! # Design
//!
//! [`Repository`] is the seam between gitb's URL logic and the local git
//! state. [`LocalRepository`] captures HEAD, the work-tree root, and the
//! remote endpoint once when opened; only [`Repository::ls_remote`] touches
//! git again, because the remote listing must be live.
//!
//! Tests substitute [`super::mock::MockRepository`].

use std::path::{Path, PathBuf};

use super::{Git, GitError};
use crate::core::types::{RefToHash, RemoteEndpoint};

/// Read-only view of the local repository and its remote.
pub trait Repository {
    /// Full name of the current HEAD ref (e.g. `refs/heads/patch-1`).
    fn head_name(&self) -> &str;

    /// Short name of the current HEAD ref (e.g. `patch-1`).
    fn head_short_name(&self) -> &str;

    /// Commit hash of HEAD.
    fn head_commit(&self) -> &str;

    /// Root of the working tree.
    fn root_directory(&self) -> &Path;

    /// Host of the remote endpoint.
    fn remote_endpoint_host(&self) -> &str;

    /// Path of the remote endpoint.
    fn remote_endpoint_path(&self) -> &str;

    /// Live listing of the remote's refs.
    fn ls_remote(&self) -> Result<RefToHash, GitError>;
}

/// [`Repository`] backed by a real git repository.
#[derive(Debug)]
pub struct LocalRepository {
    git: Git,
    remote: String,
    head_name: String,
    head_short_name: String,
    head_commit: String,
    root: PathBuf,
    endpoint: RemoteEndpoint,
}

impl LocalRepository {
    /// Open the repository containing `path`, reading HEAD and the URL of
    /// `remote`.
    ///
    /// # Errors
    ///
    /// Any [`GitError`] from opening the repository, resolving HEAD, or
    /// parsing the remote URL.
    pub fn open(path: &Path, remote: &str) -> Result<Self, GitError> {
        Self::from_git(Git::open(path)?, remote)
    }

    /// Build the view from an already opened repository.
    pub fn from_git(git: Git, remote: &str) -> Result<Self, GitError> {
        let head_name = git.head_name()?;
        let head_short_name = git.head_short_name()?;
        let head_commit = git.head_oid()?;
        let work_dir = git.work_dir()?;
        let root = std::fs::canonicalize(work_dir).unwrap_or_else(|_| work_dir.to_path_buf());
        let endpoint = git.remote_endpoint(remote)?;

        Ok(Self {
            git,
            remote: remote.to_string(),
            head_name,
            head_short_name,
            head_commit,
            root,
            endpoint,
        })
    }

    /// Name of the remote this view was opened against.
    pub fn remote(&self) -> &str {
        &self.remote
    }
}

impl Repository for LocalRepository {
    fn head_name(&self) -> &str {
        &self.head_name
    }

    fn head_short_name(&self) -> &str {
        &self.head_short_name
    }

    fn head_commit(&self) -> &str {
        &self.head_commit
    }

    fn root_directory(&self) -> &Path {
        &self.root
    }

    fn remote_endpoint_host(&self) -> &str {
        self.endpoint.host()
    }

    fn remote_endpoint_path(&self) -> &str {
        self.endpoint.path()
    }

    fn ls_remote(&self) -> Result<RefToHash, GitError> {
        self.git.ls_remote(&self.remote)
    }
}
