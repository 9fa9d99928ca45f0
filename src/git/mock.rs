//! git::mock
//!
//! In-memory [`Repository`] for deterministic testing.
//!
//! # Example
//!
//! ```
//! use gitb::git::mock::MockRepository;
//! use gitb::git::Repository;
//!
//! let repo = MockRepository::new("foo.backlog.com", "/git/BAR/baz.git")
//!     .with_head("refs/heads/patch-1")
//!     .with_remote_ref("refs/pull/3/head", "2b2b5f9");
//!
//! assert_eq!(repo.head_short_name(), "patch-1");
//! assert_eq!(repo.ls_remote().unwrap()["refs/pull/3/head"], "2b2b5f9");
//! ```

use std::cell::Cell;
use std::path::{Path, PathBuf};

use super::{GitError, Repository};
use crate::core::types::{RefToHash, RemoteEndpoint};

/// Mock repository with configurable HEAD and remote refs.
#[derive(Debug)]
pub struct MockRepository {
    endpoint: RemoteEndpoint,
    head_name: String,
    head_short_name: String,
    head_commit: String,
    root: PathBuf,
    remote_refs: RefToHash,
    ls_remote_error: Option<String>,
    ls_remote_calls: Cell<usize>,
}

impl MockRepository {
    /// Create a mock on `refs/heads/master` with no remote refs.
    pub fn new(host: &str, path: &str) -> Self {
        Self {
            endpoint: RemoteEndpoint::new(host, path),
            head_name: "refs/heads/master".to_string(),
            head_short_name: "master".to_string(),
            head_commit: "0000000000000000000000000000000000000000".to_string(),
            root: PathBuf::from("/path/to/repo"),
            remote_refs: RefToHash::new(),
            ls_remote_error: None,
            ls_remote_calls: Cell::new(0),
        }
    }

    /// Set HEAD to a full ref name. The short name drops any
    /// `refs/heads/`, `refs/tags/`, or `refs/remotes/` prefix.
    pub fn with_head(mut self, head_name: &str) -> Self {
        let short = ["refs/heads/", "refs/tags/", "refs/remotes/"]
            .iter()
            .find_map(|prefix| head_name.strip_prefix(prefix))
            .unwrap_or(head_name);
        self.head_name = head_name.to_string();
        self.head_short_name = short.to_string();
        self
    }

    /// Set the HEAD commit hash.
    pub fn with_head_commit(mut self, hash: &str) -> Self {
        self.head_commit = hash.to_string();
        self
    }

    /// Add a remote ref.
    pub fn with_remote_ref(mut self, refname: &str, hash: &str) -> Self {
        self.remote_refs.insert(refname.to_string(), hash.to_string());
        self
    }

    /// Make `ls_remote` fail with the given message.
    pub fn with_ls_remote_error(mut self, message: &str) -> Self {
        self.ls_remote_error = Some(message.to_string());
        self
    }

    /// Number of times `ls_remote` was called.
    pub fn ls_remote_calls(&self) -> usize {
        self.ls_remote_calls.get()
    }
}

impl Repository for MockRepository {
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
        self.ls_remote_calls.set(self.ls_remote_calls.get() + 1);
        match &self.ls_remote_error {
            Some(message) => Err(GitError::LsRemote {
                remote: "origin".to_string(),
                message: message.clone(),
            }),
            None => Ok(self.remote_refs.clone()),
        }
    }
}
