//! core::types
//!
//! Domain types shared by the git, backlog, and cli layers.
//!
//! # Types
//!
//! - [`RemoteEndpoint`] - Host and path of the configured git remote
//! - [`SpaceIdentity`] - Backlog space key and service domain
//! - [`ProjectIdentity`] - Backlog project key and repository name
//! - [`RefToHash`] - Remote ref listing (ref name to commit hash)
//!
//! All of these are built once per invocation and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use super::identity::{extract_project_and_repo, extract_space_and_domain};

/// Mapping from a full ref name (e.g. `refs/heads/main`) to its commit hash.
///
/// Built fresh from each remote listing; nothing is cached between calls.
pub type RefToHash = HashMap<String, String>;

/// The host and path of a git remote URL.
///
/// The path always begins with `/`.
///
/// # Example
///
/// ```
/// use gitb::core::types::RemoteEndpoint;
///
/// let ep = RemoteEndpoint::new("foo.backlog.com", "/git/BAR/baz.git");
/// assert_eq!(ep.host(), "foo.backlog.com");
/// assert_eq!(ep.path(), "/git/BAR/baz.git");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    host: String,
    path: String,
}

impl RemoteEndpoint {
    /// Create an endpoint. A leading `/` is added to `path` if missing.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            host: host.into(),
            path,
        }
    }

    /// The remote host, without user or port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The remote path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RemoteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.host, self.path)
    }
}

/// Backlog space key and domain derived from a remote host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpaceIdentity {
    /// First label of the host (e.g. `foo` in `foo.backlog.com`).
    pub space_key: String,
    /// Last two labels of the host (e.g. `backlog.com`).
    pub domain: String,
}

impl SpaceIdentity {
    /// Derive the identity from a remote host.
    pub fn from_host(host: &str) -> Self {
        let (space_key, domain) = extract_space_and_domain(host);
        Self { space_key, domain }
    }
}

/// Backlog project key and repository name derived from a remote path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectIdentity {
    /// First path segment after the optional `/git` prefix.
    pub project_key: String,
    /// Second path segment with any `.git` suffix removed.
    pub repo_name: String,
}

impl ProjectIdentity {
    /// Derive the identity from a remote path.
    pub fn from_path(path: &str) -> Self {
        let (project_key, repo_name) = extract_project_and_repo(path);
        Self {
            project_key,
            repo_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod remote_endpoint {
        use super::*;

        #[test]
        fn keeps_leading_slash() {
            let ep = RemoteEndpoint::new("foo.backlog.com", "/BAR/baz.git");
            assert_eq!(ep.path(), "/BAR/baz.git");
        }

        #[test]
        fn adds_missing_leading_slash() {
            let ep = RemoteEndpoint::new("foo.git.backlog.com", "BAR/baz.git");
            assert_eq!(ep.path(), "/BAR/baz.git");
        }

        #[test]
        fn display_joins_host_and_path() {
            let ep = RemoteEndpoint::new("foo.backlog.jp", "/git/BAR/baz.git");
            assert_eq!(ep.to_string(), "foo.backlog.jp/git/BAR/baz.git");
        }
    }

    mod identities {
        use super::*;

        #[test]
        fn space_from_https_host() {
            let id = SpaceIdentity::from_host("foo.backlog.com");
            assert_eq!(id.space_key, "foo");
            assert_eq!(id.domain, "backlog.com");
        }

        #[test]
        fn project_from_https_path() {
            let id = ProjectIdentity::from_path("/git/BAR/baz.git");
            assert_eq!(id.project_key, "BAR");
            assert_eq!(id.repo_name, "baz");
        }
    }
}
