//! backlog::repository
//!
//! The Backlog facade: one method per "open X" action.
//!
//! # Design
//!
//! [`BacklogRepository`] borrows a [`Repository`] (local git state) and a
//! [`Browser`] (how URLs are opened). Identifiers are extracted from the
//! remote endpoint once at construction. Each `open_*` method:
//!
//! 1. fills in defaults from the repository (usually the current branch),
//! 2. builds the URL with [`UrlBuilder`],
//! 3. hands it to the browser,
//!
//! and returns any error from those steps unchanged.

use std::path::{Path, PathBuf};

use super::issue_key::extract_issue_key;
use super::pull_request::find_pull_request_id;
use super::url::UrlBuilder;
use super::BacklogError;
use crate::browser::Browser;
use crate::core::line::LineSpec;
use crate::core::status::{IssueStatus, PrStatus};
use crate::core::types::{ProjectIdentity, SpaceIdentity};
use crate::git::Repository;

/// Opens Backlog pages for a local repository.
pub struct BacklogRepository<'a> {
    repo: &'a dyn Repository,
    browser: &'a dyn Browser,
    space: SpaceIdentity,
    project: ProjectIdentity,
}

impl std::fmt::Debug for BacklogRepository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacklogRepository")
            .field("space", &self.space)
            .field("project", &self.project)
            .finish()
    }
}

impl<'a> BacklogRepository<'a> {
    /// Create the facade, extracting identifiers from the remote endpoint.
    pub fn new(repo: &'a dyn Repository, browser: &'a dyn Browser) -> Self {
        let space = SpaceIdentity::from_host(repo.remote_endpoint_host());
        let project = ProjectIdentity::from_path(repo.remote_endpoint_path());
        log::debug!(
            "space {} on {}, project {}, repository {}",
            space.space_key,
            space.domain,
            project.project_key,
            project.repo_name
        );
        Self {
            repo,
            browser,
            space,
            project,
        }
    }

    /// Space key and domain.
    pub fn space(&self) -> &SpaceIdentity {
        &self.space
    }

    /// Project key and repository name.
    pub fn project(&self) -> &ProjectIdentity {
        &self.project
    }

    /// A URL builder for this repository.
    pub fn urls(&self) -> UrlBuilder {
        UrlBuilder::from_identity(&self.space, &self.project)
    }

    fn open(&self, url: String) -> Result<(), BacklogError> {
        log::debug!("opening {}", url);
        self.browser.open(&url)?;
        Ok(())
    }

    /// `ref_or_hash`, or the current branch when absent or empty.
    fn ref_or_head<'r>(&'r self, ref_or_hash: Option<&'r str>) -> &'r str {
        ref_or_hash
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.repo.head_short_name())
    }

    // =========================================================================
    // Repository pages
    // =========================================================================

    /// Repository list of the project.
    pub fn open_repository_list(&self) -> Result<(), BacklogError> {
        self.open(self.urls().git_base_url())
    }

    /// Tree at a ref (default: current branch).
    pub fn open_tree(&self, ref_or_hash: Option<&str>) -> Result<(), BacklogError> {
        self.open(self.urls().tree_url(self.ref_or_head(ref_or_hash)))
    }

    /// History at a ref (default: current branch).
    pub fn open_history(&self, ref_or_hash: Option<&str>) -> Result<(), BacklogError> {
        self.open(self.urls().history_url(self.ref_or_head(ref_or_hash)))
    }

    /// Network graph at a ref (default: current branch).
    pub fn open_network(&self, ref_or_hash: Option<&str>) -> Result<(), BacklogError> {
        self.open(self.urls().network_url(self.ref_or_head(ref_or_hash)))
    }

    /// A commit (default: HEAD).
    pub fn open_commit(&self, hash: Option<&str>) -> Result<(), BacklogError> {
        let hash = hash
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| self.repo.head_commit());
        self.open(self.urls().commit_url(hash))
    }

    /// Branch list.
    pub fn open_branch_list(&self) -> Result<(), BacklogError> {
        self.open(self.urls().branch_list_url())
    }

    /// Tag list.
    pub fn open_tag_list(&self) -> Result<(), BacklogError> {
        self.open(self.urls().tag_list_url())
    }

    /// A file or directory of the work tree at a ref (default: current
    /// branch), optionally selecting lines of a file.
    ///
    /// `path` is absolute or relative to the work-tree root.
    ///
    /// # Errors
    ///
    /// - [`BacklogError::LineOnDirectory`] if `line` is given for a directory
    /// - [`BacklogError::InvalidLine`] if `line` is not `N` or `N-M` (N < M)
    /// - [`BacklogError::OutsideRepository`] if `path` is not under the root
    pub fn open_object(
        &self,
        ref_or_hash: Option<&str>,
        path: &Path,
        is_directory: bool,
        line: Option<&str>,
    ) -> Result<(), BacklogError> {
        let line = match line.filter(|l| !l.is_empty()) {
            Some(_) if is_directory => {
                return Err(BacklogError::LineOnDirectory {
                    path: path.to_path_buf(),
                })
            }
            Some(l) => Some(l.parse::<LineSpec>()?),
            None => None,
        };

        let rel_path = self.relative_path(path)?;
        self.open(
            self.urls()
                .object_url(self.ref_or_head(ref_or_hash), &rel_path, is_directory, line),
        )
    }

    /// `path` relative to the work-tree root, `/`-separated.
    fn relative_path(&self, path: &Path) -> Result<String, BacklogError> {
        let root = self.repo.root_directory();
        let rel = if path.is_absolute() {
            path.strip_prefix(root)
                .map_err(|_| BacklogError::OutsideRepository {
                    path: path.to_path_buf(),
                    root: root.to_path_buf(),
                })?
                .to_path_buf()
        } else {
            PathBuf::from(path)
        };

        Ok(rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"))
    }

    // =========================================================================
    // Pull requests
    // =========================================================================

    /// Pull request list filtered by status name.
    ///
    /// # Errors
    ///
    /// [`BacklogError::InvalidStatus`] for an unknown status name.
    pub fn open_pull_request_list(&self, status: &str) -> Result<(), BacklogError> {
        let status: PrStatus = status.parse()?;
        self.open(self.urls().pull_request_list_url(status.id()))
    }

    /// The pull request whose head matches the current branch on the remote.
    ///
    /// Lists the remote's refs live on every call.
    pub fn open_pull_request(&self) -> Result<(), BacklogError> {
        let refs = self.repo.ls_remote()?;
        let id = find_pull_request_id(&refs, self.repo.head_name())?;
        self.open(self.urls().pull_request_url(&id))
    }

    /// New pull request form from `topic` (default: current branch) into
    /// `base` (default: empty, letting Backlog pick).
    pub fn open_add_pull_request(
        &self,
        base: Option<&str>,
        topic: Option<&str>,
    ) -> Result<(), BacklogError> {
        let base = base.unwrap_or_default();
        self.open(self.urls().add_pull_request_url(base, self.ref_or_head(topic)))
    }

    // =========================================================================
    // Issues
    // =========================================================================

    /// The issue whose key appears in the current branch name.
    ///
    /// # Errors
    ///
    /// [`BacklogError::IssueKeyNotFound`] if the branch name has no key.
    pub fn open_issue(&self) -> Result<(), BacklogError> {
        let branch = self.repo.head_short_name();
        let key = extract_issue_key(branch).ok_or_else(|| BacklogError::IssueKeyNotFound {
            branch: branch.to_string(),
        })?;
        self.open(self.urls().issue_url(key))
    }

    /// New issue form for the project.
    pub fn open_add_issue(&self) -> Result<(), BacklogError> {
        self.open(self.urls().add_issue_url())
    }

    /// Issue search for the project filtered by status name.
    ///
    /// # Errors
    ///
    /// [`BacklogError::InvalidStatus`] for an unknown status name.
    pub fn open_issue_list(&self, status: &str) -> Result<(), BacklogError> {
        let status: IssueStatus = status.parse()?;
        self.open(self.urls().issue_list_url(&status.status_ids()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserError, RecordingBrowser};
    use crate::git::mock::MockRepository;

    const REPO: &str = "https://foo.backlog.com/git/BAR/baz";

    fn mock() -> MockRepository {
        MockRepository::new("foo.backlog.com", "/git/BAR/baz.git").with_head("refs/heads/develop")
    }

    fn opened(
        repo: &MockRepository,
        action: impl FnOnce(&BacklogRepository) -> Result<(), BacklogError>,
    ) -> String {
        let browser = RecordingBrowser::new();
        let backlog = BacklogRepository::new(repo, &browser);
        action(&backlog).unwrap();
        browser.last().unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn identities_from_https_remote() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let backlog = BacklogRepository::new(&repo, &browser);
            assert_eq!(backlog.space().space_key, "foo");
            assert_eq!(backlog.space().domain, "backlog.com");
            assert_eq!(backlog.project().project_key, "BAR");
            assert_eq!(backlog.project().repo_name, "baz");
        }

        #[test]
        fn identities_from_ssh_remote() {
            let repo = MockRepository::new("foo.git.backlog.jp", "/BAR/baz.git");
            let url = opened(&repo, |b| b.open_branch_list());
            assert_eq!(url, "https://foo.backlog.jp/git/BAR/baz/branches");
        }
    }

    mod repository_pages {
        use super::*;

        #[test]
        fn repository_list() {
            assert_eq!(
                opened(&mock(), |b| b.open_repository_list()),
                "https://foo.backlog.com/git/BAR"
            );
        }

        #[test]
        fn tree_defaults_to_current_branch() {
            assert_eq!(
                opened(&mock(), |b| b.open_tree(None)),
                format!("{}/tree/develop", REPO)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_tree(Some(""))),
                format!("{}/tree/develop", REPO)
            );
        }

        #[test]
        fn tree_with_ref() {
            assert_eq!(
                opened(&mock(), |b| b.open_tree(Some("master"))),
                format!("{}/tree/master", REPO)
            );
        }

        #[test]
        fn history_and_network() {
            assert_eq!(
                opened(&mock(), |b| b.open_history(None)),
                format!("{}/history/develop", REPO)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_network(Some("v1"))),
                format!("{}/network/v1", REPO)
            );
        }

        #[test]
        fn commit() {
            assert_eq!(
                opened(&mock(), |b| b.open_commit(Some("qux"))),
                format!("{}/commit/qux", REPO)
            );
        }

        #[test]
        fn commit_defaults_to_head() {
            let repo = mock().with_head_commit("abc123");
            assert_eq!(
                opened(&repo, |b| b.open_commit(None)),
                format!("{}/commit/abc123", REPO)
            );
        }

        #[test]
        fn branch_and_tag_lists() {
            assert_eq!(
                opened(&mock(), |b| b.open_branch_list()),
                format!("{}/branches", REPO)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_tag_list()),
                format!("{}/tags", REPO)
            );
        }
    }

    mod objects {
        use super::*;

        #[test]
        fn directory() {
            assert_eq!(
                opened(&mock(), |b| b.open_object(
                    None,
                    Path::new("/path/to/repo/path/to/dir"),
                    true,
                    None
                )),
                format!("{}/tree/develop/path/to/dir", REPO)
            );
        }

        #[test]
        fn file_with_lines() {
            assert_eq!(
                opened(&mock(), |b| b.open_object(
                    None,
                    Path::new("/path/to/repo/path/to/file"),
                    false,
                    Some("10-20")
                )),
                format!("{}/blob/develop/path/to/file#10-20", REPO)
            );
        }

        #[test]
        fn relative_path_and_ref() {
            assert_eq!(
                opened(&mock(), |b| b.open_object(
                    Some("master"),
                    Path::new("src/lib.rs"),
                    false,
                    Some("")
                )),
                format!("{}/blob/master/src/lib.rs", REPO)
            );
        }

        #[test]
        fn invalid_line_is_rejected() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let backlog = BacklogRepository::new(&repo, &browser);
            let err = backlog
                .open_object(None, Path::new("/path/to/repo/path/to/file"), false, Some("a10-20"))
                .unwrap_err();
            assert!(matches!(err, BacklogError::InvalidLine(_)));
            assert!(browser.urls().is_empty());
        }

        #[test]
        fn line_on_directory_is_rejected() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let backlog = BacklogRepository::new(&repo, &browser);
            let err = backlog
                .open_object(None, Path::new("/path/to/repo/path/to/dir"), true, Some("100"))
                .unwrap_err();
            assert!(matches!(err, BacklogError::LineOnDirectory { .. }));
        }

        #[test]
        fn path_outside_repository() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let backlog = BacklogRepository::new(&repo, &browser);
            let err = backlog
                .open_object(None, Path::new("/etc/hosts"), false, None)
                .unwrap_err();
            assert!(matches!(err, BacklogError::OutsideRepository { .. }));
        }
    }

    mod pull_requests {
        use super::*;

        fn pushed() -> MockRepository {
            MockRepository::new("foo.backlog.com", "/git/BAR/baz.git")
                .with_head("refs/heads/patch-1")
                .with_remote_ref("HEAD", "e73e35d0a86218a9624167110ff8e7fe42596234")
                .with_remote_ref("refs/heads/master", "e73e35d0a86218a9624167110ff8e7fe42596234")
                .with_remote_ref("refs/heads/patch-1", "2b2b5f9e8508a976096a50bd37c81c17ccdf7fb4")
                .with_remote_ref("refs/pull/3/head", "2b2b5f9e8508a976096a50bd37c81c17ccdf7fb4")
                .with_remote_ref("refs/tags/0.0.0", "2674ad54e116b4a05d933aa75c7af0657afd0079")
        }

        #[test]
        fn list_by_status() {
            assert_eq!(
                opened(&mock(), |b| b.open_pull_request_list("all")),
                format!("{}/pullRequests", REPO)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_pull_request_list("open")),
                format!("{}/pullRequests?q.statusId=1", REPO)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_pull_request_list("merged")),
                format!("{}/pullRequests?q.statusId=3", REPO)
            );
        }

        #[test]
        fn list_with_invalid_status() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_pull_request_list("draft")
                .unwrap_err();
            assert!(matches!(err, BacklogError::InvalidStatus(_)));
            assert!(err.to_string().contains("all, open, closed, merged"));
        }

        #[test]
        fn show_current_branch() {
            let repo = pushed();
            assert_eq!(
                opened(&repo, |b| b.open_pull_request()),
                format!("{}/pullRequests/3", REPO)
            );
        }

        #[test]
        fn show_lists_remote_each_time() {
            let repo = pushed();
            let browser = RecordingBrowser::new();
            let backlog = BacklogRepository::new(&repo, &browser);
            backlog.open_pull_request().unwrap();
            backlog.open_pull_request().unwrap();
            assert_eq!(repo.ls_remote_calls(), 2);
        }

        #[test]
        fn show_on_tag_fails() {
            let repo = pushed().with_head("refs/tags/0.0.0");
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_pull_request()
                .unwrap_err();
            assert!(matches!(err, BacklogError::PullRequestNotFound { .. }));
        }

        #[test]
        fn show_unpushed_branch_fails() {
            let repo = pushed().with_head("refs/heads/patch-2");
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_pull_request()
                .unwrap_err();
            assert!(matches!(err, BacklogError::BranchNotInRemote { .. }));
        }

        #[test]
        fn show_propagates_ls_remote_failure() {
            let repo = pushed().with_ls_remote_error("Could not resolve host");
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_pull_request()
                .unwrap_err();
            assert!(matches!(err, BacklogError::Git(_)));
            assert!(err.to_string().contains("Could not resolve host"));
        }

        #[test]
        fn add_defaults_topic_to_current_branch() {
            assert_eq!(
                opened(&mock(), |b| b.open_add_pull_request(None, None)),
                format!("{}/pullRequests/add/...develop", REPO)
            );
        }

        #[test]
        fn add_with_base_and_topic() {
            assert_eq!(
                opened(&mock(), |b| b.open_add_pull_request(Some("master"), Some("feature"))),
                format!("{}/pullRequests/add/master...feature", REPO)
            );
        }
    }

    mod issues {
        use super::*;

        #[test]
        fn show_from_branch_name() {
            let repo = mock().with_head("refs/heads/BAR-1234-patch-1");
            assert_eq!(
                opened(&repo, |b| b.open_issue()),
                "https://foo.backlog.com/view/BAR-1234"
            );
        }

        #[test]
        fn show_without_key_fails() {
            let repo = mock().with_head("refs/heads/patch-1");
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_issue()
                .unwrap_err();
            assert!(matches!(err, BacklogError::IssueKeyNotFound { .. }));
        }

        #[test]
        fn add() {
            assert_eq!(
                opened(&mock(), |b| b.open_add_issue()),
                "https://foo.backlog.com/add/BAR"
            );
        }

        #[test]
        fn list_by_status() {
            let base = "https://foo.backlog.com/find/BAR?condition.simpleSearch=true";
            assert_eq!(opened(&mock(), |b| b.open_issue_list("all")), base);
            assert_eq!(
                opened(&mock(), |b| b.open_issue_list("in_progress")),
                format!("{}&condition.statusId=2", base)
            );
            assert_eq!(
                opened(&mock(), |b| b.open_issue_list("not_closed")),
                format!(
                    "{}&condition.statusId=1&condition.statusId=2&condition.statusId=3",
                    base
                )
            );
        }

        #[test]
        fn list_with_invalid_status() {
            let repo = mock();
            let browser = RecordingBrowser::new();
            let err = BacklogRepository::new(&repo, &browser)
                .open_issue_list("merged")
                .unwrap_err();
            assert!(matches!(err, BacklogError::InvalidStatus(_)));
        }
    }

    mod browser_errors {
        use super::*;

        #[test]
        fn opener_error_is_propagated() {
            let repo = mock();
            let failing = |_: &str| -> Result<(), BrowserError> {
                Err(BrowserError::Other("no display".to_string()))
            };
            let err = BacklogRepository::new(&repo, &failing)
                .open_tag_list()
                .unwrap_err();
            assert!(matches!(err, BacklogError::Browser(_)));
            assert_eq!(err.to_string(), "no display");
        }
    }
}
