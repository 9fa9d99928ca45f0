//! backlog::url
//!
//! Builds Backlog web URLs for a space, project, and repository.
//!
//! # URL layout
//!
//! ```text
//! https://{space}.{domain}                                   base
//! https://{space}.{domain}/git/{project}                     repository list
//! https://{space}.{domain}/git/{project}/{repo}              repository
//!   .../tree/{ref}  .../history/{ref}  .../network/{ref}
//!   .../blob/{ref}/{path}#{line}  .../commit/{hash}
//!   .../branches  .../tags
//!   .../pullRequests?q.statusId={n}  .../pullRequests/{id}
//!   .../pullRequests/add/{base}...{topic}
//! https://{space}.{domain}/find/{project}?condition.simpleSearch=true&...
//! https://{space}.{domain}/view/{issue}   .../add/{project}
//! ```
//!
//! Path segments are joined and cleaned like a POSIX path (duplicate slashes
//! collapse, `.` and `..` resolve) and are never percent-encoded.

use crate::core::line::LineSpec;
use crate::core::types::{ProjectIdentity, SpaceIdentity};

/// Fluent builder for Backlog URLs.
///
/// Every getter is a pure function of the builder's fields.
///
/// # Example
///
/// ```
/// use gitb::backlog::UrlBuilder;
///
/// let urls = UrlBuilder::new("backlog.com", "foo")
///     .with_project_key("BAR")
///     .with_repo_name("baz");
///
/// assert_eq!(urls.tree_url("master"), "https://foo.backlog.com/git/BAR/baz/tree/master");
/// assert_eq!(urls.pull_request_list_url(0), "https://foo.backlog.com/git/BAR/baz/pullRequests");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    domain: String,
    space_key: String,
    project_key: String,
    repo_name: String,
}

impl UrlBuilder {
    /// Create a builder for a space. Project and repository start empty.
    pub fn new(domain: impl Into<String>, space_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            space_key: space_key.into(),
            project_key: String::new(),
            repo_name: String::new(),
        }
    }

    /// Create a builder from extracted identities.
    pub fn from_identity(space: &SpaceIdentity, project: &ProjectIdentity) -> Self {
        Self::new(space.domain.as_str(), space.space_key.as_str())
            .with_project_key(project.project_key.as_str())
            .with_repo_name(project.repo_name.as_str())
    }

    /// Set the project key.
    pub fn with_project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = key.into();
        self
    }

    /// Set the repository name.
    pub fn with_repo_name(mut self, name: impl Into<String>) -> Self {
        self.repo_name = name.into();
        self
    }

    // =========================================================================
    // Bases
    // =========================================================================

    /// `{space}.{domain}`
    pub fn host(&self) -> String {
        format!("{}.{}", self.space_key, self.domain)
    }

    /// `https://{space}.{domain}`
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host())
    }

    /// Repository list of the project.
    pub fn git_base_url(&self) -> String {
        self.base_url() + &join_path(&["git", &self.project_key])
    }

    /// Top page of the repository.
    pub fn git_repo_base_url(&self) -> String {
        self.git_base_url() + &join_path(&[&self.repo_name])
    }

    // =========================================================================
    // Git pages
    // =========================================================================

    /// File (`blob`) or directory (`tree`) at a ref, with an optional line
    /// fragment.
    pub fn object_url(
        &self,
        ref_or_hash: &str,
        rel_path: &str,
        is_directory: bool,
        line: Option<LineSpec>,
    ) -> String {
        let kind = if is_directory { "tree" } else { "blob" };
        let fragment = line.map(|l| format!("#{}", l)).unwrap_or_default();
        self.git_repo_base_url() + &join_path(&[kind, ref_or_hash, rel_path]) + &fragment
    }

    /// Tree at a ref.
    pub fn tree_url(&self, ref_or_hash: &str) -> String {
        self.git_repo_base_url() + &join_path(&["tree", ref_or_hash])
    }

    /// Commit history at a ref.
    pub fn history_url(&self, ref_or_hash: &str) -> String {
        self.git_repo_base_url() + &join_path(&["history", ref_or_hash])
    }

    /// Network graph at a ref.
    pub fn network_url(&self, ref_or_hash: &str) -> String {
        self.git_repo_base_url() + &join_path(&["network", ref_or_hash])
    }

    /// A single commit.
    pub fn commit_url(&self, hash: &str) -> String {
        self.git_repo_base_url() + &join_path(&["commit", hash])
    }

    /// Branch list.
    pub fn branch_list_url(&self) -> String {
        self.git_repo_base_url() + &join_path(&["branches"])
    }

    /// Tag list.
    pub fn tag_list_url(&self) -> String {
        self.git_repo_base_url() + &join_path(&["tags"])
    }

    // =========================================================================
    // Pull requests
    // =========================================================================

    /// Pull request list, filtered by status id unless it is 0.
    pub fn pull_request_list_url(&self, status_id: u32) -> String {
        let query = if status_id > 0 {
            format!("?q.statusId={}", status_id)
        } else {
            String::new()
        };
        self.git_repo_base_url() + &join_path(&["pullRequests"]) + &query
    }

    /// A single pull request.
    pub fn pull_request_url(&self, id: &str) -> String {
        self.git_repo_base_url() + &join_path(&["pullRequests", id])
    }

    /// New pull request from `topic` into `base`. An empty base is kept as
    /// a leading `...`.
    pub fn add_pull_request_url(&self, base: &str, topic: &str) -> String {
        let range = format!("{}...{}", base, topic);
        self.git_repo_base_url() + &join_path(&["pullRequests", "add", &range])
    }

    // =========================================================================
    // Issues
    // =========================================================================

    /// Issue search for the project, one `condition.statusId` per id in
    /// input order.
    pub fn issue_list_url(&self, status_ids: &[u32]) -> String {
        let mut query = String::from("?condition.simpleSearch=true");
        for id in status_ids {
            query.push_str(&format!("&condition.statusId={}", id));
        }
        self.base_url() + &join_path(&["find", &self.project_key]) + &query
    }

    /// A single issue.
    pub fn issue_url(&self, issue_key: &str) -> String {
        self.base_url() + &join_path(&["view", issue_key])
    }

    /// New issue form for the project.
    pub fn add_issue_url(&self) -> String {
        self.base_url() + &join_path(&["add", &self.project_key])
    }
}

/// Join segments under a leading `/` and clean the result.
///
/// Empty and `.` components vanish, `..` removes the previous component
/// (never climbing above the root), and a trailing slash is dropped.
fn join_path(segments: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for component in segments.iter().flat_map(|s| s.split('/')) {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            c => parts.push(c),
        }
    }
    format!("/{}", parts.join("/"))
}
