//! core::status
//!
//! Pull request and issue status filters.
//!
//! Backlog identifies statuses by small integers. The CLI accepts the
//! human-readable names below and converts them to the ids used in list-page
//! query strings.
//!
//! | Name          | Pull request id | Issue id(s) |
//! |---------------|-----------------|-------------|
//! | `all`         | 0 (no filter)   | (no filter) |
//! | `open`        | 1               | 1           |
//! | `in_progress` | -               | 2           |
//! | `resolved`    | -               | 3           |
//! | `closed`      | 2               | 4           |
//! | `merged`      | 3               | -           |
//! | `not_closed`  | -               | 1, 2, 3     |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A status name that is not in the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} status '{value}'. choose from [{}]", .choices.join(", "))]
pub struct InvalidStatus {
    /// What the status was for ("pull request" or "issue").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted names, in declaration order.
    pub choices: Vec<&'static str>,
}

/// Pull request status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrStatus {
    /// No filter.
    All,
    /// Open pull requests.
    #[default]
    Open,
    /// Closed without merging.
    Closed,
    /// Merged.
    Merged,
}

impl PrStatus {
    const ALL: [PrStatus; 4] = [
        PrStatus::All,
        PrStatus::Open,
        PrStatus::Closed,
        PrStatus::Merged,
    ];

    /// Service-side status id. `All` is 0, which means "no filter".
    pub fn id(self) -> u32 {
        match self {
            PrStatus::All => 0,
            PrStatus::Open => 1,
            PrStatus::Closed => 2,
            PrStatus::Merged => 3,
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PrStatus::All => "all",
            PrStatus::Open => "open",
            PrStatus::Closed => "closed",
            PrStatus::Merged => "merged",
        }
    }

    /// All accepted names, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl FromStr for PrStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| InvalidStatus {
                kind: "pull request",
                value: s.to_string(),
                choices: Self::names(),
            })
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Issue status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueStatus {
    /// No filter.
    All,
    /// Open.
    Open,
    /// In progress.
    InProgress,
    /// Resolved.
    Resolved,
    /// Closed.
    Closed,
    /// Open, in progress, or resolved.
    #[default]
    NotClosed,
}

impl IssueStatus {
    const ALL: [IssueStatus; 6] = [
        IssueStatus::All,
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
        IssueStatus::NotClosed,
    ];

    /// Service-side status id of a single status.
    ///
    /// `All` (0) and `NotClosed` (5) are not real service statuses; use
    /// [`IssueStatus::status_ids`] to build query filters.
    pub fn id(self) -> u32 {
        match self {
            IssueStatus::All => 0,
            IssueStatus::Open => 1,
            IssueStatus::InProgress => 2,
            IssueStatus::Resolved => 3,
            IssueStatus::Closed => 4,
            IssueStatus::NotClosed => 5,
        }
    }

    /// Status ids to filter an issue list by.
    ///
    /// `All` is empty, `NotClosed` expands to open, in progress, and
    /// resolved in that order, every other status is its own id.
    ///
    /// # Example
    ///
    /// ```
    /// use gitb::core::status::IssueStatus;
    ///
    /// assert!(IssueStatus::All.status_ids().is_empty());
    /// assert_eq!(IssueStatus::NotClosed.status_ids(), vec![1, 2, 3]);
    /// assert_eq!(IssueStatus::Closed.status_ids(), vec![4]);
    /// ```
    pub fn status_ids(self) -> Vec<u32> {
        match self {
            IssueStatus::All => Vec::new(),
            IssueStatus::NotClosed => vec![
                IssueStatus::Open.id(),
                IssueStatus::InProgress.id(),
                IssueStatus::Resolved.id(),
            ],
            status => vec![status.id()],
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            IssueStatus::All => "all",
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
            IssueStatus::NotClosed => "not_closed",
        }
    }

    /// All accepted names, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl FromStr for IssueStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| InvalidStatus {
                kind: "issue",
                value: s.to_string(),
                choices: Self::names(),
            })
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
