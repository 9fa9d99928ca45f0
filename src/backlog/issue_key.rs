//! backlog::issue_key
//!
//! Issue keys embedded in branch names (`BLG-1234-patch-1` → `BLG-1234`).

use std::sync::LazyLock;

use regex::Regex;

static ISSUE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z0-9]+(?:_[A-Z0-9]+)*-[0-9]+").unwrap());

/// Return the first issue key in `branch`, if any.
///
/// A key is a project key (uppercase letters, digits, underscore-separated
/// groups), a dash, and a number.
///
/// # Example
///
/// ```
/// use gitb::backlog::extract_issue_key;
///
/// assert_eq!(extract_issue_key("BLG-1234-patch-1"), Some("BLG-1234"));
/// assert_eq!(extract_issue_key("feature/MY_PROJ-7"), Some("MY_PROJ-7"));
/// assert_eq!(extract_issue_key("patch-1"), None);
/// ```
pub fn extract_issue_key(branch: &str) -> Option<&str> {
    ISSUE_KEY.find(branch).map(|m| m.as_str())
}
