//! backlog::pull_request
//!
//! Finds the pull request for the current branch from a remote ref listing.
//!
//! # Resolution
//!
//! Backlog publishes each pull request's tip as `refs/pull/<id>/head`. The
//! pull request for a branch is the one whose head ref points at the same
//! commit as the branch on the remote:
//!
//! 1. Look up the branch's hash in the listing (it must have been pushed).
//! 2. Collect the ids of every pull request ref with that hash.
//! 3. Pick the greatest id.
//!
//! Ids are compared as strings, so `"9"` beats `"10"`.

use super::BacklogError;
use crate::core::types::RefToHash;

const PULL_REQUEST_REF_PREFIX: &str = "refs/pull/";
const PULL_REQUEST_REF_SUFFIX: &str = "/head";

/// Check whether a ref has the form `refs/pull/<id>/head`.
///
/// # Example
///
/// ```
/// use gitb::backlog::is_pull_request_ref;
///
/// assert!(is_pull_request_ref("refs/pull/3/head"));
/// assert!(!is_pull_request_ref("refs/pull/3/merge"));
/// assert!(!is_pull_request_ref("refs/heads/main"));
/// ```
pub fn is_pull_request_ref(refname: &str) -> bool {
    pull_request_id(refname).is_some()
}

/// Extract `<id>` from `refs/pull/<id>/head`.
pub fn pull_request_id(refname: &str) -> Option<&str> {
    let id = refname
        .strip_prefix(PULL_REQUEST_REF_PREFIX)?
        .strip_suffix(PULL_REQUEST_REF_SUFFIX)?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

/// Find the pull request id whose head matches `branch_ref` on the remote.
///
/// # Errors
///
/// - [`BacklogError::BranchNotInRemote`] if `branch_ref` is not in `refs`
/// - [`BacklogError::PullRequestNotFound`] if no pull request ref matches
///
/// # Example
///
/// ```
/// use gitb::backlog::find_pull_request_id;
/// use gitb::core::types::RefToHash;
///
/// let mut refs = RefToHash::new();
/// refs.insert("refs/heads/patch-1".into(), "H1".into());
/// refs.insert("refs/pull/3/head".into(), "H1".into());
/// refs.insert("refs/heads/master".into(), "H2".into());
///
/// assert_eq!(find_pull_request_id(&refs, "refs/heads/patch-1").unwrap(), "3");
/// assert!(find_pull_request_id(&refs, "refs/heads/master").is_err());
/// ```
pub fn find_pull_request_id(refs: &RefToHash, branch_ref: &str) -> Result<String, BacklogError> {
    let target = refs
        .get(branch_ref)
        .ok_or_else(|| BacklogError::BranchNotInRemote {
            branch: branch_ref.to_string(),
        })?;

    let matching: Vec<&str> = refs
        .iter()
        .filter(|(_, hash)| *hash == target)
        .filter_map(|(refname, _)| pull_request_id(refname))
        .collect();

    log::debug!("pull requests at {}: {:?}", target, matching);

    matching
        .into_iter()
        .max()
        .map(String::from)
        .ok_or_else(|| BacklogError::PullRequestNotFound {
            branch: branch_ref.to_string(),
        })
}
