//! git::ls_remote
//!
//! Parses `git ls-remote` output into a [`RefToHash`] map.
//!
//! Each line of the listing is `<hash>\t<ref>`. Lines without a tab are
//! skipped. When a ref appears twice the later line wins.

use crate::core::types::RefToHash;

/// Parse raw `git ls-remote` output.
///
/// # Example
///
/// ```
/// use gitb::git::parse_ls_remote;
///
/// let refs = parse_ls_remote("abc123\trefs/heads/main\ndef456\trefs/pull/3/head\n");
/// assert_eq!(refs.get("refs/heads/main").map(String::as_str), Some("abc123"));
/// assert_eq!(refs.get("refs/pull/3/head").map(String::as_str), Some("def456"));
/// ```
pub fn parse_ls_remote(output: &str) -> RefToHash {
    output
        .lines()
        .filter_map(|line| {
            let (hash, refname) = line.split_once('\t')?;
            let (hash, refname) = (hash.trim(), refname.trim());
            if hash.is_empty() || refname.is_empty() {
                return None;
            }
            Some((refname.to_string(), hash.to_string()))
        })
        .collect()
}
