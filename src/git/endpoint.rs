//! git::endpoint
//!
//! Parses git remote URLs into a [`RemoteEndpoint`].
//!
//! # Supported formats
//!
//! - `https://<host>[:port]/<path>` and `http://...`
//! - `ssh://[user@]<host>[:port]/<path>` (also `git+ssh://`, `ssh+git://`)
//! - `git://<host>/<path>`
//! - scp-like `[user@]<host>:<path>`
//!
//! Local paths and `file://` URLs have no host and are rejected.
//!
//! # Normalisation
//!
//! Hosts are lowercased in every form, so `FOO.backlog.com` and
//! `ssh://git@FOO.git.backlog.com` give the same space key. URL paths are
//! percent-decoded (`my%20repo` → `my repo`). scp-like paths are taken as
//! written.

use url::Url;

use super::GitError;
use crate::core::types::RemoteEndpoint;

const SCHEMES: &[&str] = &["http", "https", "ssh", "git", "git+ssh", "ssh+git"];

/// Parse a remote URL into its host and path.
///
/// # Errors
///
/// [`GitError::MalformedEndpoint`] if the URL has no host, uses an
/// unsupported scheme, or has an empty path.
///
/// # Example
///
/// ```
/// use gitb::git::parse_endpoint;
///
/// let ep = parse_endpoint("https://foo.backlog.com/git/BAR/baz.git").unwrap();
/// assert_eq!(ep.host(), "foo.backlog.com");
/// assert_eq!(ep.path(), "/git/BAR/baz.git");
///
/// let ep = parse_endpoint("foo@foo.git.backlog.com:/BAR/baz.git").unwrap();
/// assert_eq!(ep.host(), "foo.git.backlog.com");
/// assert_eq!(ep.path(), "/BAR/baz.git");
/// ```
pub fn parse_endpoint(remote_url: &str) -> Result<RemoteEndpoint, GitError> {
    let remote_url = remote_url.trim();
    let endpoint = if remote_url.contains("://") {
        parse_url(remote_url)
    } else {
        parse_scp_like(remote_url)
    };

    match endpoint {
        Some(ep) => {
            log::debug!("remote {} -> host {}, path {}", remote_url, ep.host(), ep.path());
            Ok(ep)
        }
        None => Err(GitError::MalformedEndpoint {
            url: remote_url.to_string(),
        }),
    }
}

fn parse_url(remote_url: &str) -> Option<RemoteEndpoint> {
    let url = Url::parse(remote_url).ok()?;
    if !SCHEMES.contains(&url.scheme()) {
        return None;
    }
    let host = url.host_str().filter(|h| !h.is_empty())?;
    let path = urlencoding::decode(url.path()).ok()?;
    if path.is_empty() || path == "/" {
        return None;
    }
    Some(RemoteEndpoint::new(host.to_ascii_lowercase(), path.into_owned()))
}

fn parse_scp_like(remote_url: &str) -> Option<RemoteEndpoint> {
    let (authority, path) = remote_url.split_once(':')?;

    // A slash before the colon means a local path such as ./dir:name.
    if authority.contains('/') || path.is_empty() {
        return None;
    }

    let host = authority.rsplit('@').next()?;
    // A one-letter "host" is a Windows drive letter (C:\repo).
    if host.is_empty() || (host.len() == 1 && path.starts_with('\\')) {
        return None;
    }

    Some(RemoteEndpoint::new(host.to_ascii_lowercase(), path))
}
