//! core::identity
//!
//! Splits remote endpoint components into Backlog identifiers.
//!
//! Backlog remotes come in two shapes:
//!
//! - HTTPS: `https://foo.backlog.com/git/BAR/baz.git`
//! - SSH: `foo@foo.git.backlog.com:/BAR/baz.git`
//!
//! Both resolve to space `foo`, domain `backlog.com`, project `BAR`, and
//! repository `baz`. Only the first label and the last two labels of the host
//! matter, so the extra `git` label of SSH hosts needs no special handling.
//!
//! Neither function validates its input. Malformed hosts or paths produce
//! empty or partial identifiers rather than errors.

/// Split a remote host into `(space_key, domain)`.
///
/// The domain is the last two dot-separated labels; the space key is the
/// first label. A host with a single label yields that label for both.
///
/// # Example
///
/// ```
/// use gitb::core::identity::extract_space_and_domain;
///
/// assert_eq!(
///     extract_space_and_domain("foo.backlog.com"),
///     ("foo".to_string(), "backlog.com".to_string())
/// );
/// assert_eq!(
///     extract_space_and_domain("bar.git.backlog.jp"),
///     ("bar".to_string(), "backlog.jp".to_string())
/// );
/// ```
pub fn extract_space_and_domain(host: &str) -> (String, String) {
    let labels: Vec<&str> = host.split('.').collect();
    let space_key = labels.first().copied().unwrap_or_default().to_string();
    let domain_start = labels.len().saturating_sub(2);
    let domain = labels[domain_start..].join(".");
    (space_key, domain)
}

/// Split a remote path into `(project_key, repo_name)`.
///
/// A leading `/git` segment is dropped, then the first segment is the
/// project key and the second, minus any `.git` suffix, is the repository.
/// Missing segments come back as empty strings.
///
/// # Example
///
/// ```
/// use gitb::core::identity::extract_project_and_repo;
///
/// assert_eq!(
///     extract_project_and_repo("/git/FOO/bar.git"),
///     ("FOO".to_string(), "bar".to_string())
/// );
/// assert_eq!(
///     extract_project_and_repo("/FOO/bar.git"),
///     ("FOO".to_string(), "bar".to_string())
/// );
/// ```
pub fn extract_project_and_repo(path: &str) -> (String, String) {
    let path = strip_git_segment(path);
    let mut segments = path.trim_start_matches('/').split('/');

    let project_key = segments.next().unwrap_or_default().to_string();
    let repo = segments.next().unwrap_or_default();
    let repo_name = repo.strip_suffix(".git").unwrap_or(repo).to_string();

    (project_key, repo_name)
}

/// Remove a leading `/git` path segment, leaving e.g. `/gitlab/...` alone.
fn strip_git_segment(path: &str) -> &str {
    match path.strip_prefix("/git") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    mod space_and_domain {
        use super::*;

        #[test]
        fn https_hosts() {
            assert_eq!(extract_space_and_domain("foo.backlog.com"), pair("foo", "backlog.com"));
            assert_eq!(extract_space_and_domain("foo.backlog.jp"), pair("foo", "backlog.jp"));
            assert_eq!(
                extract_space_and_domain("foo.backlogtool.com"),
                pair("foo", "backlogtool.com")
            );
        }

        #[test]
        fn ssh_hosts_with_git_label() {
            assert_eq!(
                extract_space_and_domain("bar.git.backlog.com"),
                pair("bar", "backlog.com")
            );
            assert_eq!(
                extract_space_and_domain("bar.git.backlog.jp"),
                pair("bar", "backlog.jp")
            );
            assert_eq!(
                extract_space_and_domain("bar.git.backlogtool.com"),
                pair("bar", "backlogtool.com")
            );
        }

        #[test]
        fn single_label_host() {
            assert_eq!(extract_space_and_domain("localhost"), pair("localhost", "localhost"));
        }

        #[test]
        fn empty_host() {
            assert_eq!(extract_space_and_domain(""), pair("", ""));
        }
    }

    mod project_and_repo {
        use super::*;

        #[test]
        fn ssh_path() {
            assert_eq!(extract_project_and_repo("/FOO/bar.git"), pair("FOO", "bar"));
        }

        #[test]
        fn https_path() {
            assert_eq!(extract_project_and_repo("/git/FOO/bar.git"), pair("FOO", "bar"));
        }

        #[test]
        fn without_git_suffix() {
            assert_eq!(extract_project_and_repo("/git/FOO/bar"), pair("FOO", "bar"));
        }

        #[test]
        fn without_leading_slash() {
            assert_eq!(extract_project_and_repo("FOO/bar.git"), pair("FOO", "bar"));
        }

        #[test]
        fn project_starting_with_git_is_kept() {
            assert_eq!(extract_project_and_repo("/gitlab/bar.git"), pair("gitlab", "bar"));
        }

        #[test]
        fn missing_repo_segment() {
            assert_eq!(extract_project_and_repo("/git/FOO"), pair("FOO", ""));
            assert_eq!(extract_project_and_repo("/"), pair("", ""));
        }
    }
}
