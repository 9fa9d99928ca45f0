//! Property-based tests for identifier extraction and URL construction.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use gitb::backlog::{extract_issue_key, find_pull_request_id, UrlBuilder};
use gitb::core::identity::{extract_project_and_repo, extract_space_and_domain};
use gitb::core::line::LineSpec;
use gitb::core::types::{ProjectIdentity, RefToHash, SpaceIdentity};

/// Strategy for a single DNS label.
fn label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,10}"
}

/// Strategy for a two-label domain such as `backlog.com`.
fn domain() -> impl Strategy<Value = String> {
    (label(), prop_oneof![Just("com"), Just("jp"), Just("net")])
        .prop_map(|(name, tld)| format!("{}.{}", name, tld))
}

/// Strategy for Backlog project keys.
fn project_key() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,5}(_[A-Z0-9]{1,4}){0,2}"
}

/// Strategy for repository names.
fn repo_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,12}"
}

/// Strategy for branch or tag names, possibly with slashes.
fn ref_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}(/[a-z0-9][a-z0-9-]{0,8}){0,2}"
}

proptest! {
    /// HTTPS hosts carry the space key as their first label.
    #[test]
    fn https_host_yields_space_and_domain(space in label(), domain in domain()) {
        let host = format!("{}.{}", space, domain);
        prop_assert_eq!(extract_space_and_domain(&host), (space, domain));
    }

    /// SSH hosts have an extra `git` label that is not part of the domain.
    #[test]
    fn ssh_host_yields_space_and_domain(space in label(), domain in domain()) {
        let host = format!("{}.git.{}", space, domain);
        prop_assert_eq!(extract_space_and_domain(&host), (space, domain));
    }

    /// HTTPS and SSH remotes of the same repository give the same identifiers.
    #[test]
    fn path_forms_agree(project in project_key(), repo in repo_name()) {
        let expected = (project.clone(), repo.clone());
        prop_assert_eq!(
            extract_project_and_repo(&format!("/git/{}/{}.git", project, repo)),
            expected.clone()
        );
        prop_assert_eq!(
            extract_project_and_repo(&format!("/{}/{}.git", project, repo)),
            expected.clone()
        );
        prop_assert_eq!(
            extract_project_and_repo(&format!("/{}/{}", project, repo)),
            expected
        );
    }

    /// An issue key at the start of a branch name is found unchanged.
    #[test]
    fn issue_key_prefix_is_extracted(
        project in project_key(),
        number in 1u32..100_000,
        suffix in "[a-z][a-z-]{0,10}",
    ) {
        let key = format!("{}-{}", project, number);
        let branch = format!("{}-{}", key, suffix);
        prop_assert_eq!(extract_issue_key(&branch), Some(key.as_str()));
    }

    /// Lowercase branch names never contain an issue key.
    #[test]
    fn lowercase_branch_has_no_key(branch in "[a-z/_-]{0,30}") {
        prop_assert_eq!(extract_issue_key(&branch), None);
    }

    /// Every ref-based URL is the repository base plus a clean path.
    #[test]
    fn ref_urls_stay_under_repository(
        space in label(),
        domain in domain(),
        project in project_key(),
        repo in repo_name(),
        reference in ref_name(),
    ) {
        let urls = UrlBuilder::from_identity(
            &SpaceIdentity { space_key: space.clone(), domain: domain.clone() },
            &ProjectIdentity { project_key: project.clone(), repo_name: repo.clone() },
        );
        let base = format!("https://{}.{}/git/{}/{}", space, domain, project, repo);

        for (kind, url) in [
            ("tree", urls.tree_url(&reference)),
            ("history", urls.history_url(&reference)),
            ("network", urls.network_url(&reference)),
        ] {
            prop_assert_eq!(url, format!("{}/{}/{}", base, kind, reference));
        }
    }

    /// Valid ranges parse and print back the same way.
    #[test]
    fn increasing_range_is_valid(start in 1u32..10_000, len in 1u32..10_000) {
        let text = format!("{}-{}", start, start + len);
        let spec: LineSpec = text.parse().unwrap();
        prop_assert_eq!(spec, LineSpec::Range(start, start + len));
        prop_assert_eq!(spec.to_string(), text);
    }

    /// Ranges that do not increase are rejected.
    #[test]
    fn non_increasing_range_is_invalid(start in 1u32..10_000, back in 0u32..10_000) {
        let end = start.saturating_sub(back).max(1);
        let text = format!("{}-{}", start, end);
        prop_assert!(text.parse::<LineSpec>().is_err(), "{} accepted", text);
    }

    /// The chosen pull request is the greatest matching id as a string.
    #[test]
    fn pull_request_choice_is_string_maximum(ids in prop::collection::btree_set(1u32..1000, 1..6)) {
        let mut refs = RefToHash::new();
        refs.insert("refs/heads/topic".to_string(), "H1".to_string());
        refs.insert("refs/pull/99999/head".to_string(), "H2".to_string());
        for id in &ids {
            refs.insert(format!("refs/pull/{}/head", id), "H1".to_string());
        }

        let expected = ids.iter().map(|id| id.to_string()).max().unwrap();
        prop_assert_eq!(find_pull_request_id(&refs, "refs/heads/topic").unwrap(), expected);
    }
}
