//! backlog
//!
//! Backlog URL construction and the "open X" facade.
//!
//! # Architecture
//!
//! ```text
//! Repository (git) ──► BacklogRepository ──► UrlBuilder ──► Browser
//!                         │
//!                         ├─ pull_request: refs/pull/<id>/head resolution
//!                         └─ issue_key: keys in branch names
//! ```
//!
//! Nothing here touches git or the network directly. Git state comes
//! through [`crate::git::Repository`] and URLs leave through
//! [`crate::browser::Browser`].

mod error;
mod issue_key;
mod pull_request;
mod repository;
mod url;

pub use error::BacklogError;
pub use issue_key::extract_issue_key;
pub use pull_request::{find_pull_request_id, is_pull_request_ref, pull_request_id};
pub use repository::BacklogRepository;
pub use url::UrlBuilder;
