//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2` or runs the `git` binary for repository state. (Passing an unknown
//! subcommand through to git lives in [`crate::exec`].)
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - HEAD name, short name, and commit
//! - Remote URL lookup and endpoint parsing
//! - Live remote ref listing (`git ls-remote`)
//!
//! # Example
//!
//! ```ignore
//! use gitb::git::{LocalRepository, Repository};
//! use std::path::Path;
//!
//! let repo = LocalRepository::open(Path::new("."), "origin")?;
//! println!("{} on {}", repo.head_short_name(), repo.remote_endpoint_host());
//! let refs = repo.ls_remote()?;
//! ```

mod endpoint;
mod interface;
mod ls_remote;
pub mod mock;
mod repository;

pub use endpoint::parse_endpoint;
pub use interface::{Git, GitError};
pub use ls_remote::parse_ls_remote;
pub use repository::{LocalRepository, Repository};
