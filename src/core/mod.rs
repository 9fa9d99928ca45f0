//! core
//!
//! Core domain types and rules for gitb.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RemoteEndpoint, SpaceIdentity, ProjectIdentity
//! - [`identity`] - Space, domain, project, and repository extraction
//! - [`status`] - Pull request and issue status filters
//! - [`line`] - Line specifiers for file views
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Nothing here performs I/O except config loading

pub mod config;
pub mod identity;
pub mod line;
pub mod status;
pub mod types;
