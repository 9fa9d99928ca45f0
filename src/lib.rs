//! gitb - A command line tool for using Backlog's git comfortably
//!
//! gitb opens Backlog web pages for the repository you are working in: the
//! pull request for the current branch, the issue named in the branch, the
//! tree, history, or a single file at a ref. Subcommands it does not know are
//! passed through to `git`.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the facade)
//! - [`backlog`] - URL construction and the `BacklogRepository` facade
//! - [`core`] - Domain types, identifier extraction, statuses, and configuration
//! - [`git`] - Single interface for all Git operations
//! - [`browser`] - Opening (or printing) URLs
//! - [`exec`] - Foreground execution of external commands
//!
//! # Invariants
//!
//! 1. URLs are pure functions of the identifiers and arguments
//! 2. Only [`git`] reads repository state
//! 3. The remote ref listing is fetched live, never cached

pub mod backlog;
pub mod browser;
pub mod cli;
pub mod core;
pub mod exec;
pub mod git;
