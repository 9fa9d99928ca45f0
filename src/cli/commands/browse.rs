//! browse command - Open repository pages

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::backlog::BacklogRepository;
use crate::cli::args::BrowseTarget;
use crate::cli::Context;

/// Open a repository page.
pub fn browse(ctx: &Context, backlog: &BacklogRepository<'_>, target: BrowseTarget) -> Result<()> {
    match target {
        BrowseTarget::Repo => backlog.open_repository_list()?,
        BrowseTarget::Branch => backlog.open_branch_list()?,
        BrowseTarget::Tag => backlog.open_tag_list()?,
        BrowseTarget::Tree { reference } => backlog.open_tree(reference.as_deref())?,
        BrowseTarget::History { reference } => backlog.open_history(reference.as_deref())?,
        BrowseTarget::Network { reference } => backlog.open_network(reference.as_deref())?,
        BrowseTarget::Commit { hash } => backlog.open_commit(hash.as_deref())?,
        BrowseTarget::Show {
            path,
            line,
            reference,
        } => {
            let path = resolve_path(&ctx.working_dir()?, &path)?;
            let is_directory = path.is_dir();
            backlog.open_object(reference.as_deref(), &path, is_directory, line.as_deref())?;
        }
    }
    Ok(())
}

/// Absolute, symlink-free form of `path` taken relative to `cwd`.
fn resolve_path(cwd: &Path, path: &Path) -> Result<PathBuf> {
    let joined = cwd.join(path);
    std::fs::canonicalize(&joined).with_context(|| format!("cannot access {}", path.display()))
}
