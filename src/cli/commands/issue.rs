//! issue command - Open issue pages

use anyhow::Result;

use crate::backlog::BacklogRepository;
use crate::cli::args::IssueAction;
use crate::core::config::Config;

/// Open an issue page.
pub fn issue(backlog: &BacklogRepository<'_>, config: &Config, action: IssueAction) -> Result<()> {
    match action {
        IssueAction::List { status } => {
            let status = status.unwrap_or_else(|| config.issue_status().name().to_string());
            backlog.open_issue_list(&status)?;
        }
        IssueAction::Show => backlog.open_issue()?,
        IssueAction::Add => backlog.open_add_issue()?,
    }
    Ok(())
}
