//! pr command - Open pull request pages

use anyhow::Result;

use crate::backlog::BacklogRepository;
use crate::cli::args::PrAction;
use crate::core::config::Config;

/// Open a pull request page.
///
/// `list` without `--status` uses the configured default.
pub fn pr(backlog: &BacklogRepository<'_>, config: &Config, action: PrAction) -> Result<()> {
    match action {
        PrAction::List { status } => {
            let status = status.unwrap_or_else(|| config.pr_status().name().to_string());
            backlog.open_pull_request_list(&status)?;
        }
        PrAction::Show => backlog.open_pull_request()?,
        PrAction::Add { base, topic } => {
            backlog.open_add_pull_request(base.as_deref(), topic.as_deref())?
        }
    }
    Ok(())
}
