//! Show command - render the dependency tree of open pull requests

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow, check, pr_link, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use prtree::error::Result;
use prtree::tree::TreeBuilder;
use std::path::Path;
use std::time::Duration;

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Trunk branch override (defaults to the repository's default branch)
    pub trunk: Option<String>,
    /// Explicit GitHub token
    pub token: Option<String>,
}

/// Run the show command
#[allow(clippy::future_not_send)]
pub async fn run_show(path: &Path, remote: Option<&str>, options: ShowOptions) -> Result<()> {
    let ctx = CommandContext::new(
        path,
        remote,
        options.trunk.as_deref(),
        options.token.as_deref(),
    )
    .await?;

    let current_branch = ctx.workspace.current_branch()?;
    println!("Your current branch is: {}", current_branch.accent());
    println!();

    let config = ctx.platform.config();
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Fetching open pull requests for {}...",
        format!("{}/{}", config.owner, config.repo).emphasis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let prs = ctx.platform.list_open_prs().await?;

    spinner.finish_with_message(format!(
        "{} {} open pull request(s)",
        check(),
        prs.len().accent()
    ));

    if prs.is_empty() {
        println!("{}", "No open pull requests.".muted());
        return Ok(());
    }

    let tree = TreeBuilder::new(&prs, ctx.trunk.as_str()).generate();
    println!();
    println!("{tree}");

    if let Some(pr) = prs.iter().find(|pr| pr.head_ref == current_branch) {
        println!();
        println!(
            "Current branch {} {} {}",
            current_branch.accent(),
            arrow(),
            pr_link(&format!("PR #{}: {}", pr.number, pr.title), &pr.html_url)
        );
        println!(
            "{}",
            "Run 'prtree update' to merge its chain from upstream.".muted()
        );
    }

    Ok(())
}
