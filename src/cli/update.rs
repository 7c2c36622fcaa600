//! Update command - merge the current branch's chain from its parents

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow, check, spinner_style};
use anstream::println;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use prtree::error::{Error, Result};
use prtree::merge::{ChainExecutionResult, ChainPlan, create_chain_plan, execute_chain};
use prtree::tree::TreeBuilder;
use std::path::Path;
use std::time::Duration;

/// Options for the update command
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Trunk branch override (defaults to the repository's default branch)
    pub trunk: Option<String>,
    /// Explicit GitHub token
    pub token: Option<String>,
    /// Skip the confirmation prompt
    pub yes: bool,
    /// Show the merge plan without executing it
    pub dry_run: bool,
}

/// Run the update command
#[allow(clippy::too_many_lines, clippy::future_not_send)]
pub async fn run_update(path: &Path, remote: Option<&str>, options: UpdateOptions) -> Result<()> {
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

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Fetching open pull requests...".to_string());
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

    let Some(chain) = tree.chain_to(&current_branch) else {
        println!(
            "{}",
            format!("No dependent pull request found for {current_branch}.").muted()
        );
        return Ok(());
    };

    println!();
    println!("{chain}");
    println!();

    let plan = create_chain_plan(&chain.branch_sequence(), &ctx.remote_name);

    if plan.is_empty() {
        println!("{}", "Nothing to update.".muted());
        return Ok(());
    }

    if options.dry_run {
        report_update_dry_run(&plan);
        return Ok(());
    }

    if !options.yes {
        let prompt = format!(
            "Update {} branch(es) from {}?",
            plan.merge_count(),
            ctx.trunk
        );
        if !Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching from {}...", ctx.remote_name.emphasis()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    ctx.workspace.git_fetch(&ctx.remote_name)?;

    spinner.finish_with_message(format!(
        "{} Fetched from {}",
        check(),
        ctx.remote_name.emphasis()
    ));

    println!(
        "{} {}",
        "Updating".emphasis(),
        format!("{} branch(es)...", plan.merge_count()).accent()
    );

    let progress = CliProgress::compact();
    let result = execute_chain(&plan, &ctx.workspace, &progress).await?;

    print_update_summary(&result);

    Ok(())
}

/// Report what would be done (dry run)
fn report_update_dry_run(plan: &ChainPlan) {
    println!("{}:", "Update plan".emphasis());
    println!();

    for step in &plan.steps {
        println!("  {} {step}", arrow());
    }

    println!();
    println!("{}", "Run without --dry-run to execute.".muted());
}

/// Print the chain execution summary
fn print_update_summary(result: &ChainExecutionResult) {
    println!();
    if result.is_success() {
        println!("{} Chain updated!", check());
    } else {
        println!("{} Chain partially updated", "!".warn());
    }

    if result.has_merges() {
        println!("   Merged: {}", result.merged_branches.join(", ").accent());
    }

    if let Some(ref failed) = result.failed_branch {
        println!("   {} {}", "Failed:".warn(), failed.warn());
        if let Some(ref msg) = result.error_message {
            println!("          {}", msg.muted());
        }
        println!(
            "{}",
            "   Remaining branches were not updated. Resolve the merge and run again.".muted()
        );
    }
}
