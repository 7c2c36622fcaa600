//! prtree binary entry point

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::show::{ShowOptions, run_show};
use cli::update::{UpdateOptions, run_update};
use std::path::PathBuf;

/// Visualize and update stacked GitHub pull requests
#[derive(Parser, Debug)]
#[command(name = "prtree")]
#[command(version, about = "Visualize and update stacked GitHub pull requests")]
struct Cli {
    /// Path to the repository (any directory inside it)
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Remote to use (defaults to origin when unambiguous)
    #[arg(long, global = true)]
    remote: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the dependency tree of open pull requests
    Show(ShowArgs),
    /// Merge each branch of the current branch's chain from its parent
    Update(UpdateArgs),
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Trunk branch (defaults to the repository's default branch)
    #[arg(long)]
    trunk: Option<String>,

    /// GitHub token (stored for later runs)
    #[arg(long)]
    token: Option<String>,
}

#[derive(Parser, Debug)]
struct UpdateArgs {
    /// Trunk branch (defaults to the repository's default branch)
    #[arg(long)]
    trunk: Option<String>,

    /// GitHub token (stored for later runs)
    #[arg(long)]
    token: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Show the merge plan without executing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => {
            run_show(
                &cli.repo,
                cli.remote.as_deref(),
                ShowOptions {
                    trunk: args.trunk,
                    token: args.token,
                },
            )
            .await?;
        }
        Commands::Update(args) => {
            run_update(
                &cli.repo,
                cli.remote.as_deref(),
                UpdateOptions {
                    trunk: args.trunk,
                    token: args.token,
                    yes: args.yes,
                    dry_run: args.dry_run,
                },
            )
            .await?;
        }
    }

    Ok(())
}
