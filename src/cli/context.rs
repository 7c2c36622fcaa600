//! Shared command context for CLI commands
//!
//! Extracts the setup code shared by the show and update commands.

use crate::cli::style::Stylize;
use anstream::println;
use prtree::auth::{AuthSource, GitHubAuthConfig, get_github_auth};
use prtree::config::{load_config, save_config};
use prtree::error::{Error, Result};
use prtree::platform::{PlatformService, create_platform_service, parse_repo_info};
use prtree::repo::{GitWorkspace, select_remote};
use std::path::Path;
use tracing::debug;

/// Shared context for CLI commands that talk to GitHub
///
/// Encapsulates the common setup:
/// - Opening the git workspace
/// - Selecting and validating the remote
/// - Resolving the token and creating the platform service
/// - Resolving the trunk branch
pub struct CommandContext {
    /// The git workspace
    pub workspace: GitWorkspace,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// Selected remote name
    pub remote_name: String,
    /// Trunk branch, from the override or the repository's default branch
    pub trunk: String,
}

impl CommandContext {
    /// Create a new command context
    #[allow(clippy::future_not_send)]
    pub async fn new(
        path: &Path,
        remote: Option<&str>,
        trunk: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self> {
        let workspace = GitWorkspace::open(path)?;

        let remotes = workspace.git_remotes()?;
        let remote_name = select_remote(&remotes, remote)?;

        let remote_info = remotes
            .iter()
            .find(|r| r.name == remote_name)
            .ok_or_else(|| Error::RemoteNotFound(remote_name.clone()))?;

        let platform_config = parse_repo_info(&remote_info.url)?;

        let auth = resolve_token(token)?;
        debug!(source = ?auth.source, "resolved GitHub token");

        let platform = create_platform_service(&platform_config, &auth.token)?;

        let trunk = match trunk {
            Some(name) => name.to_string(),
            None => platform.default_branch().await?,
        };

        Ok(Self {
            workspace,
            platform,
            remote_name,
            trunk,
        })
    }
}

/// Resolve the GitHub token, prompting as a last resort.
///
/// Flag and prompted tokens are persisted to the config file so later runs
/// don't have to supply them again; persistence failures only warn.
fn resolve_token(passed: Option<&str>) -> Result<GitHubAuthConfig> {
    let config_base = dirs::config_dir();

    if let Some(token) = passed {
        persist_token(config_base.as_deref(), token);
        return Ok(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    if let Some(base) = config_base.as_deref() {
        if let Some(token) = load_config(base)?.token {
            return Ok(GitHubAuthConfig {
                token,
                source: AuthSource::Stored,
            });
        }
    }

    if let Some(auth) = get_github_auth(None) {
        return Ok(auth);
    }

    let entered = dialoguer::Password::new()
        .with_prompt("GitHub token")
        .interact()
        .map_err(|e| Error::Auth(format!("failed to read token: {e}")))?;

    let token = entered.trim().to_string();
    if token.is_empty() {
        return Err(Error::Auth("no token provided".to_string()));
    }

    persist_token(config_base.as_deref(), &token);

    Ok(GitHubAuthConfig {
        token,
        source: AuthSource::Prompt,
    })
}

fn persist_token(base: Option<&Path>, token: &str) {
    let Some(base) = base else { return };

    let mut state = load_config(base).unwrap_or_default();
    state.set_token(token);

    if let Err(e) = save_config(base, &state) {
        println!("{}", format!("Warning: failed to store token: {e}").warn());
    }
}
