//! GitHub token resolution

use crate::auth::AuthSource;
use std::process::Command;
use tracing::debug;

/// A resolved GitHub token and where it came from
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// The personal access token
    pub token: String,
    /// Where the token was found
    pub source: AuthSource,
}

/// Resolve a GitHub token without prompting.
///
/// Order: explicit token, then `GITHUB_TOKEN`/`GH_TOKEN`, then `gh auth
/// token`. Returns `None` when nothing non-interactive is available; the
/// CLI layer decides whether to prompt.
pub fn get_github_auth(passed: Option<&str>) -> Option<GitHubAuthConfig> {
    if let Some(token) = passed {
        return Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    if let Some(token) = env_token() {
        debug!("using token from environment");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    if let Some(token) = gh_cli_token() {
        debug!("using token from gh CLI");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    None
}

fn env_token() -> Option<String> {
    first_usable([std::env::var("GITHUB_TOKEN"), std::env::var("GH_TOKEN")].into_iter())
}

fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// First candidate that resolved to a non-empty value.
fn first_usable(
    candidates: impl Iterator<Item = std::result::Result<String, std::env::VarError>>,
) -> Option<String> {
    candidates
        .filter_map(std::result::Result::ok)
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
