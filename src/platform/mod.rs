//! Platform services for GitHub
//!
//! Provides the interface through which the tree builder receives its pull
//! request records. Only GitHub (and GitHub Enterprise hosts) is supported;
//! the core never sees anything but normalized [`PullRequest`] values.

mod detection;
mod github;

pub use detection::parse_repo_info;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Platform service trait for pull request queries
///
/// Abstracts the hosting API so the CLI pipeline can be exercised against a
/// mock in tests.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List all open pull requests for the repository
    async fn list_open_prs(&self) -> Result<Vec<PullRequest>>;

    /// The repository's default branch (the tree's trunk unless overridden)
    async fn default_branch(&self) -> Result<String>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

/// Create the platform service for a parsed remote.
pub fn create_platform_service(
    config: &PlatformConfig,
    token: &str,
) -> Result<Box<dyn PlatformService>> {
    let service = GitHubService::new(
        token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?;
    Ok(Box::new(service))
}
