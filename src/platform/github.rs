//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    /// Token for raw HTTP requests (repository metadata)
    token: String,
    /// HTTP client for raw requests (repository metadata)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("prtree")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: PlatformConfig { owner, repo, host },
            token: token.to_string(),
            http_client,
            api_host,
        })
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        is_draft: pr.draft.unwrap_or(false),
        updated_at: pr.updated_at,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequest>> {
        debug!("listing open PRs");

        let mut page = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(100)
            .send()
            .await?;

        let mut result: Vec<PullRequest> = Vec::new();
        loop {
            result.extend(page.items.iter().map(pr_from_octocrab));

            match self
                .client
                .get_page::<octocrab::models::pulls::PullRequest>(&page.next)
                .await?
            {
                Some(next) => page = next,
                None => break,
            }
        }

        debug!(count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn default_branch(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct RepoMetadata {
            default_branch: String,
        }

        debug!("fetching default branch");

        let url = format!(
            "https://{}/repos/{}/{}",
            self.api_host, self.config.owner, self.config.repo
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch repository: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to fetch repository: status {}",
                response.status()
            )));
        }

        let metadata: RepoMetadata = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse repository: {e}")))?;

        debug!(default_branch = %metadata.default_branch, "fetched default branch");
        Ok(metadata.default_branch)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
