//! Remote URL parsing
//!
//! Turns a git remote URL into [`PlatformConfig`] coordinates. Accepts HTTPS
//! and scp-style SSH URLs. github.com maps to the default host; any other
//! host is treated as GitHub Enterprise, except for URLs that are clearly
//! GitLab, which are rejected up front.

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Matches `git@host:path` and `ssh://git@host/path` remotes.
static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?git@(?P<host>[^:/]+)[:/](?P<path>.+)$")
        .unwrap_or_else(|e| panic!("invalid ssh remote pattern: {e}"))
});

/// Parse a remote URL into repository coordinates.
pub fn parse_repo_info(remote_url: &str) -> Result<PlatformConfig> {
    let trimmed = remote_url.trim().trim_end_matches('/');

    if let Some(captures) = SSH_REMOTE.captures(trimmed) {
        let host = &captures["host"];
        let path = &captures["path"];
        return config_from_parts(host, path, remote_url);
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            let host = url
                .host_str()
                .ok_or_else(|| Error::UnsupportedRemote(remote_url.to_string()))?;
            return config_from_parts(host, url.path().trim_matches('/'), remote_url);
        }
    }

    Err(Error::NoSupportedRemotes)
}

fn config_from_parts(host: &str, path: &str, remote_url: &str) -> Result<PlatformConfig> {
    if host.contains("gitlab") {
        return Err(Error::UnsupportedRemote(format!(
            "{remote_url} (GitLab remotes are not supported)"
        )));
    }

    let path = path.trim_matches('/').trim_end_matches(".git");
    let (owner, repo) = path
        .rsplit_once('/')
        .ok_or_else(|| Error::UnsupportedRemote(remote_url.to_string()))?;

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::UnsupportedRemote(remote_url.to_string()));
    }

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: if host == "github.com" {
            None
        } else {
            Some(host.to_string())
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_host_is_preserved() {
        let config = parse_repo_info("git@github.example.com:team/tool.git").unwrap();
        assert_eq!(config.host.as_deref(), Some("github.example.com"));
        assert_eq!(config.owner, "team");
        assert_eq!(config.repo, "tool");
    }

    #[test]
    fn github_com_maps_to_default_host() {
        let config = parse_repo_info("https://github.com/owner/repo.git").unwrap();
        assert_eq!(config.host, None);
    }
}
