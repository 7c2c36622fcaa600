//! Shared test fixtures
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

pub mod mock_platform;

pub use mock_platform::MockPlatformService;

use prtree::types::{PlatformConfig, PullRequest};

/// Platform config for a github.com test repository
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}

/// A minimal PR record with just head and base refs
pub fn make_pr(head: &str, base: &str) -> PullRequest {
    PullRequest::from_refs(head, base)
}

/// A numbered PR with title and URL, shaped like the API would return it
pub fn make_api_pr(number: u64, head: &str, base: &str, title: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: format!("https://github.com/owner/repo/pull/{number}"),
        base_ref: base.to_string(),
        head_ref: head.to_string(),
        title: title.to_string(),
        is_draft: false,
        updated_at: None,
    }
}

/// PRs forming a linear stack: trunk <- first <- second <- ...
pub fn make_stack(trunk: &str, branches: &[&str]) -> Vec<PullRequest> {
    let mut prs = Vec::new();
    let mut base = trunk;
    for &branch in branches {
        prs.push(make_pr(branch, base));
        base = branch;
    }
    prs
}
