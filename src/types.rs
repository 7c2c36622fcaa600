//! Core types for prtree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request, normalized from the hosting API
///
/// The tree builder only consumes `head_ref` and `base_ref`; the remaining
/// fields feed the CLI's summary output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name (the branch this PR targets)
    pub base_ref: String,
    /// Head branch name (the branch this PR ships)
    pub head_ref: String,
    /// PR title
    pub title: String,
    /// Whether the PR is a draft
    pub is_draft: bool,
    /// When the PR was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Build a bare head/base record, the minimum the tree builder needs.
    pub fn from_refs(head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            number: 0,
            html_url: String::new(),
            base_ref: base.into(),
            head_ref: head.into(),
            title: String::new(),
            is_draft: false,
            updated_at: None,
        }
    }
}

/// A git remote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitRemote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// Remote URL
    pub url: String,
}

/// Repository coordinates parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
