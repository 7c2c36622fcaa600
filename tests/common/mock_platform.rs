//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use prtree::error::{Error, Result};
use prtree::platform::PlatformService;
use prtree::types::{PlatformConfig, PullRequest};
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable PR list and default branch
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    open_prs: Mutex<Vec<PullRequest>>,
    default_branch_response: Mutex<String>,
    // Call tracking
    list_calls: Mutex<u32>,
    default_branch_calls: Mutex<u32>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            open_prs: Mutex::new(Vec::new()),
            default_branch_response: Mutex::new("main".to_string()),
            list_calls: Mutex::new(0),
            default_branch_calls: Mutex::new(0),
            error_on_list: Mutex::new(None),
        }
    }

    /// Set the PR list returned by `list_open_prs`
    pub fn set_open_prs(&self, prs: Vec<PullRequest>) {
        *self.open_prs.lock().unwrap() = prs;
    }

    /// Set the default branch returned by `default_branch`
    pub fn set_default_branch(&self, name: &str) {
        *self.default_branch_response.lock().unwrap() = name.to_string();
    }

    /// Make `list_open_prs` return an error
    pub fn fail_list_prs(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// How many times `list_open_prs` was called
    pub fn list_call_count(&self) -> u32 {
        *self.list_calls.lock().unwrap()
    }

    /// How many times `default_branch` was called
    pub fn default_branch_call_count(&self) -> u32 {
        *self.default_branch_calls.lock().unwrap()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequest>> {
        *self.list_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_list.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }

        Ok(self.open_prs.lock().unwrap().clone())
    }

    async fn default_branch(&self) -> Result<String> {
        *self.default_branch_calls.lock().unwrap() += 1;
        Ok(self.default_branch_response.lock().unwrap().clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
