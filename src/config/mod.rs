//! Persistent configuration
//!
//! A small TOML file under the user's config directory keeps the GitHub
//! token between runs, so it only has to be supplied once.

mod storage;

pub use storage::{config_path, load_config, save_config};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current config schema version
pub const CONFIG_VERSION: u32 = 1;

/// Contents of the prtree config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigState {
    /// Schema version, stamped on save
    #[serde(default)]
    pub version: u32,
    /// Stored GitHub token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// When the config was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ConfigState {
    /// Empty config at the current schema version
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            token: None,
            updated_at: None,
        }
    }

    /// Store a token and stamp the update time.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        self.updated_at = Some(Utc::now());
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new()
    }
}
