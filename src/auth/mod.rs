//! Authentication for GitHub
//!
//! Supports explicit tokens, environment variables, and CLI-based auth (gh).

mod github;

pub use github::{GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed explicitly on the command line
    Flag,
    /// Token loaded from the prtree config file
    Stored,
    /// Token from environment variable
    EnvVar,
    /// Token from the gh CLI tool
    Cli,
    /// Token entered at an interactive prompt
    Prompt,
}
