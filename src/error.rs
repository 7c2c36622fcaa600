//! Error types for prtree

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by prtree
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or inspect the local repository
    #[error("repository error: {0}")]
    Repository(String),

    /// HEAD does not point at a branch
    #[error("no branch is currently checked out (detached HEAD)")]
    DetachedHead,

    /// The requested remote does not exist
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// The repository has no usable remote
    #[error("no supported git remote found")]
    NoSupportedRemotes,

    /// The remote URL points at a host we cannot talk to
    #[error("unsupported remote URL: {0}")]
    UnsupportedRemote(String),

    /// A git subprocess exited unsuccessfully
    #[error("`git {command}` failed: {stderr}")]
    Git {
        /// Arguments the subprocess ran with
        command: String,
        /// Trimmed stderr of the failed invocation
        stderr: String,
    },

    /// GitHub API failure (transport, status, or payload)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// No usable authentication token could be resolved
    #[error("authentication error: {0}")]
    Auth(String),

    /// Persistent configuration could not be read or written
    #[error("config error: {0}")]
    Config(String),

    /// Anything that indicates a bug rather than a user-facing condition
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}
