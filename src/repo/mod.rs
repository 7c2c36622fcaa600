//! Local git repository access
//!
//! Repository discovery and read-only introspection go through `gix`;
//! operations that touch the working tree or the network (fetch, merge)
//! shell out to the `git` CLI so their semantics match what the user would
//! get running the same commands by hand.

use crate::error::{Error, Result};
use crate::types::GitRemote;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// An opened git working copy
pub struct GitWorkspace {
    repo: gix::Repository,
    root: PathBuf,
}

impl GitWorkspace {
    /// Discover and open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            Error::Repository(format!(
                "failed to open repository at {}: {e}",
                path.display()
            ))
        })?;

        let root = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Repository("repository has no working directory".to_string()))?;

        Ok(Self { repo, root })
    }

    /// Root of the working copy
    pub fn workspace_root(&self) -> &Path {
        &self.root
    }

    /// Name of the branch HEAD points at
    pub fn current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .head_name()
            .map_err(|e| Error::Repository(format!("failed to resolve HEAD: {e}")))?;

        let name = head.ok_or(Error::DetachedHead)?;
        Ok(name.shorten().to_string())
    }

    /// All configured remotes with their fetch URLs
    pub fn git_remotes(&self) -> Result<Vec<GitRemote>> {
        let mut remotes = Vec::new();

        for name in self.repo.remote_names() {
            let remote = self
                .repo
                .find_remote(name.as_ref())
                .map_err(|e| Error::Repository(format!("failed to read remote {name}: {e}")))?;

            let url = remote
                .url(gix::remote::Direction::Fetch)
                .map(|u| u.to_bstring().to_string())
                .unwrap_or_default();

            remotes.push(GitRemote {
                name: name.to_string(),
                url,
            });
        }

        Ok(remotes)
    }

    /// Fetch from the given remote.
    pub fn git_fetch(&self, remote: &str) -> Result<()> {
        self.run_git(&["fetch", remote]).map(drop)
    }

    /// Merge the remote-tracking ref of `branch` into the local branch.
    pub fn merge_from_remote(&self, branch: &str, remote: &str) -> Result<()> {
        self.checkout(branch)?;
        self.run_git(&["merge", "--no-edit", &format!("{remote}/{branch}")])
            .map(drop)
    }

    /// Merge `parent` into `child`, leaving `child` checked out.
    pub fn merge_parent(&self, parent: &str, child: &str) -> Result<()> {
        self.checkout(child)?;
        self.run_git(&["merge", "--no-edit", parent]).map(drop)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run_git(&["checkout", "--quiet", branch]).map(drop)
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        debug!(?args, root = %self.root.display(), "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|e| Error::Repository(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            return Err(Error::Git {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Pick the remote to operate against.
///
/// An explicit choice must exist. Otherwise prefer `origin`, then a sole
/// configured remote; anything more ambiguous is an error the user resolves
/// with `--remote`.
pub fn select_remote(remotes: &[GitRemote], preferred: Option<&str>) -> Result<String> {
    if let Some(name) = preferred {
        return remotes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.name.clone())
            .ok_or_else(|| Error::RemoteNotFound(name.to_string()));
    }

    if remotes.is_empty() {
        return Err(Error::NoSupportedRemotes);
    }

    if let Some(origin) = remotes.iter().find(|r| r.name == "origin") {
        return Ok(origin.name.clone());
    }

    if let [only] = remotes {
        return Ok(only.name.clone());
    }

    Err(Error::Repository(
        "multiple remotes configured; pass --remote to choose one".to_string(),
    ))
}
