//! Integration tests for prtree

#![allow(deprecated)] // cargo_bin is the standard way to test CLI binaries

mod common;

use assert_cmd::Command as CargoCommand;
use common::{MockPlatformService, github_config, make_api_pr};
use predicates::prelude::*;
use prtree::merge::{ProgressCallback, create_chain_plan, execute_chain};
use prtree::platform::PlatformService;
use prtree::repo::GitWorkspace;
use prtree::tree::TreeBuilder;
use std::fs;
use std::path::Path;
use std::process::Stdio;
use std::sync::Mutex;
use tempfile::TempDir;

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_help() {
    let mut cmd = CargoCommand::cargo_bin("prtree").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stacked GitHub pull requests"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"));
}

#[test]
fn test_cli_version() {
    let mut cmd = CargoCommand::cargo_bin("prtree").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_show_help() {
    let mut cmd = CargoCommand::cargo_bin("prtree").unwrap();
    cmd.args(["show", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dependency tree"));
}

#[test]
fn test_update_help() {
    let mut cmd = CargoCommand::cargo_bin("prtree").unwrap();
    cmd.args(["update", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chain"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_invalid_repo_path() {
    let mut cmd = CargoCommand::cargo_bin("prtree").unwrap();
    cmd.args(["show", "--repo", "/nonexistent/path/to/repo"]);

    cmd.assert().failure();
}

// =============================================================================
// Platform -> tree pipeline (mock platform)
// =============================================================================

#[tokio::test]
async fn test_pipeline_from_platform_to_rendering() {
    let mock = MockPlatformService::with_config(github_config());
    mock.set_default_branch("develop");
    mock.set_open_prs(vec![
        make_api_pr(11, "feat-b", "feat-a", "Part two"),
        make_api_pr(10, "feat-a", "develop", "Part one"),
    ]);

    let trunk = mock.default_branch().await.unwrap();
    let prs = mock.list_open_prs().await.unwrap();
    let tree = TreeBuilder::new(&prs, trunk).generate();

    assert_eq!(
        tree.to_string(),
        "Tree:\n\ndevelop\n└────feat-a\n│\t└────feat-b\n│\n"
    );
    assert_eq!(mock.list_call_count(), 1);
    assert_eq!(mock.default_branch_call_count(), 1);
}

#[tokio::test]
async fn test_platform_error_reaches_caller() {
    let mock = MockPlatformService::with_config(github_config());
    mock.fail_list_prs("rate limited");

    let result = mock.list_open_prs().await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("rate limited"));
}

// =============================================================================
// Chain execution against real git repositories
// =============================================================================

fn check_git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking on failure.
fn git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    fs::write(dir.join(name), content).expect("write file");
    git(dir, &["add", name]);
    git(dir, &["commit", "-m", message]);
}

/// Upstream repo on branch `trunk` with a stacked branch `feat-a`.
fn setup_upstream() -> TempDir {
    let upstream = TempDir::new().expect("tempdir");
    let dir = upstream.path();

    git(dir, &["init", "-b", "trunk"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    commit_file(dir, "base.txt", "base\n", "Initial commit");

    git(dir, &["checkout", "-b", "feat-a"]);
    commit_file(dir, "a.txt", "feature a\n", "Add feature a");
    git(dir, &["checkout", "trunk"]);

    upstream
}

/// Clone `upstream` and materialize local branches for the whole stack.
fn clone_local(upstream: &Path) -> TempDir {
    let local = TempDir::new().expect("tempdir");
    let target = local.path().join("clone");

    let output = std::process::Command::new("git")
        .arg("clone")
        .arg(upstream)
        .arg(&target)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git clone");
    assert!(
        output.status.success(),
        "git clone failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    git(&target, &["config", "user.email", "test@example.com"]);
    git(&target, &["config", "user.name", "Test User"]);
    git(&target, &["checkout", "feat-a"]);
    git(&target, &["checkout", "trunk"]);

    local
}

/// Progress callback that records every message, in order.
#[derive(Default)]
struct RecordingProgress {
    messages: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_workspace_introspection() {
    if !check_git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let upstream = setup_upstream();
    let local = clone_local(upstream.path());
    let clone_dir = local.path().join("clone");

    let workspace = GitWorkspace::open(&clone_dir).expect("open workspace");
    assert_eq!(workspace.current_branch().unwrap(), "trunk");

    let remotes = workspace.git_remotes().unwrap();
    assert_eq!(remotes.len(), 1);
    assert_eq!(remotes[0].name, "origin");
    assert!(!remotes[0].url.is_empty());
}

#[tokio::test]
async fn test_chain_update_fast_forwards_stack() {
    if !check_git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let upstream = setup_upstream();
    let local = clone_local(upstream.path());
    let clone_dir = local.path().join("clone");

    // Trunk moves forward upstream after the clone.
    commit_file(upstream.path(), "new.txt", "new work\n", "Advance trunk");

    let workspace = GitWorkspace::open(&clone_dir).expect("open workspace");
    workspace.git_fetch("origin").expect("fetch");

    let chain = vec!["trunk".to_string(), "feat-a".to_string()];
    let plan = create_chain_plan(&chain, "origin");
    let progress = RecordingProgress::default();

    let result = execute_chain(&plan, &workspace, &progress)
        .await
        .expect("execute chain");

    assert!(result.is_success());
    assert_eq!(result.merged_branches, ["feat-a"]);

    // feat-a is checked out after its merge and now contains both the
    // stacked work and the new trunk commit.
    assert_eq!(workspace.current_branch().unwrap(), "feat-a");
    assert!(clone_dir.join("a.txt").exists());
    assert!(clone_dir.join("new.txt").exists());

    let messages = progress.messages.lock().unwrap();
    assert_eq!(
        *messages,
        [
            "Updating trunk from origin/trunk",
            "Merging trunk into feat-a",
        ]
    );
}

#[tokio::test]
async fn test_chain_stops_at_merge_conflict() {
    if !check_git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let upstream = setup_upstream();
    let local = clone_local(upstream.path());
    let clone_dir = local.path().join("clone");

    // Conflicting edits to the same file on both sides of the chain.
    commit_file(upstream.path(), "base.txt", "upstream edit\n", "Edit base");
    git(&clone_dir, &["checkout", "feat-a"]);
    commit_file(&clone_dir, "base.txt", "local edit\n", "Conflicting edit");

    let workspace = GitWorkspace::open(&clone_dir).expect("open workspace");
    workspace.git_fetch("origin").expect("fetch");

    let chain = vec!["trunk".to_string(), "feat-a".to_string()];
    let plan = create_chain_plan(&chain, "origin");
    let progress = RecordingProgress::default();

    let result = execute_chain(&plan, &workspace, &progress)
        .await
        .expect("execute chain");

    assert!(!result.is_success());
    assert!(!result.has_merges());
    assert_eq!(result.failed_branch.as_deref(), Some("feat-a"));
    assert!(result.error_message.is_some());
}
