//! Chain execution - effectful operations
//!
//! Takes a [`ChainPlan`] and performs the merges via the local git CLI.
//! Execution is strictly sequential: each merge depends on the previous
//! one's result, so the first failure aborts the remainder of the chain.
//! Whatever merged before the failure stays merged; there is no rollback.

use crate::error::Result;
use crate::merge::ProgressCallback;
use crate::merge::plan::{ChainPlan, ChainStep};
use crate::repo::GitWorkspace;

/// Result of chain execution
#[derive(Debug, Clone, Default)]
pub struct ChainExecutionResult {
    /// Branches that were successfully merged from their parent
    pub merged_branches: Vec<String>,
    /// Branch where the chain stopped (if any)
    pub failed_branch: Option<String>,
    /// Error message from the failed step (if any)
    pub error_message: Option<String>,
}

impl ChainExecutionResult {
    /// Check if every planned step succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed_branch.is_none()
    }

    /// Check if at least one branch was merged
    #[must_use]
    pub const fn has_merges(&self) -> bool {
        !self.merged_branches.is_empty()
    }
}

/// Execute the chain plan (EFFECTFUL)
///
/// Performs each step in order and stops at the first failure, recording
/// which branch broke the chain and why.
#[allow(clippy::future_not_send)]
pub async fn execute_chain(
    plan: &ChainPlan,
    workspace: &GitWorkspace,
    progress: &dyn ProgressCallback,
) -> Result<ChainExecutionResult> {
    let mut result = ChainExecutionResult::default();

    for step in &plan.steps {
        match step {
            ChainStep::PullRemote { remote, branch } => {
                progress
                    .on_message(&format!("Updating {branch} from {remote}/{branch}"))
                    .await;

                if let Err(e) = workspace.merge_from_remote(branch, remote) {
                    result.failed_branch = Some(branch.clone());
                    result.error_message = Some(e.to_string());
                    break;
                }
            }
            ChainStep::MergeParent { parent, child } => {
                progress
                    .on_message(&format!("Merging {parent} into {child}"))
                    .await;

                match workspace.merge_parent(parent, child) {
                    Ok(()) => result.merged_branches.push(child.clone()),
                    Err(e) => {
                        result.failed_branch = Some(child.clone());
                        result.error_message = Some(e.to_string());
                        break;
                    }
                }
            }
        }
    }

    Ok(result)
}
