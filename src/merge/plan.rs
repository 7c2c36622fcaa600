//! Chain planning - pure functions for expanding a branch chain into steps
//!
//! No I/O happens here; the chain (root-to-leaf branch labels, as produced
//! by chain extraction) is passed in, making the expansion easy to unit
//! test.

use std::fmt;

/// A single step in the chain update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainStep {
    /// Merge the remote-tracking ref of `branch` into the local branch
    PullRemote {
        /// Remote name
        remote: String,
        /// Branch to update
        branch: String,
    },
    /// Merge `parent` into `child`
    MergeParent {
        /// Upstream branch (already updated by a prior step)
        parent: String,
        /// Dependent branch receiving the merge
        child: String,
    },
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullRemote { remote, branch } => {
                write!(f, "merge {remote}/{branch} into {branch}")
            }
            Self::MergeParent { parent, child } => write!(f, "merge {parent} into {child}"),
        }
    }
}

/// Ordered steps for updating one branch chain
///
/// Created by [`create_chain_plan`] (pure) and executed by
/// [`execute_chain`] (effectful).
///
/// [`execute_chain`]: crate::merge::execute_chain
#[derive(Debug, Clone)]
pub struct ChainPlan {
    /// Steps in execution order, trunk first
    pub steps: Vec<ChainStep>,
    /// The chain's branch labels, root to leaf
    pub branches: Vec<String>,
}

impl ChainPlan {
    /// Check whether the plan has anything to do
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of branches that receive a parent merge
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, ChainStep::MergeParent { .. }))
            .count()
    }
}

/// Expand a root-to-leaf branch chain into ordered update steps.
///
/// For each adjacent (parent, child) pair, top-down: bring the parent up to
/// date from its remote-tracking ref, then merge the parent into the child.
/// A chain with fewer than two branches yields an empty plan.
#[must_use]
pub fn create_chain_plan(chain: &[String], remote: &str) -> ChainPlan {
    let mut steps = Vec::new();

    for pair in chain.windows(2) {
        steps.push(ChainStep::PullRemote {
            remote: remote.to_string(),
            branch: pair[0].clone(),
        });
        steps.push(ChainStep::MergeParent {
            parent: pair[0].clone(),
            child: pair[1].clone(),
        });
    }

    ChainPlan {
        steps,
        branches: chain.to_vec(),
    }
}
