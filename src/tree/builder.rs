//! Resolution of pull request records into a dependency tree

use crate::tree::{NodeId, Tree, TreeNode};
use crate::types::PullRequest;
use tracing::debug;

/// An unresolved base→head pair not yet attached to the growing tree
#[derive(Debug, Clone)]
struct Fragment {
    base: String,
    head: String,
}

/// Builds the dependency tree for a set of open pull requests
///
/// Each record contributes one pending fragment (its base branch pointing at
/// its head branch). Starting from the trunk, fragments whose base matches an
/// already-placed node are attached as children and recursed into; fragments
/// whose base is never reached from the trunk are dropped silently. Two
/// records against the same base intentionally yield two sibling subtrees.
pub struct TreeBuilder {
    fragments: Vec<Fragment>,
    trunk: String,
}

impl TreeBuilder {
    /// Capture the pull requests (in declaration order) and the trunk label.
    pub fn new(pull_requests: &[PullRequest], trunk: impl Into<String>) -> Self {
        let fragments = pull_requests
            .iter()
            .map(|pr| Fragment {
                base: pr.base_ref.clone(),
                head: pr.head_ref.clone(),
            })
            .collect();

        Self {
            fragments,
            trunk: trunk.into(),
        }
    }

    /// Resolve all fragments into a [`Tree`] rooted at the trunk.
    pub fn generate(self) -> Tree {
        debug!(
            trunk = %self.trunk,
            pending = self.fragments.len(),
            "building pull request tree"
        );

        let mut nodes = vec![TreeNode::new(self.trunk, None)];
        let root = NodeId(0);
        Self::attach_dependents(&mut nodes, root, &self.fragments);
        Tree::new(nodes, root)
    }

    /// Attach every pending fragment whose base matches `current`, then
    /// recurse into each newly attached child.
    ///
    /// Fragments are scanned in reverse insertion order; that tie-break
    /// decides sibling order in the rendered tree. Each recursion receives a
    /// copy of the pending set minus only the fragment it consumed: sibling
    /// scans must still see the full set, since one base branch can carry
    /// several independent dependent pull requests.
    fn attach_dependents(nodes: &mut Vec<TreeNode>, current: NodeId, pending: &[Fragment]) {
        for (index, fragment) in pending.iter().enumerate().rev() {
            if fragment.base != nodes[current.0].label {
                continue;
            }

            let child = NodeId(nodes.len());
            nodes.push(TreeNode::new(fragment.head.clone(), Some(current)));
            nodes[current.0].children.push(child);

            let mut remaining = pending.to_vec();
            remaining.remove(index);
            Self::attach_dependents(nodes, child, &remaining);
        }
    }
}
