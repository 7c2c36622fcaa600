//! Arena-backed tree nodes with parent back-references
//!
//! Nodes live in a flat arena owned by the [`Tree`]; children and the
//! non-owning parent link are [`NodeId`] indices into it. This sidesteps
//! ownership cycles that owned parent pointers would create.

/// Index of a node within a [`Tree`]'s arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single branch in the dependency tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) label: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TreeNode {
    pub(crate) fn new(label: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            label: label.into(),
            parent,
            children: Vec::new(),
        }
    }

    /// Branch name this node represents
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parent node, `None` for the root
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in discovery order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A rooted tree of branches, produced by [`TreeBuilder`]
///
/// [`TreeBuilder`]: crate::tree::TreeBuilder
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) root: NodeId,
}

impl Tree {
    /// Assemble a tree from an arena and its root index.
    ///
    /// # Panics
    ///
    /// Panics if the designated root has a parent. That would mean the
    /// builder produced a corrupt arena, not that the input was bad.
    pub(crate) fn new(nodes: Vec<TreeNode>, root: NodeId) -> Self {
        assert!(
            nodes[root.0].parent.is_none(),
            "tree root must not have a parent"
        );
        Self { nodes, root }
    }

    /// The root node (the trunk branch)
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree, root included
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every node id, root first
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Depth-first search for a descendant with the given label.
    ///
    /// The root itself is never matched. Children are visited in stored
    /// order, each child's subtree fully explored before the next sibling.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.find_under(self.root, label)
    }

    fn find_under(&self, id: NodeId, label: &str) -> Option<NodeId> {
        for &child in self.node(id).children() {
            if self.node(child).label == label {
                return Some(child);
            }
            if let Some(found) = self.find_under(child, label) {
                return Some(found);
            }
        }
        None
    }

    /// Extract the single upstream chain from the root down to `label`.
    ///
    /// Returns a new tree with exactly one child per level, built from fresh
    /// nodes; the original tree is left untouched. `None` if the label is
    /// not in the tree (the branch has no dependent pull request).
    pub fn chain_to(&self, label: &str) -> Option<Self> {
        let found = self.find(label)?;

        let mut labels = Vec::new();
        let mut cursor = Some(found);
        while let Some(id) = cursor {
            labels.push(self.node(id).label.clone());
            cursor = self.node(id).parent;
        }
        labels.reverse();

        let mut nodes: Vec<TreeNode> = Vec::with_capacity(labels.len());
        for (index, name) in labels.into_iter().enumerate() {
            let parent = index.checked_sub(1).map(NodeId);
            nodes.push(TreeNode::new(name, parent));
            if let Some(parent) = parent {
                nodes[parent.0].children.push(NodeId(index));
            }
        }

        Some(Self::new(nodes, NodeId(0)))
    }

    /// Root-to-leaf branch labels, following the first child at each level.
    ///
    /// Meaningful for the single-path trees produced by [`Self::chain_to`];
    /// on a branching tree this walks the first-child spine only.
    pub fn branch_sequence(&self) -> Vec<String> {
        let mut labels = Vec::new();
        let mut cursor = Some(self.root);
        while let Some(id) = cursor {
            labels.push(self.node(id).label.clone());
            cursor = self.node(id).children().first().copied();
        }
        labels
    }
}
