//! Dependency tree of stacked pull requests
//!
//! A [`Tree`] is an arena of [`TreeNode`]s rooted at the trunk branch.
//! [`TreeBuilder`] resolves an unordered list of pull request records into
//! the tree, rendering is a deterministic [`std::fmt::Display`]
//! implementation, and [`Tree::chain_to`] extracts the single upstream path
//! for a branch via parent back-references.

mod builder;
mod node;
mod render;

pub use builder::TreeBuilder;
pub use node::{NodeId, Tree, TreeNode};
