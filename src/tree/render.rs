//! Deterministic text rendering of a [`Tree`]
//!
//! The output format is a compatibility contract: a `Tree:` banner, a blank
//! line, the root label, then one line per descendant. A non-last sibling is
//! introduced with `├────`, the last with `└────`; lines below the root are
//! prefixed with a `│` continuation bar and one tab per depth level. After a
//! last sibling's subtree, the branch is closed with a bare newline at depth
//! zero and a newline plus `│` anywhere deeper.

use crate::tree::{NodeId, Tree};
use std::fmt::{self, Write as _};

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree:\n\n{}", self.node(self.root()).label())?;
        render_children(self, self.root(), 0, f)
    }
}

fn render_children(
    tree: &Tree,
    id: NodeId,
    depth: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let children = tree.node(id).children();
    let last_index = children.len().saturating_sub(1);

    for (index, &child) in children.iter().enumerate() {
        f.write_char('\n')?;
        if depth > 0 {
            f.write_char('│')?;
        }
        for _ in 0..depth {
            f.write_char('\t')?;
        }

        f.write_str(if index < last_index { "├────" } else { "└────" })?;
        f.write_str(tree.node(child).label())?;
        render_children(tree, child, depth + 1, f)?;

        if index == last_index {
            f.write_char('\n')?;
            if depth > 0 {
                f.write_char('│')?;
            }
        }
    }

    Ok(())
}
