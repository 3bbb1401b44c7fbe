//! Depth-first traversal over the typed AST.
//!
//! The walker visits every node exactly once in pre-order and hands the
//! caller each node together with its immediate parent. Parent links are not
//! stored on the tree; callers that need ancestor chains record them in a
//! [`ParentMap`] scoped to a single traversal pass.

use rustc_hash::FxHashMap;

use crate::nodes::AstNode;

/// Traversal seam. The analyzer takes this as an explicit collaborator so
/// tests can substitute the traversal.
pub trait TreeWalker {
    /// Walks `root` depth-first, pre-order, invoking `on_enter` once per
    /// node with the node and its immediate parent (`None` for the root).
    /// Re-entrant traversal from inside the callback is not supported.
    fn traverse(&self, root: &AstNode, on_enter: &mut dyn FnMut(&AstNode, Option<&AstNode>));
}

/// Default recursive walker.
#[derive(Default, Clone, Copy)]
pub struct Walker;

impl TreeWalker for Walker {
    fn traverse(&self, root: &AstNode, on_enter: &mut dyn FnMut(&AstNode, Option<&AstNode>)) {
        walk(root, None, on_enter);
    }
}

fn walk(
    node: &AstNode,
    parent: Option<&AstNode>,
    on_enter: &mut dyn FnMut(&AstNode, Option<&AstNode>),
) {
    on_enter(node, parent);
    for child in node.children() {
        walk(&child, Some(node), on_enter);
    }
}

/// Side table mapping node ids to their structural parent.
///
/// Populated during one traversal pass and discarded with it. A map must
/// never be reused across passes over different subtrees, otherwise stale
/// parent links would leak between them.
#[derive(Default)]
pub struct ParentMap {
    parents: FxHashMap<u32, AstNode>,
}

impl ParentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, child_id: u32, parent: &AstNode) {
        self.parents.insert(child_id, parent.clone());
    }

    #[must_use]
    pub fn parent_of(&self, id: u32) -> Option<&AstNode> {
        self.parents.get(&id)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: u32) -> impl Iterator<Item = &AstNode> {
        let mut current = self.parent_of(id);
        std::iter::from_fn(move || {
            let node = current?;
            current = self.parent_of(node.id());
            Some(node)
        })
    }
}
