//! Branch coverage resolution.
//!
//! Each terminal action (a rethrow or a logging call) resolves the execution
//! path it sits on. A path is tracked by its branch region: the outermost
//! node between the terminal and either the analysis root or an enclosing
//! `if` statement. When both branches of an `if` are resolved, the `if`
//! itself collapses into its own enclosing region, cascading upward until
//! the root is reached or a half-covered `if` stops the climb.

use std::rc::Rc;

use catchlint_ast::{
    nodes::{AstNode, IfStatement, Statement},
    walker::ParentMap,
};
use rustc_hash::FxHashSet;

pub struct BranchResolver {
    root_id: u32,
    resolved: FxHashSet<u32>,
    unconditional: bool,
}

impl BranchResolver {
    #[must_use]
    pub fn new(root_id: u32) -> Self {
        Self {
            root_id,
            resolved: FxHashSet::default(),
            unconditional: false,
        }
    }

    /// Marks the execution path containing `node` as resolved.
    pub fn add_path(&mut self, parents: &ParentMap, node: &AstNode) {
        let region = self.closest_region(parents, node);
        let direct = parents
            .parent_of(region.id())
            .is_some_and(|parent| parent.id() == self.root_id);
        if direct {
            self.unconditional = true;
        }
        self.mark_region(parents, region);
    }

    /// Whether every execution path is covered. A terminal that executes
    /// unconditionally covers all paths on its own; otherwise the root must
    /// have been reached by collapse and every in-scope `if` must have both
    /// of its branches resolved.
    #[must_use]
    pub fn is_valid(&self, branch_points: &[Rc<IfStatement>]) -> bool {
        if self.unconditional {
            return true;
        }
        if !self.resolved.contains(&self.root_id) {
            return false;
        }
        branch_points
            .iter()
            .all(|if_statement| self.branch_covered(if_statement))
    }

    /// Worklist collapse: marking a branch region may complete its `if`,
    /// which then resolves as a region one level up, and so on.
    fn mark_region(&mut self, parents: &ParentMap, region: AstNode) {
        let mut pending = vec![region];
        while let Some(region) = pending.pop() {
            let Some(parent) = parents.parent_of(region.id()) else {
                continue;
            };
            if parent.id() == self.root_id {
                self.resolved.insert(self.root_id);
                continue;
            }
            if let Some(if_statement) = parent.as_if_statement() {
                self.resolved.insert(region.id());
                if self.branch_covered(if_statement) {
                    let node = AstNode::Statement(Statement::If(if_statement.clone()));
                    pending.push(self.closest_region(parents, &node));
                }
            }
        }
    }

    fn branch_covered(&self, if_statement: &IfStatement) -> bool {
        self.resolved.contains(&if_statement.consequent.id())
            && if_statement
                .alternate
                .as_ref()
                .is_some_and(|alternate| self.resolved.contains(&alternate.id()))
    }

    /// Walks up from `node` to the outermost ancestor whose parent is the
    /// root or an `if` statement.
    fn closest_region(&self, parents: &ParentMap, node: &AstNode) -> AstNode {
        let mut current = node.clone();
        while let Some(parent) = parents.parent_of(current.id()) {
            if parent.id() == self.root_id || parent.as_if_statement().is_some() {
                break;
            }
            current = parent.clone();
        }
        current
    }
}
