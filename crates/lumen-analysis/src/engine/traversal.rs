//! Pre-order tree traversal with an identity guard.

use rustc_hash::FxHashSet;

use lumen_core::UiNode;

/// Nodes in pre-order (node, then children in order).
///
/// Nodes are keyed by address, so a subtree shared between parents or
/// repeated within one parent is visited once, at its first position.
pub fn pre_order(root: &UiNode) -> Vec<&UiNode> {
    let mut order = Vec::new();
    let mut visited: FxHashSet<*const UiNode> = FxHashSet::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visited.insert(node as *const UiNode) {
            continue;
        }
        order.push(node);
        stack.extend(node.children.iter().rev().map(|child| child.as_ref()));
    }

    order
}
