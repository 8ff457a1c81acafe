//! Path-based navigation inside a model tree: locating the subtree a search
//! hit's anchor chain points at, and rebuilding the thin "skeleton" path used
//! for the drill-down rendering of that hit.

use itertools::Itertools;

use crate::tree::TreeNode;

/// Normalize a node name for matching: trim, lower-case, and collapse every
/// internal whitespace run to a single space.  Idempotent.
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase().split_whitespace().join(" ")
}

/// Walk `tree` along `parts`, where `parts[0]` names the root and each
/// subsequent entry names a child of the previous node.  Matching per
/// segment, in order: exact normalized equality, then first child (in source
/// order) whose normalized name starts with the normalized target.
///
/// Fewer than two parts means there is nothing to navigate; the whole tree is
/// returned.  A segment that matches no child likewise returns the whole
/// tree: lookup failure degrades to the full view rather than an error so the
/// caller always has something to render.  The returned node is always a deep
/// copy, never an alias into `tree`.
pub fn find_subtree(tree: &TreeNode, parts: &[String]) -> TreeNode {
    if parts.len() < 2 {
        return tree.clone();
    }

    let mut node = tree;
    for part in &parts[1..] {
        let target = normalize_name(part);
        if node.children.is_empty() {
            return tree.clone();
        }
        let exact = node
            .children
            .iter()
            .find(|c| normalize_name(&c.name) == target);
        let next = exact.or_else(|| {
            node.children
                .iter()
                .find(|c| normalize_name(&c.name).starts_with(&target))
        });
        node = match next {
            Some(n) => n,
            None => return tree.clone(),
        };
    }
    node.clone()
}

/// Rebuild the drill-down skeleton for a search hit: a single-child chain
/// named after `anchor_parts` in order, with the deepest node receiving a
/// deep copy of the matched subtree's children.  Siblings along the ancestor
/// chain are suppressed; only the final matched node shows its full children.
pub fn build_skeleton(anchor_parts: &[String], matched: &TreeNode) -> TreeNode {
    let (last, ancestors) = match anchor_parts.split_last() {
        Some(split) => split,
        None => return matched.clone(),
    };

    let mut node = TreeNode {
        name: last.clone(),
        children: matched.children.clone(),
    };
    for part in ancestors.iter().rev() {
        node = TreeNode {
            name: part.clone(),
            children: vec![node],
        };
    }
    node
}
