//! Structural metrics of a built tree
//!
//! Metrics are computed on the built tree, not the raw graph, so they
//! reflect the alternatives the builder actually chose rather than
//! worst-case branching.

use serde::Serialize;

use super::TreeNode;

/// Depth and width extremes used to size the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeMetrics {
    /// Maximum depth: 0 for a bare root.
    pub depth: usize,
    /// Number of terminal positions the renderer will draw; a proxy for
    /// tree width.
    pub leaves: usize,
}

/// Maximum depth below `node`; 0 for a leaf.
pub fn max_depth(node: &TreeNode) -> usize {
    node.children
        .iter()
        .map(|child| max_depth(child) + 1)
        .max()
        .unwrap_or(0)
}

/// Number of leaves under `node`; a childless node counts as one leaf.
pub fn leaf_count(node: &TreeNode) -> usize {
    if node.children.is_empty() {
        1
    } else {
        node.children.iter().map(leaf_count).sum()
    }
}

pub fn measure(node: &TreeNode) -> TreeMetrics {
    TreeMetrics {
        depth: max_depth(node),
        leaves: leaf_count(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn test_bare_root_metrics() {
        let tree = TreeNode::leaf("Fire");
        assert_eq!(max_depth(&tree), 0);
        assert_eq!(leaf_count(&tree), 1);
    }

    #[test]
    fn test_unbalanced_tree_metrics() {
        let tree = node(
            "Cloud",
            vec![
                node(
                    "Steam",
                    vec![TreeNode::leaf("Water"), TreeNode::leaf("Fire")],
                ),
                TreeNode::leaf("Air"),
            ],
        );
        assert_eq!(max_depth(&tree), 2);
        assert_eq!(leaf_count(&tree), 3);
        assert_eq!(measure(&tree), TreeMetrics { depth: 2, leaves: 3 });
    }
}
