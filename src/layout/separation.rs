//! Separation factors between laid-out node positions
//!
//! The spacing multiplier between two adjacent positions is the product of
//! three factors: a geometric growth with depth (deep subtrees need more
//! horizontal room per unit as label density increases), a doubling across
//! parent boundaries, and a logarithmic widening with sibling fan-out so
//! wide levels don't blow the canvas up linearly. This keeps both very wide
//! shallow trees and very deep narrow trees from overlapping without
//! over-allocating blank canvas for simple ones.

use serde::Serialize;

use crate::tree::TreeNode;

use super::config::LayoutConfig;

/// Layout handle for one tree position, as handed to the separation function
/// by the tree renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeSlot {
    /// Depth of this node; the root is 0.
    pub depth: usize,
    /// Pre-order index of the parent slot; `None` for the root.
    pub parent: Option<usize>,
    /// Number of children under this node's parent; 1 for the root.
    pub siblings: usize,
}

impl LayoutConfig {
    /// Spacing multiplier between two sibling-or-cousin positions.
    pub fn separation(&self, a: &NodeSlot, b: &NodeSlot) -> f64 {
        let depth = (a.depth as f64 * self.depth_growth).exp2();
        let parent = if a.parent == b.parent {
            1.0
        } else {
            self.cross_parent_factor
        };
        let fan_out = (a.siblings.max(1) as f64).log2().max(1.0);
        self.separation_base * depth * parent * fan_out
    }
}

/// Pre-order layout slots for every node of a built tree.
///
/// Convenience for renderers that don't carry their own node handles; the
/// slot at index 0 is the root.
pub fn slots(root: &TreeNode) -> Vec<NodeSlot> {
    fn visit(
        node: &TreeNode,
        depth: usize,
        parent: Option<usize>,
        siblings: usize,
        out: &mut Vec<NodeSlot>,
    ) {
        let index = out.len();
        out.push(NodeSlot {
            depth,
            parent,
            siblings,
        });
        for child in &node.children {
            visit(child, depth + 1, Some(index), node.children.len(), out);
        }
    }

    let mut out = Vec::new();
    visit(root, 0, None, 1, &mut out);
    out
}
