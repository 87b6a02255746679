//! Recursive tree expansion over the canonical graph

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::CanonicalGraph;

/// Hard cap on expansion depth.
///
/// The backend is expected to hand over acyclic data, but that invariant is
/// not verified here. A malformed result degrades to a truncated leaf
/// instead of exhausting the stack.
pub const MAX_BUILD_DEPTH: usize = 64;

/// One instantiated, alternative-resolved occurrence of an element within a
/// rendered tree.
///
/// A node with no children is a leaf: a base element, an unresolved
/// reference, or a truncated cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for TreeNode {
    /// Indented outline of the tree, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_children(
            node: &TreeNode,
            prefix: &str,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            for (i, child) in node.children.iter().enumerate() {
                let last = i + 1 == node.children.len();
                let branch = if last { "└── " } else { "├── " };
                writeln!(f, "{prefix}{branch}{}", child.name)?;
                let extension = if last { "    " } else { "│   " };
                write_children(child, &format!("{prefix}{extension}"), f)?;
            }
            Ok(())
        }

        writeln!(f, "{}", self.name)?;
        write_children(self, "", f)
    }
}

/// Per-build count of how many times each element has been expanded.
///
/// Repeated occurrences of one element within a single build round-robin
/// through its rule alternatives, so a heavily reused intermediate doesn't
/// always expand via the same path. Created fresh per build, never shared
/// across builds.
#[derive(Debug, Default)]
pub struct UsageCounter(HashMap<String, usize>);

impl UsageCounter {
    /// Current count for `name`, post-incrementing.
    fn bump(&mut self, name: &str) -> usize {
        let slot = self.0.entry(name.to_string()).or_insert(0);
        let seen = *slot;
        *slot += 1;
        seen
    }
}

/// Expand `root` into a tree using the graph's rule alternatives.
///
/// Total over arbitrary graphs: elements without rules, unresolved
/// references, and cyclic tails all become leaves labeled with the raw name.
pub fn build_tree(root: &str, graph: &CanonicalGraph) -> TreeNode {
    let mut usage = UsageCounter::default();
    let mut path = Vec::new();
    expand(root, graph, &mut usage, &mut path)
}

fn expand(
    element: &str,
    graph: &CanonicalGraph,
    usage: &mut UsageCounter,
    path: &mut Vec<String>,
) -> TreeNode {
    let count = graph.alternative_count(element);
    if count == 0 {
        return TreeNode::leaf(element);
    }

    // A revisit along the current path means the source data is cyclic.
    // Truncate instead of recursing; sibling occurrences are unaffected.
    if path.len() >= MAX_BUILD_DEPTH || path.iter().any(|seen| seen == element) {
        return TreeNode::leaf(element);
    }

    let pick = usage.bump(element);
    let Some(rule) = graph.alternative(element, pick % count) else {
        return TreeNode::leaf(element);
    };

    path.push(element.to_string());
    let children = rule
        .ingredients
        .iter()
        .map(|ingredient| expand(ingredient, graph, usage, path))
        .collect();
    path.pop();

    TreeNode {
        name: element.to_string(),
        children,
    }
}
