//! Tree reconstruction and structural metrics
//!
//! This module expands a root element into a strict tree over the canonical
//! graph and measures the result. The underlying graph may be cyclic or
//! redundant; the built tree never is — every node is owned by its parent
//! and cyclic tails are truncated into leaves.

pub mod builder;
pub mod metrics;

pub use builder::{build_tree, TreeNode, UsageCounter, MAX_BUILD_DEPTH};
pub use metrics::{leaf_count, max_depth, measure, TreeMetrics};
