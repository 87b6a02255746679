//! Recipe Tree - graph-to-tree reconstruction and adaptive layout sizing
//!
//! This library takes recipe derivation graphs produced by a crafting-game
//! search backend and deterministically turns them into a single rooted tree
//! plus the geometric parameters needed to draw it without overlap: canvas
//! size, per-pair node separation, and the icon legend grid.
//!
//! The input may be cyclic, redundant, or reference elements it never
//! defines; every such anomaly degrades to a smaller tree rather than an
//! error.
//!
//! # Example
//!
//! ```rust
//! use recipe_tree::{ingest, plan};
//!
//! let source = ingest::from_json_str(r#"{
//!     "0": { "element": "Water", "recipe": [] },
//!     "1": { "element": "Fire", "recipe": [] },
//!     "2": { "element": "Steam", "recipe": ["0", "1"] }
//! }"#).unwrap();
//!
//! let plan = plan(&source);
//! let tree = plan.tree.unwrap();
//! assert_eq!(tree.name, "Steam");
//! assert_eq!(plan.metrics.leaves, 2);
//! ```

pub mod graph;
pub mod ingest;
pub mod layout;
pub mod root;
pub mod steps;
pub mod tree;

pub use graph::{CanonicalGraph, Rule};
pub use ingest::{GraphSource, IngestError};
pub use layout::{CanvasSize, ConfigError, LayoutConfig, LegendConfig, LegendLayout, NodeSlot};
pub use tree::{build_tree, TreeMetrics, TreeNode};

use serde::Serialize;

/// The complete output of one reconstruction-and-layout pass.
///
/// Owned per invocation; a new search result replaces the previous plan
/// wholesale, there is no incremental update.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPlan {
    /// The reconstructed tree, or `None` when the input held no usable root.
    pub tree: Option<TreeNode>,
    pub metrics: TreeMetrics,
    pub canvas: CanvasSize,
    pub legend: LegendLayout,
    /// Every instantiated rule, sorted ascending by derivation step.
    pub steps: Vec<Rule>,
}

/// Reconstruct and size a search result with the default layout constants.
pub fn plan(source: &GraphSource) -> RenderPlan {
    plan_with_config(source, &LayoutConfig::default())
}

/// Reconstruct and size a search result with custom layout constants.
pub fn plan_with_config(source: &GraphSource, config: &LayoutConfig) -> RenderPlan {
    let graph = ingest::normalize(source);
    let tree = root::select_root(source).map(|name| tree::build_tree(&name, &graph));
    let metrics = tree.as_ref().map(tree::measure).unwrap_or_default();

    RenderPlan {
        canvas: config.canvas_size(&metrics),
        legend: config.legend_layout(graph.unique_elements()),
        steps: steps::recipe_steps(&graph),
        tree,
        metrics,
    }
}
