//! Graph ingestion: wire shapes and normalization
//!
//! This module turns either backend result shape into the one
//! [`CanonicalGraph`] the rest of the pipeline operates on. Normalization is
//! pure and total: broken references stay visible as literal names, and empty
//! input yields an empty graph rather than an error.

pub mod wire;

use indexmap::IndexMap;
use thiserror::Error;

pub use wire::{GraphSource, NodeMapEnvelope, RuleList, WireNode};

use crate::graph::{CanonicalGraph, Rule};

/// Errors that can occur while decoding a search result document
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to parse search result JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a search result document, auto-detecting its wire shape.
pub fn from_json_str(input: &str) -> Result<GraphSource, IngestError> {
    Ok(serde_json::from_str(input)?)
}

/// Normalize either wire shape into the canonical graph.
pub fn normalize(source: &GraphSource) -> CanonicalGraph {
    match source {
        GraphSource::RuleList(list) => normalize_rule_list(&list.recipes),
        GraphSource::Envelope(envelope) => normalize_id_indexed(&envelope.nodes),
        GraphSource::IdIndexed(nodes) => normalize_id_indexed(nodes),
    }
}

/// Each node with a non-empty recipe contributes one rule. Ingredient ids are
/// dereferenced through the same map; an id with no entry is kept as a
/// literal fallback name so broken references stay visible instead of being
/// dropped. The node id doubles as the rule's step number.
fn normalize_id_indexed(nodes: &IndexMap<String, WireNode>) -> CanonicalGraph {
    let mut graph = CanonicalGraph::new();
    for (id, node) in nodes {
        graph.observe(&node.element);
        if node.recipe.is_empty() {
            continue;
        }
        let ingredients = node
            .recipe
            .iter()
            .map(|ingredient_id| match nodes.get(ingredient_id) {
                Some(ingredient) => ingredient.element.clone(),
                None => ingredient_id.clone(),
            })
            .collect();
        graph.push_rule(Rule {
            ingredients,
            result: node.element.clone(),
            step: id.parse().unwrap_or(0),
        });
    }
    graph
}

/// Rules arrive name-based already. They are stably sorted by step before
/// insertion so that alternative order follows derivation order, matching
/// how the result views resolved alternatives.
fn normalize_rule_list(recipes: &[Rule]) -> CanonicalGraph {
    let mut ordered: Vec<&Rule> = recipes.iter().collect();
    ordered.sort_by_key(|rule| rule.step);
    let mut graph = CanonicalGraph::new();
    for rule in ordered {
        graph.push_rule(rule.clone());
    }
    graph
}
