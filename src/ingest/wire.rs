//! Wire shapes produced by the search backend
//!
//! The backend serves two distinct result shapes. The depth-first finder
//! returns an id-indexed node map with inline ingredient-id lists; the
//! breadth-first finder returns a flat rule list with explicit step numbers.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::graph::Rule;

/// One entry of the id-indexed shape: an element plus the ids of the nodes
/// that combine into it. An empty recipe marks a base element.
#[derive(Debug, Clone, Deserialize)]
pub struct WireNode {
    pub element: String,
    #[serde(default)]
    pub recipe: Vec<String>,
}

/// The rule-list shape. The accompanying `nodes` array only mirrors the
/// element names already present in the recipes and is ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleList {
    pub recipes: Vec<Rule>,
}

/// The id-indexed map wrapped in the `nodes` envelope the depth-first
/// endpoints serve it in. Timing metadata alongside `nodes` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeMapEnvelope {
    pub nodes: IndexMap<String, WireNode>,
}

/// A search result in either wire shape.
///
/// Detection is structural: a document with a `recipes` array is the rule
/// list, a `nodes` object or a bare id-to-node map is id-indexed.
/// `IndexMap` keeps maps in document order so repeat runs see the same
/// iteration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphSource {
    RuleList(RuleList),
    Envelope(NodeMapEnvelope),
    IdIndexed(IndexMap<String, WireNode>),
}

impl GraphSource {
    /// The id-indexed node map, unwrapped from its envelope if any.
    pub fn id_nodes(&self) -> Option<&IndexMap<String, WireNode>> {
        match self {
            GraphSource::RuleList(_) => None,
            GraphSource::Envelope(envelope) => Some(&envelope.nodes),
            GraphSource::IdIndexed(nodes) => Some(nodes),
        }
    }
}
