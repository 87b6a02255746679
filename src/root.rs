//! Root selection for results with no explicit target
//!
//! The search backend does not mark which node the user asked for, so the
//! root is inferred structurally, with fallbacks that keep the tree builder
//! working on malformed input.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::graph::Rule;
use crate::ingest::{GraphSource, WireNode};

/// Pick the target id of an id-indexed node map.
///
/// Three-tier fallback, in order:
/// 1. an id that no node consumes as an ingredient (an end-product),
///    first by map order;
/// 2. the maximum numeric id — the backend synthesizes higher ids later, so
///    they sit closest to the requested target;
/// 3. the first id in the map.
///
/// Tier 2 and 3 only trigger when a cycle covers every id. Returns `None`
/// only for an empty map.
pub fn select_root_id(nodes: &IndexMap<String, WireNode>) -> Option<String> {
    let referenced: HashSet<&str> = nodes
        .values()
        .flat_map(|node| node.recipe.iter().map(String::as_str))
        .collect();

    if let Some(id) = nodes.keys().find(|id| !referenced.contains(id.as_str())) {
        return Some(id.clone());
    }

    let numeric = nodes
        .keys()
        .filter_map(|id| id.parse::<i64>().ok().map(|n| (n, id)));
    if let Some((_, id)) = numeric.max_by_key(|(n, _)| *n) {
        return Some(id.clone());
    }

    nodes.keys().next().cloned()
}

/// Pick the root result of a rule list: the step-0 entry, or the result with
/// the minimum step (first among ties). `None` for an empty list.
pub fn select_root_result(recipes: &[Rule]) -> Option<String> {
    if let Some(rule) = recipes.iter().find(|rule| rule.step == 0) {
        return Some(rule.result.clone());
    }
    recipes
        .iter()
        .min_by_key(|rule| rule.step)
        .map(|rule| rule.result.clone())
}

/// Resolve the root element name for either wire shape.
pub fn select_root(source: &GraphSource) -> Option<String> {
    match source {
        GraphSource::RuleList(list) => select_root_result(&list.recipes),
        _ => {
            let nodes = source.id_nodes()?;
            let id = select_root_id(nodes)?;
            // The selected id always comes from the map, but a literal
            // fallback keeps this total.
            Some(match nodes.get(&id) {
                Some(node) => node.element.clone(),
                None => id,
            })
        }
    }
}
