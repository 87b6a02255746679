//! Canonical in-memory representation of a recipe derivation graph
//!
//! Both wire shapes normalize into a [`CanonicalGraph`]: a mapping from
//! element name to the ordered rule alternatives that produce it. Insertion
//! order is arrival order from the source and is stable for repeat runs; no
//! stronger ordering is guaranteed.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// One production rule: a result element derived from an ordered list of
/// ingredient elements.
///
/// The derivation step number is used only for display ordering, never for
/// tree structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub ingredients: Vec<String>,
    pub result: String,
    #[serde(default)]
    pub step: i64,
}

/// The normalized recipe graph, owned by a single build invocation.
///
/// Alongside the rule index this records the first-seen order of every
/// element name observed anywhere in the input (result, ingredient, or
/// ruleless base element). The icon legend is derived from that set, so
/// unused alternates still appear in the legend regardless of which rules a
/// tree build picks.
#[derive(Debug, Clone, Default)]
pub struct CanonicalGraph {
    rules: Vec<Rule>,
    by_result: IndexMap<String, Vec<usize>>,
    elements: IndexSet<String>,
}

impl CanonicalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element name without attaching a rule.
    ///
    /// Used for base elements that appear in the input but are never the
    /// result of a rule.
    pub fn observe(&mut self, name: &str) {
        if !self.elements.contains(name) {
            self.elements.insert(name.to_string());
        }
    }

    /// Append a rule under its result, observing every name it mentions.
    pub fn push_rule(&mut self, rule: Rule) {
        self.observe(&rule.result);
        for ingredient in &rule.ingredients {
            self.observe(ingredient);
        }
        let index = self.rules.len();
        self.by_result
            .entry(rule.result.clone())
            .or_default()
            .push(index);
        self.rules.push(rule);
    }

    /// Number of rule alternatives producing `name`.
    pub fn alternative_count(&self, name: &str) -> usize {
        self.by_result.get(name).map_or(0, Vec::len)
    }

    /// The `index`-th rule alternative producing `name`, in arrival order.
    pub fn alternative(&self, name: &str, index: usize) -> Option<&Rule> {
        let ids = self.by_result.get(name)?;
        ids.get(index).map(|&i| &self.rules[i])
    }

    /// All rules in arrival order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Every element name observed anywhere, first-seen order, no duplicates.
    pub fn unique_elements(&self) -> &IndexSet<String> {
        &self.elements
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.elements.is_empty()
    }
}
