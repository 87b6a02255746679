//! Textual recipe-step listing
//!
//! Lists every rule instantiated in the source data, not just those on the
//! chosen tree path, so alternate recipes stay visible in the step view.

use crate::graph::{CanonicalGraph, Rule};

/// All rules sorted ascending by derivation step.
///
/// The sort is stable: rules with equal steps keep their arrival order.
pub fn recipe_steps(graph: &CanonicalGraph) -> Vec<Rule> {
    let mut steps: Vec<Rule> = graph.rules().cloned().collect();
    steps.sort_by_key(|rule| rule.step);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(ingredients: &[&str], result: &str, step: i64) -> Rule {
        Rule {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            result: result.to_string(),
            step,
        }
    }

    #[test]
    fn test_steps_sorted_ascending() {
        let mut graph = CanonicalGraph::new();
        graph.push_rule(rule(&["Steam", "Air"], "Cloud", 5));
        graph.push_rule(rule(&["Water", "Fire"], "Steam", 2));

        let steps = recipe_steps(&graph);
        assert_eq!(steps[0].result, "Steam");
        assert_eq!(steps[1].result, "Cloud");
    }

    #[test]
    fn test_equal_steps_keep_arrival_order() {
        let mut graph = CanonicalGraph::new();
        graph.push_rule(rule(&["Water", "Fire"], "Steam", 1));
        graph.push_rule(rule(&["Earth", "Water"], "Mud", 1));
        graph.push_rule(rule(&["Water", "Energy"], "Steam", 1));

        let steps = recipe_steps(&graph);
        let results: Vec<&str> = steps.iter().map(|r| r.result.as_str()).collect();
        assert_eq!(results, vec!["Steam", "Mud", "Steam"]);
        assert_eq!(steps[0].ingredients, vec!["Water", "Fire"]);
        assert_eq!(steps[2].ingredients, vec!["Water", "Energy"]);
    }

    #[test]
    fn test_empty_graph_has_no_steps() {
        assert!(recipe_steps(&CanonicalGraph::new()).is_empty());
    }
}
