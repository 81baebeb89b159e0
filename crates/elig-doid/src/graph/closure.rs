//! Ancestor closure: follows outgoing child → parent edges to a fixed point.

use std::collections::{BTreeSet, HashSet, VecDeque};

use petgraph::Direction;

use super::indexed_graph::IndexedGraph;

/// Every ancestor of `doid` plus `doid` itself.
///
/// Iterative, with a visited set, so shared ancestors are expanded once and
/// cycles terminate. A doid absent from the graph has no ancestors.
pub fn ancestors_with_self(graph: &IndexedGraph, doid: &str) -> BTreeSet<String> {
    let mut closure = BTreeSet::new();
    closure.insert(doid.to_string());

    let start_idx = match graph.get_node(doid) {
        Some(idx) => idx,
        None => return closure,
    };

    let mut visited = HashSet::new();
    visited.insert(start_idx);

    let mut queue = VecDeque::new();
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        for parent in graph.graph.neighbors_directed(current, Direction::Outgoing) {
            if !visited.insert(parent) {
                continue;
            }
            if let Some(parent_doid) = graph.doid(parent) {
                closure.insert(parent_doid.to_string());
            }
            queue.push_back(parent);
        }
    }

    closure
}

/// Union of the closures of every doid in `doids`.
pub fn expanded_tree<'a, I>(graph: &IndexedGraph, doids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    doids
        .into_iter()
        .flat_map(|doid| ancestors_with_self(graph, doid))
        .collect()
}
