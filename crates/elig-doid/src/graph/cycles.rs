//! Cycle diagnostics using Tarjan's SCC algorithm.

use petgraph::algo::tarjan_scc;

use super::indexed_graph::IndexedGraph;

/// Strongly connected components that form a cycle, as sorted doid lists.
///
/// A component counts when it has more than one node or a node that is its
/// own parent. Components are returned in lexicographic order.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || scc.iter().any(|&idx| graph.graph.contains_edge(idx, idx)))
        .map(|scc| {
            let mut doids: Vec<String> = scc
                .into_iter()
                .filter_map(|idx| graph.doid(idx).map(str::to_string))
                .collect();
            doids.sort();
            doids
        })
        .collect();
    cycles.sort();
    cycles
}
