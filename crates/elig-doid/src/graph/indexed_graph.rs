//! petgraph::DiGraph wrapper with DoidNode and DoidEdge types.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// A node in the disease ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoidNode {
    pub doid: String,
}

/// Where a child → parent edge comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoidEdge {
    /// Present in the ontology source.
    Ontology,
    /// Added by the curated manual overlay.
    Manual,
}

/// The underlying directed graph type. Edges point from child to parent.
pub type DoidGraph = DiGraph<DoidNode, DoidEdge>;

/// Wrapper providing indexed access to the ontology graph.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    /// The petgraph graph.
    pub graph: DoidGraph,
    /// Map from doid → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `doid`.
    pub fn ensure_node(&mut self, doid: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(doid) {
            return idx;
        }
        let idx = self.graph.add_node(DoidNode {
            doid: doid.to_string(),
        });
        self.node_index.insert(doid.to_string(), idx);
        idx
    }

    /// Add a child → parent edge, creating missing nodes. Repeated edges of the same kind are kept once.
    pub fn add_parent(&mut self, child: &str, parent: &str, kind: DoidEdge) {
        let child_idx = self.ensure_node(child);
        let parent_idx = self.ensure_node(parent);
        let exists = self
            .graph
            .edges_connecting(child_idx, parent_idx)
            .any(|edge| *edge.weight() == kind);
        if !exists {
            self.graph.add_edge(child_idx, parent_idx, kind);
        }
    }

    /// Look up a node index by doid.
    pub fn get_node(&self, doid: &str) -> Option<NodeIndex> {
        self.node_index.get(doid).copied()
    }

    /// The doid stored at `idx`.
    pub fn doid(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|node| node.doid.as_str())
    }

    /// Direct parents of `doid` reached through edges of `kind`.
    pub fn parents(&self, doid: &str, kind: DoidEdge) -> Vec<&str> {
        let Some(idx) = self.get_node(doid) else {
            return Vec::new();
        };
        let mut parents: Vec<&str> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|edge| *edge.weight() == kind)
            .filter_map(|edge| self.doid(edge.target()))
            .collect();
        parents.sort_unstable();
        parents.dedup();
        parents
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
