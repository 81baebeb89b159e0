//! DoidModel: the ontology graph with the manual overlay applied.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use elig_core::config::{AdenoSquamousMapping, DoidManualConfig, DoidRelationship};
use elig_core::errors::{EligResult, OntologyError};

use crate::graph::{closure, cycles, DoidEdge, IndexedGraph};

/// Read-only disease ontology.
///
/// Holds the child → parent graph, the term indices and the manual overlay.
/// Every additional doid of the overlay becomes a [`DoidEdge::Manual`] edge, so
/// closures pick it up whenever its child is visited.
#[derive(Debug, Clone)]
pub struct DoidModel {
    graph: IndexedGraph,
    term_for_doid: HashMap<String, String>,
    doid_for_lower_case_term: HashMap<String, String>,
    manual_config: Arc<DoidManualConfig>,
}

impl DoidModel {
    /// Build the model from a pre-parsed adjacency map and term table.
    ///
    /// Fails when the overlay does not validate. Cycles in the resulting graph are
    /// logged, not rejected.
    pub fn new<P, T>(
        child_to_parents: P,
        term_for_doid: T,
        manual_config: Arc<DoidManualConfig>,
    ) -> EligResult<Self>
    where
        P: IntoIterator<Item = (String, Vec<String>)>,
        T: IntoIterator<Item = (String, String)>,
    {
        manual_config.validate()?;

        let mut graph = IndexedGraph::new();
        for (child, parents) in child_to_parents {
            graph.ensure_node(&child);
            for parent in &parents {
                graph.add_parent(&child, parent, DoidEdge::Ontology);
            }
        }
        for (child, parent) in &manual_config.additional_doids_per_doid {
            graph.add_parent(child, parent, DoidEdge::Manual);
        }

        let term_for_doid: HashMap<String, String> = term_for_doid.into_iter().collect();

        // Sorted so colliding lower-case terms resolve to the same doid on every build.
        let mut term_entries: Vec<(&String, &String)> = term_for_doid.iter().collect();
        term_entries.sort();
        let mut doid_for_lower_case_term = HashMap::with_capacity(term_entries.len());
        for (doid, term) in term_entries {
            doid_for_lower_case_term
                .entry(term.to_lowercase())
                .or_insert_with(|| doid.clone());
        }

        let model = Self {
            graph,
            term_for_doid,
            doid_for_lower_case_term,
            manual_config,
        };

        debug!(
            nodes = model.graph.node_count(),
            edges = model.graph.edge_count(),
            terms = model.term_for_doid.len(),
            manual_edges = model.manual_config.additional_doids_per_doid.len(),
            "doid model built"
        );

        let cycles = model.find_cycles();
        if !cycles.is_empty() {
            warn!(
                count = cycles.len(),
                first = ?cycles.first(),
                "doid graph contains cycles"
            );
        }

        Ok(model)
    }

    /// A model with an empty graph and term table.
    pub fn empty(manual_config: Arc<DoidManualConfig>) -> EligResult<Self> {
        Self::new(
            std::iter::empty::<(String, Vec<String>)>(),
            std::iter::empty::<(String, String)>(),
            manual_config,
        )
    }

    /// `doid` with all of its ancestors. An unknown doid yields `{doid}`.
    pub fn doid_with_parents(&self, doid: &str) -> BTreeSet<String> {
        let expanded = closure::ancestors_with_self(&self.graph, doid);
        trace!(doid, size = expanded.len(), "doid expanded");
        expanded
    }

    /// Direct parents of `doid`, from the ontology and the overlay.
    pub fn parents_of(&self, doid: &str) -> Vec<&str> {
        let mut parents = self.graph.parents(doid, DoidEdge::Ontology);
        parents.extend(self.graph.parents(doid, DoidEdge::Manual));
        parents.sort_unstable();
        parents.dedup();
        parents
    }

    /// The configured main cancer doids among the ancestors of `doid`.
    pub fn main_cancer_doids(&self, doid: &str) -> BTreeSet<String> {
        self.doid_with_parents(doid)
            .into_iter()
            .filter(|candidate| self.manual_config.main_cancer_doids.contains(candidate))
            .collect()
    }

    /// Adeno-squamous mappings whose adeno or squamous doid is an ancestor of `doid`.
    pub fn adeno_squamous_mappings_for_doid(&self, doid: &str) -> BTreeSet<AdenoSquamousMapping> {
        let expanded = self.doid_with_parents(doid);
        self.manual_config
            .adeno_squamous_mappings
            .iter()
            .filter(|mapping| {
                expanded.contains(&mapping.adeno_doid) || expanded.contains(&mapping.squamous_doid)
            })
            .cloned()
            .collect()
    }

    pub fn resolve_term_for_doid(&self, doid: &str) -> Option<&str> {
        self.term_for_doid.get(doid).map(String::as_str)
    }

    /// Case-insensitive lookup.
    pub fn resolve_doid_for_term(&self, term: &str) -> Option<&str> {
        self.doid_for_lower_case_term
            .get(&term.to_lowercase())
            .map(String::as_str)
    }

    /// Like [`Self::resolve_term_for_doid`], but an absent doid is an error.
    pub fn require_term_for_doid(&self, doid: &str) -> EligResult<&str> {
        self.resolve_term_for_doid(doid).ok_or_else(|| {
            OntologyError::UnknownDoid {
                doid: doid.to_string(),
            }
            .into()
        })
    }

    /// Like [`Self::resolve_doid_for_term`], but an absent term is an error.
    pub fn require_doid_for_term(&self, term: &str) -> EligResult<&str> {
        self.resolve_doid_for_term(term).ok_or_else(|| {
            OntologyError::UnknownTerm {
                term: term.to_string(),
            }
            .into()
        })
    }

    /// Cycles in the graph, manual edges included.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        cycles::find_cycles(&self.graph)
    }

    pub fn manual_config(&self) -> &DoidManualConfig {
        &self.manual_config
    }

    /// Curated relationships marked for exclusion. Closures do not consult them.
    pub fn excluded_relationships(&self) -> &BTreeSet<DoidRelationship> {
        &self.manual_config.child_to_parent_relationships_to_exclude
    }

    pub fn contains_doid(&self, doid: &str) -> bool {
        self.graph.get_node(doid).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn graph(&self) -> &IndexedGraph {
        &self.graph
    }
}
