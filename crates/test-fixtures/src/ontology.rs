//! Golden disease-ontology fixtures.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// A small pre-parsed ontology plus the answers the closure engine must give for it.
#[derive(Debug, Clone, Deserialize)]
pub struct OntologyFixture {
    pub description: String,
    pub child_to_parents: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub term_for_doid: BTreeMap<String, String>,
    /// Apply the curated manual overlay instead of an empty one.
    #[serde(default)]
    pub use_curated_overlay: bool,
    /// Extra (child, parent) edges for fixtures that do not use the curated overlay.
    #[serde(default)]
    pub additional_doids_per_doid: BTreeMap<String, String>,
    pub expected_closures: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub expected_main_cancer_doids: BTreeMap<String, BTreeSet<String>>,
    /// Doid → adeno-squamous doids of the mappings that apply to it.
    #[serde(default)]
    pub expected_adeno_squamous_doids: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub expected_cycle_count: usize,
}

/// Load one of the files under `golden/doid/`.
pub fn load_ontology_fixture(name: &str) -> OntologyFixture {
    crate::load_fixture(&format!("golden/doid/{name}"))
}
