//! Property tests for the ancestor closure on arbitrary graphs, cycles included.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use proptest::prelude::*;

use elig_core::DoidManualConfig;
use elig_doid::DoidModel;

const NODES: usize = 16;

fn doid(i: usize) -> String {
    format!("d{i}")
}

/// Build a model from random edges. Self-loops and cycles are allowed in the
/// ontology part; manual edges skip self-references, which the overlay rejects.
fn build_model(edges: &[(usize, usize)], extra: &[(usize, usize)]) -> DoidModel {
    let mut child_to_parents: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for &(child, parent) in edges {
        child_to_parents
            .entry(doid(child))
            .or_default()
            .push(doid(parent));
    }
    let mut overlay = DoidManualConfig::empty();
    for &(child, parent) in extra {
        if child != parent {
            overlay
                .additional_doids_per_doid
                .insert(doid(child), doid(parent));
        }
    }
    DoidModel::new(
        child_to_parents,
        Vec::<(String, String)>::new(),
        Arc::new(overlay),
    )
    .unwrap()
}

fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..NODES * 3)
}

fn extra_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..NODES)
}

proptest! {
    #[test]
    fn closure_contains_start_and_is_bounded(
        edges in edge_strategy(),
        extra in extra_strategy(),
        start in 0..NODES + 4
    ) {
        let model = build_model(&edges, &extra);
        let closure = model.doid_with_parents(&doid(start));
        prop_assert!(closure.contains(&doid(start)));
        prop_assert!(closure.len() <= NODES.max(start + 1));
    }

    #[test]
    fn closure_includes_direct_parents_and_their_closures(
        edges in edge_strategy(),
        extra in extra_strategy(),
        start in 0..NODES
    ) {
        let model = build_model(&edges, &extra);
        let closure = model.doid_with_parents(&doid(start));
        for parent in model.parents_of(&doid(start)) {
            prop_assert!(closure.contains(parent));
            prop_assert!(closure.is_superset(&model.doid_with_parents(parent)));
        }
    }

    #[test]
    fn closure_is_idempotent(
        edges in edge_strategy(),
        extra in extra_strategy(),
        start in 0..NODES
    ) {
        let model = build_model(&edges, &extra);
        let closure = model.doid_with_parents(&doid(start));
        let expanded = model.create_full_expanded_doid_tree(Some(&closure));
        prop_assert_eq!(expanded, closure);
    }

    #[test]
    fn expanded_tree_is_union_of_closures(
        edges in edge_strategy(),
        tumor in prop::collection::btree_set(0..NODES, 0..5)
    ) {
        let model = build_model(&edges, &[]);
        let tumor: BTreeSet<String> = tumor.into_iter().map(doid).collect();
        let mut union = BTreeSet::new();
        for d in &tumor {
            union.extend(model.doid_with_parents(d));
        }
        prop_assert_eq!(model.create_full_expanded_doid_tree(Some(&tumor)), union);
    }

    #[test]
    fn cycle_members_share_a_closure(
        edges in edge_strategy(),
        extra in extra_strategy()
    ) {
        let model = build_model(&edges, &extra);
        for cycle in model.find_cycles() {
            let first = model.doid_with_parents(&cycle[0]);
            for member in &cycle {
                prop_assert_eq!(&model.doid_with_parents(member), &first);
            }
        }
    }
}
