use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use elig_core::config::{AdenoSquamousMapping, DoidManualConfig};
use elig_core::errors::OntologyError;
use elig_core::EligError;
use elig_doid::DoidModel;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn child_to_parent(edges: &[(&str, &str)]) -> Vec<(String, Vec<String>)> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (child, parent) in edges {
        map.entry(child.to_string())
            .or_default()
            .push(parent.to_string());
    }
    map.into_iter().collect()
}

fn no_terms() -> Vec<(String, String)> {
    Vec::new()
}

fn model(edges: &[(&str, &str)], overlay: DoidManualConfig) -> DoidModel {
    DoidModel::new(child_to_parent(edges), no_terms(), Arc::new(overlay)).unwrap()
}

fn overlay_with_extra_edges(edges: &[(&str, &str)]) -> DoidManualConfig {
    let mut overlay = DoidManualConfig::empty();
    for (child, parent) in edges {
        overlay
            .additional_doids_per_doid
            .insert(child.to_string(), parent.to_string());
    }
    overlay
}

#[test]
fn closure_combines_ontology_and_manual_edges() {
    let model = model(
        &[("child", "parent"), ("parent", "grandparent")],
        overlay_with_extra_edges(&[("child", "other")]),
    );
    assert_eq!(
        model.doid_with_parents("child"),
        set(&["child", "parent", "grandparent", "other"])
    );
}

#[test]
fn manual_edge_is_followed_from_deeper_ancestors() {
    let model = model(
        &[("child", "parent")],
        overlay_with_extra_edges(&[("parent", "extra"), ("extra", "root")]),
    );
    assert_eq!(
        model.doid_with_parents("child"),
        set(&["child", "parent", "extra", "root"])
    );
}

#[test]
fn manual_edge_applies_to_doids_missing_from_the_ontology() {
    let model = model(&[], overlay_with_extra_edges(&[("orphan", "adopted")]));
    assert_eq!(model.doid_with_parents("orphan"), set(&["orphan", "adopted"]));
}

#[test]
fn unknown_doid_expands_to_itself() {
    let model = model(&[("child", "parent")], DoidManualConfig::empty());
    assert_eq!(model.doid_with_parents("unknown"), set(&["unknown"]));
    assert!(!model.contains_doid("unknown"));
}

#[test]
fn multiple_parents_are_all_followed() {
    let model = model(
        &[
            ("leaf", "left"),
            ("leaf", "right"),
            ("left", "top"),
            ("right", "top"),
        ],
        DoidManualConfig::empty(),
    );
    assert_eq!(
        model.doid_with_parents("leaf"),
        set(&["leaf", "left", "right", "top"])
    );
    assert_eq!(model.parents_of("leaf"), vec!["left", "right"]);
}

#[test]
fn closure_terminates_on_cycles() {
    let model = model(
        &[("a", "b"), ("b", "c"), ("c", "a")],
        overlay_with_extra_edges(&[("c", "d")]),
    );
    assert_eq!(model.doid_with_parents("a"), set(&["a", "b", "c", "d"]));
    assert_eq!(model.find_cycles(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn main_cancer_doids_intersect_the_closure() {
    let mut overlay = DoidManualConfig::empty();
    overlay.main_cancer_doids = set(&["parent", "unrelated"]);
    let model = model(&[("child", "parent"), ("parent", "root")], overlay);

    assert_eq!(model.main_cancer_doids("child"), set(&["parent"]));
    assert_eq!(model.main_cancer_doids("parent"), set(&["parent"]));
    assert!(model.main_cancer_doids("root").is_empty());
}

#[test]
fn adeno_squamous_mappings_match_adeno_or_squamous_ancestors() {
    let mapping = AdenoSquamousMapping {
        adeno_squamous_doid: "adenosquamous".to_string(),
        squamous_doid: "squamous".to_string(),
        adeno_doid: "adeno".to_string(),
    };
    let mut overlay = DoidManualConfig::empty();
    overlay.adeno_squamous_mappings.insert(mapping.clone());
    let model = model(
        &[("adeno subtype", "adeno"), ("squamous subtype", "squamous")],
        overlay,
    );

    assert_eq!(
        model.adeno_squamous_mappings_for_doid("adeno subtype"),
        BTreeSet::from([mapping.clone()])
    );
    assert_eq!(
        model.adeno_squamous_mappings_for_doid("squamous"),
        BTreeSet::from([mapping])
    );
    assert!(model
        .adeno_squamous_mappings_for_doid("adenosquamous")
        .is_empty());
}

#[test]
fn terms_resolve_in_both_directions() {
    let model = DoidModel::new(
        child_to_parent(&[]),
        vec![("1324".to_string(), "Lung Cancer".to_string())],
        Arc::new(DoidManualConfig::empty()),
    )
    .unwrap();

    assert_eq!(model.resolve_term_for_doid("1324"), Some("Lung Cancer"));
    assert_eq!(model.resolve_term_for_doid("162"), None);
    assert_eq!(model.resolve_doid_for_term("lung cancer"), Some("1324"));
    assert_eq!(model.resolve_doid_for_term("LUNG CANCER"), Some("1324"));
    assert_eq!(model.resolve_doid_for_term("lung"), None);
}

#[test]
fn strict_resolution_reports_unknown_entries() {
    let model = DoidModel::empty(Arc::new(DoidManualConfig::empty())).unwrap();

    let err = model.require_term_for_doid("42").unwrap_err();
    assert!(matches!(
        err,
        EligError::Ontology(OntologyError::UnknownDoid { ref doid }) if doid == "42"
    ));
    assert!(err.to_string().contains("unknown doid: 42"));

    let err = model.require_doid_for_term("nothing").unwrap_err();
    assert!(matches!(
        err,
        EligError::Ontology(OntologyError::UnknownTerm { .. })
    ));
}

#[test]
fn excluded_relationships_do_not_prune_closures() {
    let model = model(&[("child", "parent")], DoidManualConfig::empty());
    assert!(model.excluded_relationships().is_empty());

    let curated = DoidManualConfig::create();
    let (child, parent) = {
        let relationship = curated
            .child_to_parent_relationships_to_exclude
            .iter()
            .next()
            .unwrap();
        (relationship.child.clone(), relationship.parent.clone())
    };
    let model = DoidModel::new(
        vec![(child.clone(), vec![parent.clone()])],
        no_terms(),
        Arc::new(curated),
    )
    .unwrap();
    assert_eq!(model.excluded_relationships().len(), 1);
    assert!(model.doid_with_parents(&child).contains(&parent));
}

#[test]
fn curated_overlay_is_shared_not_copied() {
    let overlay = Arc::new(DoidManualConfig::create());
    let first = DoidModel::empty(Arc::clone(&overlay)).unwrap();
    let second = DoidModel::empty(Arc::clone(&overlay)).unwrap();
    assert_eq!(Arc::strong_count(&overlay), 3);
    assert_eq!(first.manual_config(), second.manual_config());
    assert_eq!(first.edge_count(), overlay.additional_doids_per_doid.len());
}

#[test]
fn model_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DoidModel>();
}
