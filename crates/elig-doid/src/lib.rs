//! # elig-doid
//!
//! The disease ontology closure engine. Holds the child → parent DOID graph
//! (`petgraph`) with the curated manual overlay applied, computes ancestor
//! closures iteratively, and answers the membership queries leaf criteria ask.
//!
//! A [`DoidModel`] is built once and only read afterwards; it is `Send + Sync`.

pub mod graph;
pub mod model;
pub mod queries;

pub use model::DoidModel;
pub use queries::{
    has_at_least_one_combination_of_doids, has_configured_doids, is_of_doid_combination_type,
    is_of_exact_doid,
};
