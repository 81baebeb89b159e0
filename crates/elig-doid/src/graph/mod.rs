//! Graph storage and algorithms behind [`crate::DoidModel`].

pub mod closure;
pub mod cycles;
pub mod indexed_graph;

pub use indexed_graph::{DoidEdge, DoidNode, IndexedGraph};
