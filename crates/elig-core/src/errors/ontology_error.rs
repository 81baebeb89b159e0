/// Disease ontology errors.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("manual overlay maps doid {doid} onto itself")]
    SelfReferencingManualEdge { doid: String },

    #[error("unknown doid: {doid}")]
    UnknownDoid { doid: String },

    #[error("unknown doid term: {term}")]
    UnknownTerm { term: String },
}
