mod composite_error;
mod config_error;
mod ontology_error;

pub use composite_error::CompositeError;
pub use config_error::ConfigError;
pub use ontology_error::OntologyError;

/// Top-level error for the eligibility core.
#[derive(Debug, thiserror::Error)]
pub enum EligError {
    #[error("composite error: {0}")]
    Composite(#[from] CompositeError),

    #[error("ontology error: {0}")]
    Ontology(#[from] OntologyError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type EligResult<T> = Result<T, EligError>;
